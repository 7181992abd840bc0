//! # cazuela-bot
//!
//! Entry-point crate: env configuration, Telegram adapters, and the REPL
//! runner that feeds inbound messages into the flow engine.

pub mod adapters;
pub mod config;
pub mod runner;

pub use config::BotConfig;
pub use runner::run_bot;
