//! # cazuela-core
//!
//! Core types and traits for the restaurant assistant: [`Bot`], message and user types,
//! error taxonomy, text normalization, and tracing initialization. Transport-agnostic;
//! used by flow-engine, flow-handlers, and cazuela-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod normalize;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use error::{BotError, FlowError, Result};
pub use logger::init_tracing;
pub use normalize::normalize;
pub use types::{Chat, Message, MessageDirection, User};
