//! # flow-handlers
//!
//! The restaurant's scripted dialogues: options router, menu, reservation,
//! consult, order, and payment confirmation, plus the per-session dialogue
//! state and the startup-loaded prompt assets.

pub mod assembly;
pub mod flows;
pub mod prompts;
pub mod session;
pub mod texts;

pub use assembly::{build_engine, build_engine_with_reservation_flow};
pub use prompts::Prompts;
pub use session::{ConsultStep, ReservationStep, SessionData};

/// Flow registry names; also the targets of `Transition::Goto`.
pub const OPTIONS_FLOW: &str = "opciones";
pub const MENU_FLOW: &str = "menu";
pub const RESERVATION_FLOW: &str = "reserva";
pub const CONSULT_FLOW: &str = "consultas";
pub const ORDER_FLOW: &str = "pedido";
pub const PAYMENT_FLOW: &str = "pago";
