//! Per-session dialogue state, one value per chat, owned by the flow engine's
//! session store. Nothing here is process-wide.

use llm_client::ChatMessage;
use reservations::{CalendarDay, ReservationDraft};

/// Dialogue state for one conversation.
#[derive(Debug, Default)]
pub struct SessionData {
    pub reservation: ReservationStep,
    pub consult: ConsultStep,
    /// Running order exchange, replayed to the model on every order turn.
    /// Cleared when the order dialogue is entered.
    pub order_transcript: Vec<ChatMessage>,
}

/// Position inside the reservation dialogue. The draft lives inside the step
/// variants, so confirming or cancelling clears it by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReservationStep {
    #[default]
    Idle,
    AwaitingDate,
    AwaitingDetails {
        date: CalendarDay,
    },
    AwaitingConfirmation {
        draft: ReservationDraft,
    },
}

/// Position inside the consult dialogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsultStep {
    #[default]
    Idle,
    AwaitingQuestion,
    AwaitingAnother,
}
