//! Payment confirmation: a single yes/no closing the order dialogue.

use async_trait::async_trait;
use cazuela_core::{normalize, Chat, Message, Result};
use flow_engine::{Flow, Transition};

use crate::session::SessionData;
use crate::{texts, PAYMENT_FLOW};

pub struct PaymentFlow;

#[async_trait]
impl Flow<SessionData> for PaymentFlow {
    fn name(&self) -> &'static str {
        PAYMENT_FLOW
    }

    async fn enter(&self, _chat: &Chat, _state: &mut SessionData) -> Result<Vec<String>> {
        Ok(vec![texts::CONFIRM_PAYMENT.to_string()])
    }

    async fn handle(&self, message: &Message, _state: &mut SessionData) -> Result<Transition> {
        match normalize(&message.content).as_str() {
            "si" => Ok(Transition::End(vec![texts::PAYMENT_DONE.to_string()])),
            "no" => Ok(Transition::End(vec![texts::PAYMENT_DECLINED.to_string()])),
            _ => Ok(Transition::Stay(vec![texts::INVALID_YES_NO.to_string()])),
        }
    }
}
