//! Order dialogue: multi-turn exchange with the language model over the
//! product prompt. The whole running transcript is replayed to the model on
//! every turn; "no" hands over to the payment confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{normalize, Chat, Message, Result};
use flow_engine::{Flow, Transition};
use llm_client::{ChatMessage, LlmClient};
use tracing::error;

use crate::prompts::Prompts;
use crate::session::SessionData;
use crate::{texts, ORDER_FLOW, PAYMENT_FLOW};

pub struct OrderFlow {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<Prompts>,
}

impl OrderFlow {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<Prompts>) -> Self {
        Self { llm, prompts }
    }
}

#[async_trait]
impl Flow<SessionData> for OrderFlow {
    fn name(&self) -> &'static str {
        ORDER_FLOW
    }

    async fn enter(&self, _chat: &Chat, state: &mut SessionData) -> Result<Vec<String>> {
        // A fresh order starts with an empty exchange.
        state.order_transcript.clear();
        Ok(vec![texts::ASK_ORDER.to_string()])
    }

    async fn handle(&self, message: &Message, state: &mut SessionData) -> Result<Transition> {
        if normalize(&message.content) == "no" {
            return Ok(Transition::Goto(PAYMENT_FLOW, Vec::new()));
        }

        let mut messages = vec![ChatMessage::system(self.prompts.order_system.as_str())];
        messages.extend(state.order_transcript.iter().cloned());
        messages.push(ChatMessage::user(message.content.as_str()));

        match self.llm.chat(messages).await {
            Ok(reply) => {
                state
                    .order_transcript
                    .push(ChatMessage::user(message.content.as_str()));
                state.order_transcript.push(ChatMessage::assistant(reply.as_str()));
                Ok(Transition::Stay(vec![reply, texts::MORE_ORDER.to_string()]))
            }
            Err(e) => {
                // Transcript untouched: the failed turn never happened.
                error!(error = %e, "Order request to the language model failed");
                Ok(Transition::Stay(vec![texts::APOLOGY.to_string()]))
            }
        }
    }
}
