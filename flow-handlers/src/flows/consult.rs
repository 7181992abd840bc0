//! Consult dialogue: free-form question to the language model, then an
//! "anything else?" loop back to the question or out to the options router.

use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{normalize, Chat, Message, Result};
use flow_engine::{Flow, Transition};
use llm_client::{ChatMessage, LlmClient};
use tracing::error;

use crate::prompts::Prompts;
use crate::session::{ConsultStep, SessionData};
use crate::{texts, CONSULT_FLOW, OPTIONS_FLOW};

pub struct ConsultFlow {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<Prompts>,
}

impl ConsultFlow {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<Prompts>) -> Self {
        Self { llm, prompts }
    }
}

#[async_trait]
impl Flow<SessionData> for ConsultFlow {
    fn name(&self) -> &'static str {
        CONSULT_FLOW
    }

    async fn enter(&self, _chat: &Chat, state: &mut SessionData) -> Result<Vec<String>> {
        state.consult = ConsultStep::AwaitingQuestion;
        Ok(vec![texts::ASK_CONSULT.to_string()])
    }

    async fn handle(&self, message: &Message, state: &mut SessionData) -> Result<Transition> {
        match state.consult {
            ConsultStep::Idle | ConsultStep::AwaitingQuestion => {
                let messages = vec![
                    ChatMessage::system(self.prompts.consult_system.as_str()),
                    ChatMessage::user(message.content.as_str()),
                ];
                match self.llm.chat(messages).await {
                    Ok(reply) => {
                        state.consult = ConsultStep::AwaitingAnother;
                        Ok(Transition::Stay(vec![
                            reply,
                            texts::ANOTHER_CONSULT.to_string(),
                        ]))
                    }
                    Err(e) => {
                        error!(error = %e, "Consult request to the language model failed");
                        state.consult = ConsultStep::AwaitingQuestion;
                        Ok(Transition::Stay(vec![texts::APOLOGY.to_string()]))
                    }
                }
            }
            ConsultStep::AwaitingAnother => match normalize(&message.content).as_str() {
                "si" => {
                    state.consult = ConsultStep::AwaitingQuestion;
                    Ok(Transition::Stay(vec![texts::ASK_CONSULT.to_string()]))
                }
                "no" => {
                    state.consult = ConsultStep::Idle;
                    Ok(Transition::Goto(OPTIONS_FLOW, Vec::new()))
                }
                _ => Ok(Transition::Stay(vec![texts::INVALID_YES_NO.to_string()])),
            },
        }
    }
}
