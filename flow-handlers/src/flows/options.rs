//! Top-level options router: maps "1"/"2"/"3"/"0" to the dialogues.

use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{Chat, Message, Result};
use flow_engine::{Flow, Transition};

use crate::prompts::Prompts;
use crate::session::SessionData;
use crate::{texts, CONSULT_FLOW, MENU_FLOW, OPTIONS_FLOW, RESERVATION_FLOW};

pub struct OptionsFlow {
    prompts: Arc<Prompts>,
}

impl OptionsFlow {
    pub fn new(prompts: Arc<Prompts>) -> Self {
        Self { prompts }
    }
}

#[async_trait]
impl Flow<SessionData> for OptionsFlow {
    fn name(&self) -> &'static str {
        OPTIONS_FLOW
    }

    async fn enter(&self, _chat: &Chat, _state: &mut SessionData) -> Result<Vec<String>> {
        Ok(vec![self.prompts.options_menu.clone()])
    }

    async fn handle(&self, message: &Message, _state: &mut SessionData) -> Result<Transition> {
        match message.content.trim() {
            "1" => Ok(Transition::Goto(MENU_FLOW, Vec::new())),
            "2" => Ok(Transition::Goto(RESERVATION_FLOW, Vec::new())),
            "3" => Ok(Transition::Goto(CONSULT_FLOW, Vec::new())),
            "0" => Ok(Transition::End(vec![texts::EXIT_MESSAGE.to_string()])),
            _ => Ok(Transition::Stay(vec![texts::INVALID_OPTION.to_string()])),
        }
    }
}
