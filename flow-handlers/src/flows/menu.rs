//! Menu dialogue: sends the menu document, then branches to the order
//! dialogue or back to the options router on a yes/no answer.

use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{normalize, Bot, Chat, Message, Result};
use flow_engine::{Flow, Transition};

use crate::prompts::Prompts;
use crate::session::SessionData;
use crate::{texts, MENU_FLOW, OPTIONS_FLOW, ORDER_FLOW};

pub struct MenuFlow {
    bot: Arc<dyn Bot>,
    prompts: Arc<Prompts>,
}

impl MenuFlow {
    pub fn new(bot: Arc<dyn Bot>, prompts: Arc<Prompts>) -> Self {
        Self { bot, prompts }
    }
}

#[async_trait]
impl Flow<SessionData> for MenuFlow {
    fn name(&self) -> &'static str {
        MENU_FLOW
    }

    async fn enter(&self, chat: &Chat, _state: &mut SessionData) -> Result<Vec<String>> {
        self.bot
            .send_document(chat, &self.prompts.menu_document, texts::MENU_CAPTION)
            .await?;
        Ok(vec![texts::MENU_QUESTION.to_string()])
    }

    async fn handle(&self, message: &Message, _state: &mut SessionData) -> Result<Transition> {
        match normalize(&message.content).as_str() {
            "si" => Ok(Transition::Goto(ORDER_FLOW, Vec::new())),
            "no" => Ok(Transition::Goto(
                OPTIONS_FLOW,
                vec![texts::MENU_DECLINED.to_string()],
            )),
            _ => Ok(Transition::Stay(vec![texts::INVALID_YES_NO.to_string()])),
        }
    }
}
