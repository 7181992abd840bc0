//! Shared test doubles: recording bot, scripted/failing LLM clients, fixed
//! clock, and prompt assets.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cazuela_core::{Bot, Chat, Message, MessageDirection, Result, User};
use chrono::{DateTime, Local, TimeZone, Utc};
use flow_handlers::Prompts;
use llm_client::{ChatMessage, LlmClient};

/// Mock bot recording every outbound line as "chat_id:text" (documents as
/// "chat_id:doc:caption").
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<String>>,
}

impl RecordingBot {
    pub fn lines(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|l| l.splitn(2, ':').nth(1).unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(format!("{}:{}", chat.id, text));
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, _path: &Path, caption: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(format!("{}:doc:{}", chat.id, caption));
        Ok(())
    }
}

/// Scripted LLM client: pops canned replies and records every request.
#[derive(Default)]
pub struct MockLlm {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn with_replies(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn chat(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(messages);
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "mock reply".to_string()))
    }
}

/// LLM client whose every call fails.
pub struct FailingLlm;

#[async_trait]
impl LlmClient for FailingLlm {
    async fn chat(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        anyhow::bail!("model unavailable")
    }
}

pub fn test_prompts(menu_document: PathBuf) -> Arc<Prompts> {
    Arc::new(Prompts {
        options_menu: "1. Menú\n2. Reservar mesa\n3. Consultas\n0. Salir".to_string(),
        consult_system: "Eres el asistente del restaurante.".to_string(),
        order_system: "Eres el encargado de pedidos del restaurante.".to_string(),
        menu_document,
    })
}

/// A clock pinned to the given local date and time.
pub fn fixed_clock(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Arc<dyn Fn() -> DateTime<Local> + Send + Sync> {
    let instant = Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    Arc::new(move || instant)
}

pub fn make_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: "msg".to_string(),
        user: User {
            id: 11,
            username: Some("guest".to_string()),
            first_name: Some("Guest".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}
