//! Bot abstraction for sending messages and documents.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.
//! Dialogues and the flow engine talk to [`Bot`] only, so tests can swap in mocks.

use crate::error::{BotError, Result};
use crate::types::Chat;
use async_trait::async_trait;
use std::path::Path;
use teloxide::payloads::SendDocumentSetters;
use teloxide::prelude::*;
use teloxide::types::InputFile;

/// Abstraction for outbound sends. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a document (e.g. the menu PDF) with a caption to the given chat.
    async fn send_document(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Wraps an existing teloxide bot (shared with the REPL runner).
    pub fn from_teloxide(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, path: &Path, caption: &str) -> Result<()> {
        self.bot
            .send_document(ChatId(chat.id), InputFile::file(path.to_path_buf()))
            .caption(caption.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
