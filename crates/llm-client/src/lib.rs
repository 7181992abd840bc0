//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. Transport-agnostic;
//! the consult and order dialogues depend only on the trait, so tests swap in mocks.

use anyhow::Result;
use async_trait::async_trait;

mod openai;

pub use openai::OpenAiLlmClient;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message, one-to-one with one element of the OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// LLM client interface: one completion from a list of messages.
///
/// Callers own the failure policy: a returned error is logged and replaced by a
/// user-facing apology, never surfaced raw.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system/user/assistant).
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of length <= 11 collapse to "***" so no part leaks.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short_keys_fully_hidden() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("12345678901"), "***");
    }

    #[test]
    fn test_mask_token_long_keys_keep_edges() {
        assert_eq!(mask_token("sk-abcd1234567890wxyz"), "sk-abcd***wxyz");
    }

    #[test]
    fn test_chat_message_constructors() {
        assert_eq!(ChatMessage::system("a").role, MessageRole::System);
        assert_eq!(ChatMessage::user("b").role, MessageRole::User);
        assert_eq!(ChatMessage::assistant("c").role, MessageRole::Assistant);
        assert_eq!(ChatMessage::user("hola").content, "hola");
    }
}
