//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    pub reservations_dir: String,
    pub messages_dir: String,
    pub menu_file: String,
    pub log_file: String,
}

impl BotConfig {
    /// Loads the configuration from environment variables. A token passed on
    /// the command line overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let reservations_dir =
            env::var("RESERVATIONS_DIR").unwrap_or_else(|_| "./reservas".to_string());
        let messages_dir = env::var("MESSAGES_DIR").unwrap_or_else(|_| "./mensajes".to_string());
        let menu_file =
            env::var("MENU_FILE").unwrap_or_else(|_| "./mensajes/menu.pdf".to_string());
        let log_file = "logs/cazuela-bot.log".to_string();

        Ok(Self {
            bot_token,
            openai_api_key,
            openai_base_url,
            ai_model,
            reservations_dir,
            messages_dir,
            menu_file,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "AI_MODEL",
            "RESERVATIONS_DIR",
            "MESSAGES_DIR",
            "MENU_FILE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.openai_api_key, "test_key");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.ai_model, "gpt-3.5-turbo");
        assert_eq!(config.reservations_dir, "./reservas");
        assert_eq!(config.messages_dir, "./mensajes");
        assert_eq!(config.menu_file, "./mensajes/menu.pdf");
        assert_eq!(config.log_file, "logs/cazuela-bot.log");
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("OPENAI_API_KEY", "custom_key");
        env::set_var("OPENAI_BASE_URL", "https://custom.api.com");
        env::set_var("AI_MODEL", "gpt-4");
        env::set_var("RESERVATIONS_DIR", "/tmp/reservas");
        env::set_var("MESSAGES_DIR", "/tmp/mensajes");
        env::set_var("MENU_FILE", "/tmp/menu.pdf");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.openai_base_url, "https://custom.api.com");
        assert_eq!(config.ai_model, "gpt-4");
        assert_eq!(config.reservations_dir, "/tmp/reservas");
        assert_eq!(config.messages_dir, "/tmp/mensajes");
        assert_eq!(config.menu_file, "/tmp/menu.pdf");
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_load_config_requires_token() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");

        assert!(BotConfig::load(None).is_err());
    }
}
