//! Assembly and REPL runner: builds the reservation service, the LLM client,
//! and the flow engine, then feeds every inbound Telegram text through
//! [`FlowEngine::dispatch`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use cazuela_core::{init_tracing, Bot, TelegramBot};
use flow_engine::FlowEngine;
use flow_handlers::{build_engine, Prompts, SessionData};
use llm_client::{LlmClient, OpenAiLlmClient};
use reservations::{ReservationService, Schedule};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::config::BotConfig;

/// Main entry: init logging, build components, start the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    std::fs::create_dir_all("logs")?;
    init_tracing(&config.log_file)?;

    info!(
        reservations_dir = %config.reservations_dir,
        messages_dir = %config.messages_dir,
        model = %config.ai_model,
        "Initializing bot"
    );

    let engine = Arc::new(build_components(&config)?);
    let teloxide_bot = teloxide::Bot::new(config.bot_token.clone());

    info!("Bot started successfully");

    run_repl(teloxide_bot, engine).await
}

/// Builds the flow engine from config (loads prompts, replays the availability
/// log, constructs the OpenAI client). Split out so tests can assemble the
/// same pipeline with mock components via `flow_handlers::build_engine`.
fn build_components(config: &BotConfig) -> Result<FlowEngine<SessionData>> {
    let prompts = Arc::new(Prompts::load(
        Path::new(&config.messages_dir),
        PathBuf::from(&config.menu_file),
    )?);
    let service = ReservationService::open(&config.reservations_dir, Schedule::default())?;
    let llm: Arc<dyn LlmClient> = Arc::new(
        OpenAiLlmClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.ai_model.clone()),
    );
    let bot: Arc<dyn Bot> = Arc::new(TelegramBot::new(config.bot_token.clone()));
    Ok(build_engine(bot, service, llm, prompts))
}

/// Converts each inbound text to a core message and dispatches it (spawned per
/// message so the REPL returns immediately).
async fn run_repl(bot: teloxide::Bot, engine: Arc<FlowEngine<SessionData>>) -> Result<()> {
    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
        let engine = engine.clone();

        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Received non-text message; ignored");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = engine.dispatch(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Dispatch failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
