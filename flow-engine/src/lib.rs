//! # Flow engine
//!
//! Runtime for scripted multi-step dialogues. Each conversation (keyed by chat id)
//! is either idle or inside exactly one [`Flow`]; every inbound message is dispatched
//! to the active flow's `handle`, and the returned [`Transition`] decides whether the
//! conversation stays, jumps to another flow, or returns to idle. Idle conversations
//! are routed by keyword, with any other message acting as the welcome trigger.
//!
//! A flow that returns `Err` is logged and answered with a generic apology; the
//! conversation position is not advanced, so the user can simply resend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{normalize, Bot, Chat, Message, Result};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Outcome of one handled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Send the replies and stay on the current flow (re-prompt or internal step advance).
    Stay(Vec<String>),
    /// Send the replies, then activate the named flow (its entry prompts follow).
    Goto(&'static str, Vec<String>),
    /// Send the replies and return the conversation to idle (keyword routing).
    End(Vec<String>),
}

/// One self-contained scripted dialogue. `S` is the per-session state shared by
/// all flows of one conversation.
#[async_trait]
pub trait Flow<S>: Send + Sync {
    /// Registry name; also the target of [`Transition::Goto`].
    fn name(&self) -> &'static str;

    /// Prompts sent when the flow becomes active. May reset flow-owned
    /// sub-state (e.g. clear an order transcript).
    async fn enter(&self, chat: &Chat, state: &mut S) -> Result<Vec<String>>;

    /// Handles one captured user message while this flow is active.
    async fn handle(&self, message: &Message, state: &mut S) -> Result<Transition>;
}

/// Conversation position plus dialogue state for one chat.
#[derive(Debug, Default)]
pub struct Session<S> {
    /// Name of the active flow, or `None` when idle.
    pub active: Option<&'static str>,
    pub state: S,
}

/// Dispatches inbound messages to flows and relays their replies through [`Bot`].
///
/// Sessions live in a per-chat map; the per-session mutex serializes handling
/// for one conversation while distinct chats interleave freely.
pub struct FlowEngine<S> {
    bot: Arc<dyn Bot>,
    flows: HashMap<&'static str, Arc<dyn Flow<S>>>,
    sessions: DashMap<i64, Arc<Mutex<Session<S>>>>,
    /// Normalized keyword -> flow name, consulted when the session is idle.
    keywords: Vec<(String, &'static str)>,
    /// Greeting lines plus the flow entered when an idle session receives
    /// anything that is not a keyword.
    welcome: Option<(Vec<String>, &'static str)>,
    apology: String,
}

impl<S: Default + Send + 'static> FlowEngine<S> {
    /// Creates an engine with no flows and no routing.
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            flows: HashMap::new(),
            sessions: DashMap::new(),
            keywords: Vec::new(),
            welcome: None,
            apology: "Something went wrong, please try again.".to_string(),
        }
    }

    /// Registers a flow under its own name.
    pub fn add_flow(mut self, flow: Arc<dyn Flow<S>>) -> Self {
        self.flows.insert(flow.name(), flow);
        self
    }

    /// Routes the (normalized) keyword to the named flow when the session is idle.
    pub fn with_keyword(mut self, keyword: &str, flow: &'static str) -> Self {
        self.keywords.push((normalize(keyword), flow));
        self
    }

    /// Sets the greeting lines and the flow entered for any other idle message.
    pub fn with_welcome(mut self, lines: Vec<String>, flow: &'static str) -> Self {
        self.welcome = Some((lines, flow));
        self
    }

    /// Sets the text sent when a flow step fails.
    pub fn with_apology(mut self, text: impl Into<String>) -> Self {
        self.apology = text.into();
        self
    }

    /// Handles one inbound message end to end: resolves the session, runs the
    /// active flow or the idle routing, and sends every produced reply.
    #[instrument(skip(self, message))]
    pub async fn dispatch(&self, message: &Message) -> Result<()> {
        let chat_id = message.chat.id;
        let cell = self
            .sessions
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::default())))
            .clone();
        // The per-session lock is held across the whole step: one message at a
        // time per conversation.
        let mut session = cell.lock().await;

        info!(
            chat_id,
            active = session.active.unwrap_or("<idle>"),
            "step: dispatch started"
        );

        match session.active {
            Some(name) => self.run_active(name, message, &mut session).await?,
            None => self.route_idle(message, &mut session).await?,
        }

        info!(
            chat_id,
            active = session.active.unwrap_or("<idle>"),
            "step: dispatch finished"
        );
        Ok(())
    }

    async fn run_active(
        &self,
        name: &'static str,
        message: &Message,
        session: &mut Session<S>,
    ) -> Result<()> {
        let flow = match self.flows.get(name) {
            Some(flow) => flow.clone(),
            None => {
                warn!(flow = name, "Active flow is not registered; resetting session");
                session.active = None;
                return Ok(());
            }
        };

        match flow.handle(message, &mut session.state).await {
            Ok(Transition::Stay(lines)) => self.send_lines(&message.chat, &lines).await,
            Ok(Transition::Goto(next, lines)) => {
                self.send_lines(&message.chat, &lines).await?;
                self.activate(next, &message.chat, session).await
            }
            Ok(Transition::End(lines)) => {
                session.active = None;
                self.send_lines(&message.chat, &lines).await
            }
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, flow = name, "Flow step failed");
                self.send_lines(&message.chat, std::slice::from_ref(&self.apology))
                    .await
            }
        }
    }

    async fn route_idle(&self, message: &Message, session: &mut Session<S>) -> Result<()> {
        let text = normalize(&message.content);
        if let Some(flow) = self
            .keywords
            .iter()
            .find(|(k, _)| *k == text)
            .map(|(_, flow)| *flow)
        {
            return self.activate(flow, &message.chat, session).await;
        }

        if let Some((lines, flow)) = self.welcome.clone() {
            self.send_lines(&message.chat, &lines).await?;
            return self.activate(flow, &message.chat, session).await;
        }
        Ok(())
    }

    /// Marks the flow active and sends its entry prompts. On failure the
    /// session is left idle and the apology is sent.
    async fn activate(
        &self,
        name: &'static str,
        chat: &Chat,
        session: &mut Session<S>,
    ) -> Result<()> {
        let flow = match self.flows.get(name) {
            Some(flow) => flow.clone(),
            None => {
                warn!(flow = name, "Goto target is not registered; session left idle");
                session.active = None;
                return Ok(());
            }
        };

        session.active = Some(name);
        match flow.enter(chat, &mut session.state).await {
            Ok(lines) => self.send_lines(chat, &lines).await,
            Err(e) => {
                error!(error = %e, chat_id = chat.id, flow = name, "Flow entry failed");
                session.active = None;
                self.send_lines(chat, std::slice::from_ref(&self.apology))
                    .await
            }
        }
    }

    async fn send_lines(&self, chat: &Chat, lines: &[String]) -> Result<()> {
        for line in lines {
            self.bot.send_message(chat, line).await?;
        }
        Ok(())
    }
}
