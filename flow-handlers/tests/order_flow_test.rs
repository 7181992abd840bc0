//! Tests for the order dialogue: transcript accumulation and replay, reset on
//! entry, handover to payment, and failure handling.

mod common;

use std::sync::Arc;

use common::{make_message, test_prompts, FailingLlm, MockLlm, RecordingBot};
use flow_engine::FlowEngine;
use flow_handlers::{build_engine, texts, SessionData};
use llm_client::{LlmClient, MessageRole};
use reservations::{ReservationService, Schedule};
use tempfile::TempDir;

fn engine_with_llm(
    dir: &TempDir,
    bot: Arc<RecordingBot>,
    llm: Arc<dyn LlmClient>,
) -> FlowEngine<SessionData> {
    let service =
        ReservationService::open(dir.path().join("reservas"), Schedule::default()).unwrap();
    build_engine(bot, service, llm, test_prompts(dir.path().join("menu.pdf")))
}

/// Walks from welcome into the order dialogue (option 1 → menu → "sí").
async fn open_order(engine: &FlowEngine<SessionData>, chat: i64) {
    engine.dispatch(&make_message(chat, "hola")).await.unwrap();
    engine.dispatch(&make_message(chat, "1")).await.unwrap();
    engine.dispatch(&make_message(chat, "sí")).await.unwrap();
}

/// **Test: every order turn replays the whole transcript plus the product
/// system prompt to the model.**
#[tokio::test]
async fn test_order_replays_full_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let bot = Arc::new(RecordingBot::default());
    let llm = Arc::new(MockLlm::with_replies(&["Una cazuela, ¡marchando!", "Añadido el vino."]));
    let engine = engine_with_llm(&dir, bot.clone(), llm.clone());

    open_order(&engine, 7).await;
    assert_eq!(bot.texts().last().unwrap(), texts::ASK_ORDER);

    engine.dispatch(&make_message(7, "Una cazuela")).await.unwrap();
    engine.dispatch(&make_message(7, "Y un vino")).await.unwrap();

    let requests = llm.requests();
    assert_eq!(requests.len(), 2);

    // First turn: system + current question.
    assert_eq!(requests[0].len(), 2);
    assert_eq!(requests[0][0].role, MessageRole::System);
    assert_eq!(requests[0][1].content, "Una cazuela");

    // Second turn sees the whole first exchange.
    assert_eq!(requests[1].len(), 4);
    assert_eq!(requests[1][1].content, "Una cazuela");
    assert_eq!(requests[1][2].role, MessageRole::Assistant);
    assert_eq!(requests[1][2].content, "Una cazuela, ¡marchando!");
    assert_eq!(requests[1][3].content, "Y un vino");
}

/// **Test: "no" hands over to the payment confirmation; "sí" closes with the
/// success message and the session is idle again.**
#[tokio::test]
async fn test_order_no_goes_to_payment() {
    let dir = tempfile::tempdir().unwrap();
    let bot = Arc::new(RecordingBot::default());
    let llm = Arc::new(MockLlm::default());
    let engine = engine_with_llm(&dir, bot.clone(), llm);

    open_order(&engine, 7).await;
    engine.dispatch(&make_message(7, "Una cazuela")).await.unwrap();
    engine.dispatch(&make_message(7, "No")).await.unwrap();
    assert_eq!(bot.texts().last().unwrap(), texts::CONFIRM_PAYMENT);

    engine.dispatch(&make_message(7, "sí")).await.unwrap();
    assert_eq!(bot.texts().last().unwrap(), texts::PAYMENT_DONE);

    // Back to idle: the next message greets again.
    engine.dispatch(&make_message(7, "hola")).await.unwrap();
    assert!(bot.texts().iter().filter(|t| *t == texts::GREETING).count() >= 2);
}

/// **Test: re-entering the order dialogue starts from an empty transcript.**
#[tokio::test]
async fn test_order_transcript_resets_on_entry() {
    let dir = tempfile::tempdir().unwrap();
    let bot = Arc::new(RecordingBot::default());
    let llm = Arc::new(MockLlm::default());
    let engine = engine_with_llm(&dir, bot.clone(), llm.clone());

    open_order(&engine, 7).await;
    engine.dispatch(&make_message(7, "Una cazuela")).await.unwrap();
    engine.dispatch(&make_message(7, "No")).await.unwrap();
    engine.dispatch(&make_message(7, "sí")).await.unwrap();

    // Second visit.
    open_order(&engine, 7).await;
    engine.dispatch(&make_message(7, "Solo un café")).await.unwrap();

    let requests = llm.requests();
    let last = requests.last().unwrap();
    // System + current question only: nothing survived from the first order.
    assert_eq!(last.len(), 2);
    assert_eq!(last[1].content, "Solo un café");
}

/// **Test: a failing model call apologizes and leaves the transcript as if the
/// turn never happened.**
#[tokio::test]
async fn test_order_failure_keeps_transcript_clean() {
    let dir = tempfile::tempdir().unwrap();
    let bot = Arc::new(RecordingBot::default());
    let engine = engine_with_llm(&dir, bot.clone(), Arc::new(FailingLlm));

    open_order(&engine, 7).await;
    engine.dispatch(&make_message(7, "Una cazuela")).await.unwrap();
    assert_eq!(bot.texts().last().unwrap(), texts::APOLOGY);

    // Still in the order dialogue: "no" proceeds to payment.
    engine.dispatch(&make_message(7, "no")).await.unwrap();
    assert_eq!(bot.texts().last().unwrap(), texts::CONFIRM_PAYMENT);
}
