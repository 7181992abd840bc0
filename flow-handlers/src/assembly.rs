//! Wires the flows into a [`FlowEngine`]. Shared by the binary and the
//! integration tests (which inject mock bot and LLM client).

use std::sync::Arc;

use cazuela_core::Bot;
use flow_engine::FlowEngine;
use llm_client::LlmClient;
use reservations::ReservationService;

use crate::flows::{
    ConsultFlow, MenuFlow, OptionsFlow, OrderFlow, PaymentFlow, ReservationFlow,
};
use crate::prompts::Prompts;
use crate::session::SessionData;
use crate::{texts, OPTIONS_FLOW};

/// Builds the engine with every dialogue registered, the options keyword, the
/// welcome greeting, and the Spanish apology.
pub fn build_engine(
    bot: Arc<dyn Bot>,
    service: ReservationService,
    llm: Arc<dyn LlmClient>,
    prompts: Arc<Prompts>,
) -> FlowEngine<SessionData> {
    build_engine_with_reservation_flow(
        bot,
        llm,
        prompts,
        ReservationFlow::new(service),
    )
}

/// Same wiring with a caller-supplied reservation flow (tests pin its clock).
pub fn build_engine_with_reservation_flow(
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
    prompts: Arc<Prompts>,
    reservation: ReservationFlow,
) -> FlowEngine<SessionData> {
    FlowEngine::new(bot.clone())
        .add_flow(Arc::new(OptionsFlow::new(prompts.clone())))
        .add_flow(Arc::new(MenuFlow::new(bot, prompts.clone())))
        .add_flow(Arc::new(reservation))
        .add_flow(Arc::new(ConsultFlow::new(llm.clone(), prompts.clone())))
        .add_flow(Arc::new(OrderFlow::new(llm, prompts)))
        .add_flow(Arc::new(PaymentFlow))
        .with_keyword(texts::OPTIONS_KEYWORD, OPTIONS_FLOW)
        .with_welcome(vec![texts::GREETING.to_string()], OPTIONS_FLOW)
        .with_apology(texts::APOLOGY)
}
