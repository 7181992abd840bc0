//! Reservation dialogue: date, details, confirmation.
//!
//! Three captured messages walk the guest from a date to a confirmed table.
//! Every validation failure re-prompts the same step and leaves the state
//! untouched; confirm and cancel both return the step to `Idle`.

use std::sync::Arc;

use async_trait::async_trait;
use cazuela_core::{normalize, Chat, Message, Result};
use chrono::{DateTime, Datelike, Local, NaiveTime};
use flow_engine::{Flow, Transition};
use reservations::{
    parse_spanish_date, CalendarDay, ReservationDraft, ReservationError, ReservationService,
    SlotAvailability, TableAssignment, TimeRange,
};
use tracing::error;

use crate::session::{ReservationStep, SessionData};
use crate::{texts, RESERVATION_FLOW};

type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

pub struct ReservationFlow {
    service: ReservationService,
    clock: Clock,
}

impl ReservationFlow {
    pub fn new(service: ReservationService) -> Self {
        Self {
            service,
            clock: Arc::new(Local::now),
        }
    }

    /// Replaces the wall clock (tests pin "today").
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    async fn handle_date(&self, content: &str, state: &mut SessionData) -> Transition {
        let Some(date) = parse_spanish_date(content) else {
            state.reservation = ReservationStep::AwaitingDate;
            return Transition::Stay(vec![texts::INVALID_DATE.to_string()]);
        };

        let now = (self.clock)();
        // Day-of-month comparison only, as the booking language carries no year.
        if u32::from(date.day) < now.day() {
            state.reservation = ReservationStep::AwaitingDate;
            return Transition::Stay(vec![texts::PAST_DATE.to_string()]);
        }

        let slots = self.service.availability(date, now).await;
        if slots.is_empty() {
            state.reservation = ReservationStep::AwaitingDate;
            return Transition::Stay(vec![texts::NO_SLOTS.to_string()]);
        }

        state.reservation = ReservationStep::AwaitingDetails { date };
        Transition::Stay(vec![
            availability_report(date, &slots),
            texts::ASK_DETAILS.to_string(),
        ])
    }

    async fn handle_details(
        &self,
        content: &str,
        date: CalendarDay,
        state: &mut SessionData,
    ) -> Transition {
        let retry = |state: &mut SessionData, text: &str| {
            state.reservation = ReservationStep::AwaitingDetails { date };
            Transition::Stay(vec![text.to_string()])
        };

        let parts: Vec<&str> = content.split(',').map(str::trim).collect();
        if parts.len() < 3 || parts.iter().take(3).any(|p| p.is_empty()) {
            return retry(state, texts::INVALID_DETAILS);
        }
        let name = parts[0].to_string();
        let Some(party_size) = parse_party_size(parts[1]) else {
            return retry(state, texts::INVALID_DETAILS);
        };
        let Some(start) = parse_time(parts[2]) else {
            return retry(state, texts::INVALID_TIME);
        };

        let schedule = self.service.schedule();
        if !schedule.within_opening_hours(start) {
            return retry(state, texts::OUTSIDE_HOURS);
        }
        let now = (self.clock)();
        let is_today =
            u32::from(date.day) == now.day() && u32::from(date.month) == now.month();
        if is_today && start <= now.time() {
            return retry(state, texts::PAST_TIME);
        }
        let range = TimeRange::hour_from(start);
        if schedule.is_excluded(&range) {
            return retry(state, texts::EXCLUDED_RANGE);
        }

        let table = match self.service.assign_table(date, start).await {
            TableAssignment::Table(table) => table,
            TableAssignment::NoneAvailable => return retry(state, texts::NO_TABLE),
        };

        let draft = ReservationDraft {
            name,
            party_size,
            date,
            range,
            table,
        };
        let summary = draft_summary(&draft);
        state.reservation = ReservationStep::AwaitingConfirmation { draft };
        Transition::Stay(vec![summary, texts::CONFIRM_PROMPT.to_string()])
    }

    async fn handle_confirmation(
        &self,
        content: &str,
        draft: ReservationDraft,
        state: &mut SessionData,
    ) -> Transition {
        match normalize(content).as_str() {
            "si" => match self.service.confirm(draft.clone()).await {
                Ok(record) => {
                    state.reservation = ReservationStep::Idle;
                    Transition::End(vec![format!(
                        "¡Reserva confirmada! Te esperamos el {} de {} a {}. Mesa asignada: {}.",
                        record.date,
                        record.range.start.format("%H:%M"),
                        record.range.end.format("%H:%M"),
                        record.table
                    )])
                }
                Err(ReservationError::TableTaken { .. }) => {
                    state.reservation = ReservationStep::AwaitingDetails { date: draft.date };
                    Transition::Stay(vec![
                        texts::TABLE_TAKEN.to_string(),
                        texts::ASK_DETAILS.to_string(),
                    ])
                }
                Err(e) => {
                    error!(error = %e, "Failed to save reservation");
                    state.reservation = ReservationStep::AwaitingConfirmation { draft };
                    Transition::Stay(vec![texts::SAVE_FAILED.to_string()])
                }
            },
            "no" => {
                state.reservation = ReservationStep::Idle;
                Transition::End(vec![texts::RESERVATION_CANCELLED.to_string()])
            }
            _ => {
                state.reservation = ReservationStep::AwaitingConfirmation { draft };
                Transition::Stay(vec![texts::INVALID_YES_NO.to_string()])
            }
        }
    }
}

#[async_trait]
impl Flow<SessionData> for ReservationFlow {
    fn name(&self) -> &'static str {
        RESERVATION_FLOW
    }

    async fn enter(&self, _chat: &Chat, state: &mut SessionData) -> Result<Vec<String>> {
        state.reservation = ReservationStep::AwaitingDate;
        Ok(vec![texts::ASK_DATE.to_string()])
    }

    async fn handle(&self, message: &Message, state: &mut SessionData) -> Result<Transition> {
        let step = std::mem::take(&mut state.reservation);
        let transition = match step {
            // A reservation handle without an entered step restarts at the date.
            ReservationStep::Idle | ReservationStep::AwaitingDate => {
                self.handle_date(&message.content, state).await
            }
            ReservationStep::AwaitingDetails { date } => {
                self.handle_details(&message.content, date, state).await
            }
            ReservationStep::AwaitingConfirmation { draft } => {
                self.handle_confirmation(&message.content, draft, state).await
            }
        };
        Ok(transition)
    }
}

/// "4 personas" or "4".
fn parse_party_size(input: &str) -> Option<u32> {
    let count: u32 = input.split_whitespace().next()?.parse().ok()?;
    (count > 0).then_some(count)
}

/// 24-hour "HH:MM".
fn parse_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M").ok()
}

fn availability_report(date: CalendarDay, slots: &[SlotAvailability]) -> String {
    let mut out = format!("Disponibilidad para el {}:\n", date);
    for slot in slots {
        out.push_str(&format!(
            "- {} a {}: {} mesas libres\n",
            slot.range.start.format("%H:%M"),
            slot.range.end.format("%H:%M"),
            slot.remaining
        ));
    }
    out
}

fn draft_summary(draft: &ReservationDraft) -> String {
    format!(
        "Resumen de tu reserva:\n\
         Nombre: {}\n\
         Personas: {}\n\
         Fecha: {}\n\
         Horario: {}\n\
         Mesa: {}",
        draft.name, draft.party_size, draft.date, draft.range, draft.table
    )
}
