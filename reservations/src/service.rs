//! Async facade over the store and the ledger, shared by all conversations.
//!
//! The write lock serializes confirmations, so two chats can never interleave
//! log appends or index updates; reads (availability, assignment) take the
//! read lock.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveTime};
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ReservationError, Result};
use crate::ledger::AvailabilityLedger;
use crate::models::{
    CalendarDay, ReservationDraft, ReservationRecord, SlotAvailability, TableAssignment,
};
use crate::schedule::Schedule;
use crate::store::ReservationStore;

#[derive(Clone)]
pub struct ReservationService {
    schedule: Schedule,
    ledger: Arc<RwLock<AvailabilityLedger>>,
    store: Arc<ReservationStore>,
}

impl ReservationService {
    /// Opens the store (creating the directory if absent) and rebuilds the
    /// occupancy index from the availability log.
    pub fn open(dir: impl Into<std::path::PathBuf>, schedule: Schedule) -> Result<Self> {
        let store = ReservationStore::open(dir)?;
        let mut ledger = AvailabilityLedger::new(schedule.clone());
        let applied = ledger.replay(store.load_availability_lines()?);
        info!(applied, "Availability ledger ready");
        Ok(Self {
            schedule,
            ledger: Arc::new(RwLock::new(ledger)),
            store: Arc::new(store),
        })
    }

    /// The static schedule (slots, opening hours, exclusion policy).
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub async fn availability(
        &self,
        date: CalendarDay,
        now: DateTime<Local>,
    ) -> Vec<SlotAvailability> {
        self.ledger.read().await.availability(date, now)
    }

    pub async fn assign_table(&self, date: CalendarDay, start: NaiveTime) -> TableAssignment {
        self.ledger.read().await.assign_table(date, start)
    }

    /// Confirms the draft: appends to both logs and bumps the occupancy index.
    ///
    /// The tentative table was assigned earlier in the dialogue; if another
    /// conversation confirmed it in between, nothing is written and
    /// [`ReservationError::TableTaken`] asks the guest for another time.
    #[instrument(skip(self, draft), fields(date = %draft.date, table = draft.table))]
    pub async fn confirm(&self, draft: ReservationDraft) -> Result<ReservationRecord> {
        let mut ledger = self.ledger.write().await;
        if ledger.is_table_taken(draft.date, draft.range.start, draft.table) {
            return Err(ReservationError::TableTaken { table: draft.table });
        }
        let record = draft.into_record(Uuid::new_v4(), Local::now());
        self.store.append(&record)?;
        ledger.record(&record);
        Ok(record)
    }
}
