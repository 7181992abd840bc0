//! # reservations
//!
//! Table reservation core: the static slot schedule, the availability ledger
//! (occupancy per date and slot, table assignment), the append-only reservation
//! logs, and the [`ReservationService`] facade the dialogues talk to.
//!
//! Confirmed reservations are immutable: they are appended to two flat text
//! logs and never updated or deleted. The in-memory occupancy index is rebuilt
//! from the availability log at startup and updated incrementally on each
//! confirmation.

pub mod dates;
pub mod error;
pub mod ledger;
pub mod models;
pub mod schedule;
pub mod service;
pub mod store;

pub use dates::parse_spanish_date;
pub use error::{ReservationError, Result};
pub use ledger::AvailabilityLedger;
pub use models::{
    CalendarDay, ReservationDraft, ReservationRecord, SlotAvailability, TableAssignment, TimeRange,
};
pub use schedule::Schedule;
pub use service::ReservationService;
pub use store::ReservationStore;
