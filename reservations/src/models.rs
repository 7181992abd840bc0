//! Reservation data model: calendar day, time range, draft, and confirmed record.

use chrono::{DateTime, Duration, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::dates;

/// Day-of-month plus month, the key the whole reservation language runs on
/// ("26 de agosto"). Carries no year, matching how guests phrase dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    /// 1..=31
    pub day: u8,
    /// 1..=12
    pub month: u8,
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = dates::month_name(self.month).unwrap_or("?");
        write!(f, "{} de {}", self.day, month)
    }
}

/// Half-open booking window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// The one-hour window starting at `start`; every booking lasts one hour.
    pub fn hour_from(start: NaiveTime) -> Self {
        Self {
            start,
            end: start + Duration::hours(1),
        }
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Remaining capacity of one slot on one day, as reported to the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAvailability {
    pub range: TimeRange,
    pub remaining: u32,
}

/// Result of asking for a table in a slot. All five taken yields
/// [`TableAssignment::NoneAvailable`], never a silent absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAssignment {
    Table(u8),
    NoneAvailable,
}

/// A fully-collected reservation awaiting the guest's confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub party_size: u32,
    pub date: CalendarDay,
    pub range: TimeRange,
    pub table: u8,
}

impl ReservationDraft {
    /// Seals the draft into an immutable record at confirmation time.
    pub fn into_record(self, id: Uuid, created_at: DateTime<Local>) -> ReservationRecord {
        ReservationRecord {
            id,
            created_at,
            name: self.name,
            party_size: self.party_size,
            date: self.date,
            range: self.range,
            table: self.table,
        }
    }
}

/// A confirmed reservation. Append-only: written once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: Uuid,
    pub created_at: DateTime<Local>,
    pub name: String,
    pub party_size: u32,
    pub date: CalendarDay,
    pub range: TimeRange,
    pub table: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_calendar_day_display() {
        let day = CalendarDay { day: 26, month: 8 };
        assert_eq!(day.to_string(), "26 de agosto");
    }

    #[test]
    fn test_hour_from_spans_one_hour() {
        let range = TimeRange::hour_from(t(10, 0));
        assert_eq!(range.end, t(11, 0));
        assert_eq!(range.to_string(), "10:00 - 11:00");
    }

    #[test]
    fn test_overlaps() {
        let a = TimeRange::new(t(9, 0), t(10, 0));
        assert!(a.overlaps(&TimeRange::new(t(9, 30), t(10, 30))));
        assert!(a.overlaps(&TimeRange::new(t(8, 30), t(9, 30))));
        assert!(!a.overlaps(&TimeRange::new(t(10, 0), t(11, 0))));
        assert!(!a.overlaps(&TimeRange::new(t(8, 0), t(9, 0))));
    }
}
