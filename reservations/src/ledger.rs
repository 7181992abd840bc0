//! Availability ledger: occupancy per (day, slot) and lowest-free table
//! assignment, derived from confirmed reservations.
//!
//! The index is keyed by structured `(CalendarDay, slot start)` pairs. It is
//! rebuilt once from the availability log at startup and then updated
//! incrementally on every confirmation; no per-query log rescans.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Datelike, Local, NaiveTime, Timelike};
use tracing::{debug, warn};

use crate::models::{CalendarDay, ReservationRecord, SlotAvailability, TableAssignment};
use crate::schedule::{Schedule, FIRST_TABLE, LAST_TABLE};

pub struct AvailabilityLedger {
    schedule: Schedule,
    /// Tables taken per day and slot start. Occupancy is the set size.
    taken: HashMap<(CalendarDay, NaiveTime), BTreeSet<u8>>,
}

impl AvailabilityLedger {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            taken: HashMap::new(),
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Rebuilds the index from availability-log lines. Returns the number of
    /// lines applied; malformed lines are skipped with a warning.
    pub fn replay<I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut applied = 0;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match parse_availability_line(&line) {
                Some((date, start, table)) => {
                    if self.occupy(date, start, table) {
                        applied += 1;
                    }
                }
                None => warn!(line = %line, "Skipping malformed availability line"),
            }
        }
        applied
    }

    /// Applies one confirmed reservation to the index.
    pub fn record(&mut self, record: &ReservationRecord) {
        self.occupy(record.date, record.range.start, record.table);
    }

    fn occupy(&mut self, date: CalendarDay, start: NaiveTime, table: u8) -> bool {
        let slot = match self.schedule.slot_for(start) {
            Some(slot) => *slot,
            None => {
                warn!(%date, start = %start.format("%H:%M"), "Start time outside any slot; ignored");
                return false;
            }
        };
        let inserted = self.taken.entry((date, slot.start)).or_default().insert(table);
        if !inserted {
            warn!(%date, table, "Table already occupied for that slot; duplicate ignored");
        }
        debug!(%date, slot = %slot, table, "Slot occupancy updated");
        inserted
    }

    pub fn occupancy(&self, date: CalendarDay, slot_start: NaiveTime) -> u32 {
        self.taken
            .get(&(date, slot_start))
            .map(|tables| tables.len() as u32)
            .unwrap_or(0)
    }

    /// Remaining capacity per slot for the given day.
    ///
    /// Slots with nothing left are dropped (never reported as zero or
    /// negative); when the day is today, slots whose start hour is not
    /// strictly after the current hour are dropped as well.
    pub fn availability(&self, date: CalendarDay, now: DateTime<Local>) -> Vec<SlotAvailability> {
        let is_today =
            u32::from(date.day) == now.day() && u32::from(date.month) == now.month();
        self.schedule
            .slots()
            .iter()
            .filter(|slot| !is_today || slot.start.hour() > now.hour())
            .filter_map(|slot| {
                let remaining = self
                    .schedule
                    .capacity()
                    .saturating_sub(self.occupancy(date, slot.start));
                (remaining > 0).then_some(SlotAvailability {
                    range: *slot,
                    remaining,
                })
            })
            .collect()
    }

    /// Lowest-numbered free table for the slot containing `start`, or
    /// [`TableAssignment::NoneAvailable`] when all are taken (or the start
    /// time lies in no slot).
    pub fn assign_table(&self, date: CalendarDay, start: NaiveTime) -> TableAssignment {
        let slot = match self.schedule.slot_for(start) {
            Some(slot) => slot,
            None => return TableAssignment::NoneAvailable,
        };
        let empty = BTreeSet::new();
        let taken = self.taken.get(&(date, slot.start)).unwrap_or(&empty);
        (FIRST_TABLE..=LAST_TABLE)
            .find(|table| !taken.contains(table))
            .map(TableAssignment::Table)
            .unwrap_or(TableAssignment::NoneAvailable)
    }

    /// True when the table is already occupied for the slot containing `start`.
    pub fn is_table_taken(&self, date: CalendarDay, start: NaiveTime, table: u8) -> bool {
        let Some(slot) = self.schedule.slot_for(start) else {
            return false;
        };
        self.taken
            .get(&(date, slot.start))
            .map(|tables| tables.contains(&table))
            .unwrap_or(false)
    }
}

/// Parses one availability-log line:
/// `"<day> de <month> de <start> a <end> - Mesa <n>"`.
fn parse_availability_line(line: &str) -> Option<(CalendarDay, NaiveTime, u8)> {
    let (front, table_part) = line.rsplit_once(" - Mesa ")?;
    let table: u8 = table_part.trim().parse().ok()?;
    let tokens: Vec<&str> = front.split_whitespace().collect();
    if tokens.len() != 7 || tokens[1] != "de" || tokens[3] != "de" || tokens[5] != "a" {
        return None;
    }
    let day: u8 = tokens[0].parse().ok()?;
    let month = crate::dates::month_number(tokens[2])?;
    let start = NaiveTime::parse_from_str(tokens[4], "%H:%M").ok()?;
    NaiveTime::parse_from_str(tokens[6], "%H:%M").ok()?;
    Some((CalendarDay { day, month }, start, table))
}
