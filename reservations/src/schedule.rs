//! The static daily schedule: seven hourly slots with fixed table capacity,
//! plus the configurable list of excluded booking windows between them.

use chrono::NaiveTime;

use crate::models::TimeRange;

/// Tables available in every slot.
pub const TABLES_PER_SLOT: u32 = 5;
/// Table numbers run 1..=5.
pub const FIRST_TABLE: u8 = 1;
pub const LAST_TABLE: u8 = 5;

const SLOT_START_HOURS: [u32; 7] = [8, 10, 12, 14, 16, 18, 20];
const EXCLUDED_START_HOURS: [u32; 6] = [9, 11, 13, 15, 17, 19];

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).expect("hour within 0..24")
}

fn hour_range(h: u32) -> TimeRange {
    TimeRange::new(hour(h), hour(h + 1))
}

/// Bookable slots plus the exclusion policy. The exclusion list is
/// configuration: the default blocks the six hour-wide windows that sit
/// between the seven slots, but deployments may override it.
#[derive(Debug, Clone)]
pub struct Schedule {
    slots: Vec<TimeRange>,
    excluded: Vec<TimeRange>,
    capacity: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            slots: SLOT_START_HOURS.iter().map(|h| hour_range(*h)).collect(),
            excluded: EXCLUDED_START_HOURS.iter().map(|h| hour_range(*h)).collect(),
            capacity: TABLES_PER_SLOT,
        }
    }
}

impl Schedule {
    /// A schedule with a custom exclusion policy.
    pub fn with_excluded(excluded: Vec<TimeRange>) -> Self {
        Self {
            excluded,
            ..Self::default()
        }
    }

    pub fn slots(&self) -> &[TimeRange] {
        &self.slots
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// First bookable minute of the day (08:00).
    pub fn opening(&self) -> NaiveTime {
        self.slots.first().map(|s| s.start).unwrap_or_else(|| hour(8))
    }

    /// End of the last slot (21:00). Start times must lie strictly before it.
    pub fn closing(&self) -> NaiveTime {
        self.slots.last().map(|s| s.end).unwrap_or_else(|| hour(21))
    }

    pub fn within_opening_hours(&self, start: NaiveTime) -> bool {
        start >= self.opening() && start < self.closing()
    }

    /// True when the booking window overlaps any excluded range.
    pub fn is_excluded(&self, range: &TimeRange) -> bool {
        self.excluded.iter().any(|ex| ex.overlaps(range))
    }

    /// The slot containing the given start time, if any.
    pub fn slot_for(&self, start: NaiveTime) -> Option<&TimeRange> {
        self.slots
            .iter()
            .find(|slot| slot.start <= start && start < slot.end)
    }
}
