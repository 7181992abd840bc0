//! Spanish calendar-date parsing ("26 de agosto") and month names.

use crate::models::CalendarDay;

/// Month names as guests type them. No diacritics occur in Spanish month names.
pub const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Name for a 1-based month number.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// 1-based month number for a (case-insensitive) Spanish month name.
pub fn month_number(name: &str) -> Option<u8> {
    let name = name.trim().to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u8 + 1)
}

/// Parses `<day> de <month-name>`, e.g. "26 de agosto". Case-insensitive,
/// tolerant of surrounding whitespace. Returns `None` on anything else.
pub fn parse_spanish_date(input: &str) -> Option<CalendarDay> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 3 || !tokens[1].eq_ignore_ascii_case("de") {
        return None;
    }
    let day: u8 = tokens[0].parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    let month = month_number(tokens[2])?;
    Some(CalendarDay { day, month })
}
