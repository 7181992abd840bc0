//! Integration tests for [`reservations::ReservationService`].
//!
//! Covers: confirmation appending exactly one line to each log, index updates
//! visible to later queries, persistence across reopen, and the table-taken
//! guard.

use chrono::{Local, NaiveTime, TimeZone};
use reservations::{
    store, CalendarDay, ReservationDraft, ReservationError, ReservationService, Schedule,
    TableAssignment, TimeRange,
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

const AUG_26: CalendarDay = CalendarDay { day: 26, month: 8 };

fn draft(table: u8) -> ReservationDraft {
    ReservationDraft {
        name: "Juan Pérez".to_string(),
        party_size: 4,
        date: AUG_26,
        range: TimeRange::hour_from(t(10, 0)),
        table,
    }
}

/// **Test: confirming appends exactly one line to each of the two logs and the
/// slot's reported capacity drops by exactly 1.**
#[tokio::test]
async fn test_confirm_appends_and_updates_index() {
    let dir = tempfile::tempdir().unwrap();
    let service = ReservationService::open(dir.path().join("reservas"), Schedule::default()).unwrap();

    let record = service.confirm(draft(1)).await.unwrap();
    assert_eq!(record.table, 1);

    let base = dir.path().join("reservas");
    let availability = std::fs::read_to_string(base.join(store::AVAILABILITY_LOG)).unwrap();
    assert_eq!(availability.lines().count(), 1);
    assert_eq!(
        availability.lines().next().unwrap(),
        "26 de agosto de 10:00 a 11:00 - Mesa 1"
    );

    let log = std::fs::read_to_string(base.join(store::RESERVATION_LOG)).unwrap();
    assert_eq!(log.matches("** Reserva de Mesa **").count(), 1);

    let now = Local.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap();
    let slots = service.availability(AUG_26, now).await;
    let ten = slots.iter().find(|s| s.range.start == t(10, 0)).unwrap();
    assert_eq!(ten.remaining, 4);
}

/// **Test: a freshly-opened service replays the availability log written by a
/// previous instance.**
#[tokio::test]
async fn test_reopen_replays_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reservas");

    {
        let service = ReservationService::open(&path, Schedule::default()).unwrap();
        service.confirm(draft(1)).await.unwrap();
        service.confirm(draft(2)).await.unwrap();
    }

    let service = ReservationService::open(&path, Schedule::default()).unwrap();
    assert_eq!(
        service.assign_table(AUG_26, t(10, 0)).await,
        TableAssignment::Table(3)
    );
}

/// **Test: confirming a table another conversation already took fails with
/// TableTaken and writes nothing.**
#[tokio::test]
async fn test_confirm_rejects_taken_table() {
    let dir = tempfile::tempdir().unwrap();
    let service = ReservationService::open(dir.path().join("reservas"), Schedule::default()).unwrap();

    service.confirm(draft(1)).await.unwrap();
    let err = service.confirm(draft(1)).await.unwrap_err();
    assert!(matches!(err, ReservationError::TableTaken { table: 1 }));

    let availability = std::fs::read_to_string(
        dir.path().join("reservas").join(store::AVAILABILITY_LOG),
    )
    .unwrap();
    assert_eq!(availability.lines().count(), 1);
}

/// **Test: five confirmations fill the slot; the next assignment signals no
/// availability.**
#[tokio::test]
async fn test_slot_fills_after_five_confirmations() {
    let dir = tempfile::tempdir().unwrap();
    let service = ReservationService::open(dir.path().join("reservas"), Schedule::default()).unwrap();

    for table in 1..=5 {
        service.confirm(draft(table)).await.unwrap();
    }

    assert_eq!(
        service.assign_table(AUG_26, t(10, 0)).await,
        TableAssignment::NoneAvailable
    );

    let now = Local.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap();
    let slots = service.availability(AUG_26, now).await;
    assert!(slots.iter().all(|s| s.range.start != t(10, 0)));
}
