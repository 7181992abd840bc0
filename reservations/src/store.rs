//! Flat-file persistence for confirmed reservations.
//!
//! Two append-only logs live in the reservations directory: the reservation
//! log (one labeled block per reservation, write-only) and the availability
//! log (one line per reservation, read back at startup to rebuild the
//! occupancy index).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::models::ReservationRecord;

pub const RESERVATION_LOG: &str = "reservas.txt";
pub const AVAILABILITY_LOG: &str = "disponibilidad.txt";

pub struct ReservationStore {
    dir: PathBuf,
}

impl ReservationStore {
    /// Opens the store, creating the directory if absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Appends the record to both logs: one block to the reservation log,
    /// exactly one line to the availability log.
    pub fn append(&self, record: &ReservationRecord) -> Result<()> {
        self.append_to(RESERVATION_LOG, &reservation_block(record))?;
        self.append_to(AVAILABILITY_LOG, &format!("{}\n", availability_line(record)))?;
        info!(
            id = %record.id,
            date = %record.date,
            range = %record.range,
            table = record.table,
            "Saved reservation"
        );
        Ok(())
    }

    fn append_to(&self, file_name: &str, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(file_name))?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Reads the availability log for ledger replay. An absent log means no
    /// reservations yet.
    pub fn load_availability_lines(&self) -> Result<Vec<String>> {
        let path = self.dir.join(AVAILABILITY_LOG);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(|line| line.to_string()).collect())
    }
}

/// The availability-log line: `"<date> de <start> a <end> - Mesa <n>"`.
pub fn availability_line(record: &ReservationRecord) -> String {
    format!(
        "{} de {} a {} - Mesa {}",
        record.date,
        record.range.start.format("%H:%M"),
        record.range.end.format("%H:%M"),
        record.table
    )
}

fn reservation_block(record: &ReservationRecord) -> String {
    format!(
        "\n================================\n\
         ** Reserva de Mesa **\n\
         ================================\n\
         Número de reserva: {}\n\
         Fecha de creación: {}\n\
         Nombre: {}\n\
         Número de personas: {}\n\
         Fecha: {}\n\
         Horario: {}\n\
         Mesa: {}\n",
        record.id,
        record.created_at.format("%d/%m/%Y %H:%M:%S"),
        record.name,
        record.party_size,
        record.date,
        record.range,
        record.table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarDay, TimeRange};
    use chrono::{Local, NaiveTime};
    use uuid::Uuid;

    fn sample_record() -> ReservationRecord {
        ReservationRecord {
            id: Uuid::new_v4(),
            created_at: Local::now(),
            name: "Juan Pérez".to_string(),
            party_size: 4,
            date: CalendarDay { day: 26, month: 8 },
            range: TimeRange::hour_from(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            table: 1,
        }
    }

    #[test]
    fn test_availability_line_format() {
        let record = sample_record();
        assert_eq!(
            availability_line(&record),
            "26 de agosto de 10:00 a 11:00 - Mesa 1"
        );
    }

    #[test]
    fn test_append_writes_one_line_per_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReservationStore::open(dir.path().join("reservas")).unwrap();

        store.append(&sample_record()).unwrap();
        store.append(&sample_record()).unwrap();

        let lines = store.load_availability_lines().unwrap();
        assert_eq!(lines.len(), 2);

        let log = std::fs::read_to_string(store.dir().join(RESERVATION_LOG)).unwrap();
        assert_eq!(log.matches("** Reserva de Mesa **").count(), 2);
        assert!(log.contains("Nombre: Juan Pérez"));
        assert!(log.contains("Horario: 10:00 - 11:00"));
    }

    #[test]
    fn test_missing_availability_log_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReservationStore::open(dir.path().join("reservas")).unwrap();
        assert!(store.load_availability_lines().unwrap().is_empty());
    }
}
