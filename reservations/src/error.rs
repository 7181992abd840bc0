use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mesa {table} is no longer free for that slot")]
    TableTaken { table: u8 },
}

pub type Result<T> = std::result::Result<T, ReservationError>;
