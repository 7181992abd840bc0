use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("No flow registered under name: {0}")]
    UnknownFlow(String),

    #[error("Invalid step state: {0}")]
    State(String),

    #[error("Language model error: {0}")]
    Llm(String),

    #[error("Reservation error: {0}")]
    Reservation(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
