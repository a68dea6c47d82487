use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Person already exists: {0}")]
    DuplicatePerson(i32),

    #[error("Person not found: {0}")]
    PersonNotFound(i32),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
