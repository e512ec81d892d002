use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandzError {
    /// A single field failed validation or parsing.
    #[error("{0}")]
    Value(String),

    /// A command was invoked with the wrong arguments.
    #[error("{0}")]
    Usage(String),

    #[error("recursive script execution is not supported: {}", .0.display())]
    ScriptCycle(PathBuf),

    #[error("unexpected end of input")]
    InputExhausted,

    #[error("{0}")]
    Database(String),

    #[error("id is already assigned: {0}")]
    IdAlreadyAssigned(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BandzError {
    pub fn value(msg: impl Into<String>) -> Self {
        BandzError::Value(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        BandzError::Usage(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        BandzError::Database(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BandzError>;
