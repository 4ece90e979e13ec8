use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} is not in contacts")]
    NotFound(String),

    #[error("You have entered insufficient arguments")]
    InsufficientArguments,

    #[error("Unknown command. Please try again.")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AbookError {
    /// Errors the command loop cannot recover from by printing and moving on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AbookError::Io(_) | AbookError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
