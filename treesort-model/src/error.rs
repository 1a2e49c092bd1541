use std::fmt::{self, Display};

/// Errors produced by model constructors and string conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidEntry(String),
    UnknownOrder(String),
    UnknownHostOrder(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidEntry(msg) => write!(f, "invalid entry: {msg}"),
            ModelError::UnknownOrder(name) => {
                write!(f, "unknown sort order: {name}")
            }
            ModelError::UnknownHostOrder(name) => {
                write!(f, "unknown host sort order: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
