use thiserror::Error;

use crate::level::Level;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("form control not found: {id}")]
    MissingControl { id: String },
    #[error("duplicate {level} value: {value}")]
    DuplicateValue { level: Level, value: String },
    #[error("expected a {expected} pool, got a {found} pool")]
    LevelMismatch { expected: Level, found: Level },
    #[error("unknown {level} value: {value}")]
    UnknownValue { level: Level, value: String },
    #[error("{level} value is not among the visible options: {value}")]
    NotVisible { level: Level, value: String },
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, LocationError>;
