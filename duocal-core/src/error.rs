//! Error types for duocal.

use thiserror::Error;

/// Why a session mutation was refused.
///
/// A rejected call leaves the session exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Invite code must not be blank")]
    BlankInviteCode,

    #[error("Event title must not be blank")]
    BlankTitle,

    #[error("Event needs at least one participant")]
    NoParticipants,

    #[error("Event ends before it starts")]
    EndBeforeStart,

    #[error("Event time can't be placed on the calendar")]
    InvalidTime,

    #[error("An event with id '{0}' already exists")]
    DuplicateEventId(String),
}

/// Errors that can occur outside of the calendar model itself.
#[derive(Error, Debug)]
pub enum DuocalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for duocal operations.
pub type DuocalResult<T> = Result<T, DuocalError>;
