use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for booking validation and ledger storage failures.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Customer name cannot be empty")]
    EmptyName,
    #[error("Invalid time `{0}`: use hh:mm AM/PM (e.g., 02:30 PM)")]
    InvalidTimeFormat(String),
    #[error("End time must be after start time")]
    NonPositiveDuration,
    #[error("Unknown table: {0}")]
    UnknownResource(String),
    #[error("Ledger read error: {0}")]
    LedgerRead(String),
    #[error("Ledger write error: {0}")]
    LedgerWrite(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BookingError>;

impl BookingError {
    /// True for user-correctable input problems, false for environment problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookingError::EmptyName
                | BookingError::InvalidTimeFormat(_)
                | BookingError::NonPositiveDuration
                | BookingError::UnknownResource(_)
        )
    }
}
