pub mod forms;
pub mod output;
pub mod views;
mod shell;

use thiserror::Error;

use crate::errors::BookingError;

pub use shell::run_cli;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BookingError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
