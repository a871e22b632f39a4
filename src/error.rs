// ABOUTME: Application-wide error types for shipstat.
// ABOUTME: Every variant is fatal and ends the invocation with one message.

use crate::deploy::ReportError;
use crate::github::ApiError;
use crate::types::InvalidState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidState(#[from] InvalidState),

    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("missing repository context: {0} is not set")]
    MissingContext(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Action failed: {0}")]
    Report(#[from] ReportError),

    #[error("failed to create API client: {0}")]
    Client(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
