// ABOUTME: Dashboard mirror error types with SNAFU pattern.
// ABOUTME: Never leaves the mirror; converted into warnings at its boundary.

use snafu::Snafu;

use crate::diagnostics::Warning;
use crate::github::ApiError;
use crate::types::RepoSlugError;

/// Failure of a single mirror attempt.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MirrorError {
    #[snafu(display("invalid dashboard repository {value:?}: {source}"))]
    InvalidStore { value: String, source: RepoSlugError },

    #[snafu(display("failed to create dashboard client: {source}"))]
    Client { source: ApiError },

    #[snafu(display("invalid {field} for status path: {value:?}"))]
    InvalidPath { field: &'static str, value: String },

    #[snafu(display("failed to encode status record: {source}"))]
    Encode { source: serde_json::Error },

    #[snafu(display("failed to read {path}: {source}"))]
    Read { path: String, source: ApiError },

    #[snafu(display("{path} was updated concurrently: {source}"))]
    Conflict { path: String, source: ApiError },

    #[snafu(display("failed to write {path}: {source}"))]
    Write { path: String, source: ApiError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorErrorKind {
    /// The dashboard repository is not a valid `owner/name`.
    InvalidStore,
    /// The client for the dashboard repository could not be built.
    Client,
    /// The (service, environment) pair does not map to a single file.
    InvalidPath,
    /// The record could not be serialized.
    Encode,
    /// Reading the current version token failed.
    Read,
    /// The write was rejected because the version token was stale.
    Conflict,
    /// The write failed for any other reason.
    Write,
}

impl MirrorError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> MirrorErrorKind {
        match self {
            MirrorError::InvalidStore { .. } => MirrorErrorKind::InvalidStore,
            MirrorError::Client { .. } => MirrorErrorKind::Client,
            MirrorError::InvalidPath { .. } => MirrorErrorKind::InvalidPath,
            MirrorError::Encode { .. } => MirrorErrorKind::Encode,
            MirrorError::Read { .. } => MirrorErrorKind::Read,
            MirrorError::Conflict { .. } => MirrorErrorKind::Conflict,
            MirrorError::Write { .. } => MirrorErrorKind::Write,
        }
    }

    /// Downgrade to the warning shown to users.
    pub fn to_warning(&self) -> Warning {
        let message = format!("Failed to update dashboard status: {}", self);
        match self.kind() {
            MirrorErrorKind::InvalidStore | MirrorErrorKind::Client => {
                Warning::mirror_setup(message)
            }
            MirrorErrorKind::Read => Warning::mirror_read(message),
            MirrorErrorKind::Conflict => Warning::mirror_conflict(message),
            MirrorErrorKind::InvalidPath | MirrorErrorKind::Encode | MirrorErrorKind::Write => {
                Warning::mirror_write(message)
            }
        }
    }
}

/// Sort a failed write into conflict or generic write failure.
pub(crate) fn write_error(path: &str, source: ApiError) -> MirrorError {
    if source.is_conflict() {
        MirrorError::Conflict {
            path: path.to_string(),
            source,
        }
    } else {
        MirrorError::Write {
            path: path.to_string(),
            source,
        }
    }
}
