// ABOUTME: Closed set of deployment states accepted by the hosting platform.
// ABOUTME: Validation happens here, before any network call is made.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A deployment status state.
///
/// Wire names are snake_case and match exactly what the deployment status
/// API and the dashboard status file use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Error,
    Failure,
    Inactive,
    InProgress,
    Queued,
    Pending,
    #[default]
    Success,
}

/// Rejected status value, carrying the full legal set for the error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid status \"{value}\". Must be one of: {legal}", legal = legal_states())]
pub struct InvalidState {
    pub value: String,
}

impl InvalidState {
    /// The states the rejected value could have been.
    pub fn legal(&self) -> &'static [DeploymentState] {
        &DeploymentState::ALL
    }
}

fn legal_states() -> String {
    DeploymentState::ALL
        .iter()
        .map(DeploymentState::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DeploymentState {
    /// Every legal state, in the order they are reported to users.
    pub const ALL: [DeploymentState; 7] = [
        DeploymentState::Error,
        DeploymentState::Failure,
        DeploymentState::Inactive,
        DeploymentState::InProgress,
        DeploymentState::Queued,
        DeploymentState::Pending,
        DeploymentState::Success,
    ];

    /// Parse a caller-supplied status. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Result<Self, InvalidState> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| InvalidState {
                value: value.to_string(),
            })
    }

    /// Validate an optional status input; absent or empty means `success`.
    pub fn validate(candidate: Option<&str>) -> Result<Self, InvalidState> {
        match candidate.filter(|value| !value.is_empty()) {
            Some(value) => Self::parse(value),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::Error => "error",
            DeploymentState::Failure => "failure",
            DeploymentState::Inactive => "inactive",
            DeploymentState::InProgress => "in_progress",
            DeploymentState::Queued => "queued",
            DeploymentState::Pending => "pending",
            DeploymentState::Success => "success",
        }
    }
}

impl FromStr for DeploymentState {
    type Err = InvalidState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
