// ABOUTME: Error types for deployment reporting.
// ABOUTME: Both variants are fatal for the invocation.

use crate::github::ApiError;
use crate::types::DeploymentId;

/// Errors from the two platform calls of the reporter.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Deployment creation failed.
    #[error("failed to create deployment: {0}")]
    CreateDeployment(#[source] ApiError),

    /// Status creation failed. The deployment itself already exists.
    #[error("failed to set status on deployment {deployment_id}: {source}")]
    CreateStatus {
        deployment_id: DeploymentId,
        #[source]
        source: ApiError,
    },
}

impl ReportError {
    /// The underlying API error.
    pub fn api_error(&self) -> &ApiError {
        match self {
            ReportError::CreateDeployment(source) => source,
            ReportError::CreateStatus { source, .. } => source,
        }
    }

    /// Deployment left behind by a failed status call.
    pub fn orphaned_deployment(&self) -> Option<&DeploymentId> {
        match self {
            ReportError::CreateDeployment(_) => None,
            ReportError::CreateStatus { deployment_id, .. } => Some(deployment_id),
        }
    }
}
