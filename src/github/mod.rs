// ABOUTME: Hosting platform capabilities used by the reporter and the mirror.
// ABOUTME: Defines DeploymentApi and ContentStore, implemented by GitHubClient.

mod client;
mod error;
mod models;

pub use client::GitHubClient;
pub use error::ApiError;
pub use models::{
    CreateDeployment, CreateDeploymentStatus, DeploymentCreated, FileRevision, PutFile,
};

use crate::types::{DeploymentId, RepoSlug};
use async_trait::async_trait;

/// Deployment operations: create a deployment, attach a status to it.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Create a deployment. Non-201 success codes come back as
    /// `DeploymentCreated::Deferred`, not as errors.
    async fn create_deployment(
        &self,
        repo: &RepoSlug,
        request: &CreateDeployment,
    ) -> Result<DeploymentCreated, ApiError>;

    /// Attach a status to an existing deployment.
    async fn create_deployment_status(
        &self,
        repo: &RepoSlug,
        deployment: &DeploymentId,
        request: &CreateDeploymentStatus,
    ) -> Result<(), ApiError>;
}

/// Path-addressed file storage on a branch, with version tokens.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Look up the current version token of `path` on `branch`.
    ///
    /// A missing file is `Ok(FileRevision::NotFound)`; every other failure
    /// is an error.
    async fn read_revision(
        &self,
        repo: &RepoSlug,
        path: &str,
        branch: &str,
    ) -> Result<FileRevision, ApiError>;

    /// Create or update a file. When `request.sha` is set the store only
    /// accepts the write if it still matches, otherwise `ApiError::Conflict`.
    async fn write_file(&self, repo: &RepoSlug, request: &PutFile) -> Result<(), ApiError>;
}
