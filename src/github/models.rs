// ABOUTME: Request and response shapes for the deployments and contents APIs.
// ABOUTME: Field names follow the REST wire format.

use serde::{Deserialize, Serialize};

use crate::types::{BlobSha, DeploymentId, DeploymentState};

/// Body of `POST /repos/{owner}/{repo}/deployments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDeployment {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub environment: String,
    /// JSON text `{"service":..,"version":..}`, sent as a string.
    pub payload: String,
    pub auto_merge: bool,
    pub required_contexts: Vec<String>,
    pub description: String,
    pub transient_environment: bool,
    pub production_environment: bool,
}

/// Result of a successful deployment creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentCreated {
    /// HTTP 201: the deployment exists and has an identifier.
    Created(DeploymentId),
    /// Any other success code, e.g. 202 when the ref was queued for auto-merge.
    Deferred {
        status: u16,
        message: Option<String>,
    },
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDeploymentStatus {
    pub state: DeploymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
    pub description: String,
    pub auto_inactive: bool,
}

/// Current revision of a path in the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRevision {
    /// The file exists at this version.
    Found(BlobSha),
    /// Nothing stored at the path yet.
    NotFound,
}

impl FileRevision {
    pub fn token(&self) -> Option<&BlobSha> {
        match self {
            FileRevision::Found(sha) => Some(sha),
            FileRevision::NotFound => None,
        }
    }
}

/// A create-or-update request for one file.
#[derive(Debug, Clone, PartialEq)]
pub struct PutFile {
    pub path: String,
    pub branch: String,
    pub message: String,
    pub content: Vec<u8>,
    /// Version the caller last read; `None` creates the file.
    pub sha: Option<BlobSha>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeploymentResponse {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentResponse {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PutContentBody<'a> {
    pub message: &'a str,
    pub content: String,
    pub branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}
