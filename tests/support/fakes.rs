// ABOUTME: In-memory DeploymentApi and ContentStore implementations.
// ABOUTME: Record every call so tests can assert on order and payloads.

use async_trait::async_trait;
use parking_lot::Mutex;
use shipstat::github::{
    ApiError, ContentStore, CreateDeployment, CreateDeploymentStatus, DeploymentApi,
    DeploymentCreated, FileRevision, PutFile,
};
use shipstat::types::{BlobSha, DeploymentId, RepoSlug};
use std::collections::HashMap;

/// How the fake answers deployment creation.
#[derive(Debug, Clone)]
pub enum CreateReply {
    Created(u64),
    Deferred(u16),
    Fail(u16),
}

#[derive(Debug)]
pub struct FakeDeploymentApi {
    reply: CreateReply,
    status_failure: Option<u16>,
    pub deployments: Mutex<Vec<(RepoSlug, CreateDeployment)>>,
    pub statuses: Mutex<Vec<(DeploymentId, CreateDeploymentStatus)>>,
}

impl FakeDeploymentApi {
    pub fn new(reply: CreateReply) -> Self {
        Self {
            reply,
            status_failure: None,
            deployments: Mutex::new(Vec::new()),
            statuses: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_status(mut self, status: u16) -> Self {
        self.status_failure = Some(status);
        self
    }
}

#[async_trait]
impl DeploymentApi for FakeDeploymentApi {
    async fn create_deployment(
        &self,
        repo: &RepoSlug,
        request: &CreateDeployment,
    ) -> Result<DeploymentCreated, ApiError> {
        self.deployments
            .lock()
            .push((repo.clone(), request.clone()));
        match self.reply {
            CreateReply::Created(id) => Ok(DeploymentCreated::Created(DeploymentId::new(id))),
            CreateReply::Deferred(status) => Ok(DeploymentCreated::Deferred {
                status,
                message: Some("Auto-merged main into topic on deployment.".to_string()),
            }),
            CreateReply::Fail(status) => Err(ApiError::Status {
                status,
                message: "Resource not accessible by integration".to_string(),
            }),
        }
    }

    async fn create_deployment_status(
        &self,
        _repo: &RepoSlug,
        deployment: &DeploymentId,
        request: &CreateDeploymentStatus,
    ) -> Result<(), ApiError> {
        self.statuses
            .lock()
            .push((deployment.clone(), request.clone()));
        match self.status_failure {
            Some(status) => Err(ApiError::Status {
                status,
                message: "Server Error".to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// A single-branch file store with sha version tokens.
#[derive(Debug, Default)]
pub struct FakeContentStore {
    files: Mutex<HashMap<String, (BlobSha, Vec<u8>)>>,
    /// Swap the stored sha after the next read, simulating a concurrent writer.
    race_after_read: Mutex<bool>,
    pub reads: Mutex<usize>,
    pub writes: Mutex<Vec<PutFile>>,
}

impl FakeContentStore {
    pub fn with_file(path: &str, sha: &str, content: &[u8]) -> Self {
        let store = Self::default();
        store
            .files
            .lock()
            .insert(path.to_string(), (BlobSha::new(sha), content.to_vec()));
        store
    }

    pub fn racing(self) -> Self {
        *self.race_after_read.lock() = true;
        self
    }

    pub fn calls(&self) -> usize {
        *self.reads.lock() + self.writes.lock().len()
    }

    pub fn content(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().get(path).map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl ContentStore for FakeContentStore {
    async fn read_revision(
        &self,
        _repo: &RepoSlug,
        path: &str,
        _branch: &str,
    ) -> Result<FileRevision, ApiError> {
        *self.reads.lock() += 1;
        let mut files = self.files.lock();
        let revision = match files.get(path) {
            Some((sha, _)) => FileRevision::Found(sha.clone()),
            None => FileRevision::NotFound,
        };
        if std::mem::take(&mut *self.race_after_read.lock()) {
            files.insert(
                path.to_string(),
                (BlobSha::new("concurrent"), b"{}".to_vec()),
            );
        }
        Ok(revision)
    }

    async fn write_file(&self, _repo: &RepoSlug, request: &PutFile) -> Result<(), ApiError> {
        self.writes.lock().push(request.clone());
        let mut files = self.files.lock();
        let current = files.get(&request.path).map(|(sha, _)| sha.clone());
        if current != request.sha {
            return Err(ApiError::Conflict(format!(
                "{} does not match {}",
                request.path,
                request.sha.as_ref().map(BlobSha::as_str).unwrap_or("nothing")
            )));
        }
        let next = BlobSha::new(format!("sha-{}", request.content.len()));
        files.insert(request.path.clone(), (next, request.content.clone()));
        Ok(())
    }
}
