// ABOUTME: Best-effort mirror of deployment status into a dashboard repository.
// ABOUTME: Read the version token, then write with it as an optimistic-lock precondition.

use chrono::Utc;
use snafu::ResultExt;

use crate::config::DashboardConfig;
use crate::deploy::{Deployment, Reported};
use crate::diagnostics::{Diagnostics, WarningKind};
use crate::github::{ContentStore, FileRevision, GitHubClient, PutFile};
use crate::types::RepoSlug;

use super::error::{
    ClientSnafu, EncodeSnafu, InvalidStoreSnafu, MirrorError, ReadSnafu, write_error,
};
use super::record::StatusRecord;

/// What a mirror attempt did. Failures are already recorded as warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// No dashboard store configured; the store was not contacted.
    Skipped,
    /// The status file was written.
    Written { path: String, created: bool },
    /// The attempt failed and was downgraded to a warning of this kind.
    Failed(WarningKind),
}

/// Writes status records to `status/<service>/<environment>.json` on one
/// branch of one repository.
#[derive(Debug)]
pub struct DashboardMirror<S> {
    store: S,
    repository: RepoSlug,
    branch: String,
}

impl DashboardMirror<GitHubClient> {
    /// Mirror backed by the GitHub contents API of the configured repository.
    pub fn connect(config: &DashboardConfig, api_url: &str) -> Result<Self, MirrorError> {
        let repository = RepoSlug::parse(&config.repository).context(InvalidStoreSnafu {
            value: config.repository.as_str(),
        })?;
        let store = GitHubClient::new(api_url, &config.token).context(ClientSnafu)?;
        Ok(Self::new(store, repository, config.branch.as_str()))
    }
}

impl<S: ContentStore> DashboardMirror<S> {
    pub fn new(store: S, repository: RepoSlug, branch: impl Into<String>) -> Self {
        Self {
            store,
            repository,
            branch: branch.into(),
        }
    }

    pub fn repository(&self) -> &RepoSlug {
        &self.repository
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mirror a reported deployment, timestamped now.
    ///
    /// Never fails: any error is logged, recorded in `diag`, and returned
    /// as `MirrorOutcome::Failed`.
    pub async fn publish(
        &self,
        deployment: &Deployment<Reported>,
        diag: &mut Diagnostics,
    ) -> MirrorOutcome {
        let record = deployment.status_record(Utc::now());

        match self.write_record(&record).await {
            Ok((path, created)) => {
                tracing::info!(
                    "Dashboard status {} {} on {}@{}",
                    if created { "created" } else { "updated" },
                    path,
                    self.repository,
                    self.branch
                );
                MirrorOutcome::Written { path, created }
            }
            Err(e) => {
                let warning = e.to_warning();
                let kind = warning.kind;
                diag.warn(warning);
                MirrorOutcome::Failed(kind)
            }
        }
    }

    /// One read-modify-write round. Returns the path and whether the file
    /// was newly created. No retry on conflict.
    async fn write_record(&self, record: &StatusRecord) -> Result<(String, bool), MirrorError> {
        let path = record.path()?;
        let content = record.to_json().context(EncodeSnafu)?;

        let revision = self
            .store
            .read_revision(&self.repository, &path, &self.branch)
            .await
            .context(ReadSnafu { path: path.as_str() })?;

        if let FileRevision::Found(sha) = &revision {
            tracing::debug!("{} exists at {}", path, sha);
        } else {
            tracing::debug!("{} does not exist yet", path);
        }

        let request = PutFile {
            path: path.clone(),
            branch: self.branch.clone(),
            message: record.commit_message(),
            content: content.into_bytes(),
            sha: revision.token().cloned(),
        };

        self.store
            .write_file(&self.repository, &request)
            .await
            .map_err(|source| write_error(&path, source))?;

        Ok((path, request.sha.is_none()))
    }
}
