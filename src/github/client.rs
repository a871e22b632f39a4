// ABOUTME: REST client for the GitHub deployments and contents APIs.
// ABOUTME: Maps HTTP status codes onto DeploymentCreated, FileRevision, and ApiError.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::error::ApiError;
use super::models::{
    ContentResponse, CreateDeployment, CreateDeploymentStatus, DeploymentCreated,
    DeploymentResponse, FileRevision, MessageResponse, PutContentBody, PutFile,
};
use super::{ContentStore, DeploymentApi};
use crate::types::{BlobSha, DeploymentId, RepoSlug};

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("shipstat/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Error Mapping Helpers
// =============================================================================

/// Turn a non-success response into `ApiError::Status`, keeping the
/// platform's `message` field when the body has one.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<MessageResponse>().await {
        Ok(MessageResponse {
            message: Some(message),
        }) => message,
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// A rejected write is a conflict when the version token was stale (409) or
/// was missing for a file that already exists (422 naming the sha).
fn map_write_error(error: ApiError) -> ApiError {
    match error {
        ApiError::Status { status, message } if status == 409 => ApiError::Conflict(message),
        ApiError::Status { status, message } if status == 422 && message.contains("sha") => {
            ApiError::Conflict(message)
        }
        other => other,
    }
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

// =============================================================================
// GitHubClient
// =============================================================================

/// Authenticated client for one API base URL and one credential.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a client for `api_url` (e.g. `https://api.github.com` or a
    /// GitHub Enterprise `https://host/api/v3`).
    pub fn new(api_url: &str, token: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repo_url(&self, repo: &RepoSlug, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url,
            repo.owner(),
            repo.name(),
            tail
        )
    }
}

#[async_trait]
impl DeploymentApi for GitHubClient {
    async fn create_deployment(
        &self,
        repo: &RepoSlug,
        request: &CreateDeployment,
    ) -> Result<DeploymentCreated, ApiError> {
        let url = self.repo_url(repo, "deployments");
        debug!("POST {} environment={}", url, request.environment);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let text = response.text().await?;
            let created: DeploymentResponse = serde_json::from_str(&text)?;
            return Ok(DeploymentCreated::Created(DeploymentId::new(created.id)));
        }

        if status.is_success() {
            // 202 bodies carry a message and no deployment
            let message = response
                .json::<MessageResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Ok(DeploymentCreated::Deferred {
                status: status.as_u16(),
                message,
            });
        }

        Err(status_error(response).await)
    }

    async fn create_deployment_status(
        &self,
        repo: &RepoSlug,
        deployment: &DeploymentId,
        request: &CreateDeploymentStatus,
    ) -> Result<(), ApiError> {
        let url = self.repo_url(repo, &format!("deployments/{}/statuses", deployment));
        debug!("POST {} state={}", url, request.state);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

#[async_trait]
impl ContentStore for GitHubClient {
    async fn read_revision(
        &self,
        repo: &RepoSlug,
        path: &str,
        branch: &str,
    ) -> Result<FileRevision, ApiError> {
        let url = self.repo_url(repo, &format!("contents/{}", encode_path(path)));
        debug!("GET {} ref={}", url, branch);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("ref", branch)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FileRevision::NotFound);
        }
        if !status.is_success() {
            return Err(status_error(response).await);
        }

        let text = response.text().await?;
        let content: ContentResponse = serde_json::from_str(&text)?;
        Ok(FileRevision::Found(BlobSha::new(content.sha)))
    }

    async fn write_file(&self, repo: &RepoSlug, request: &PutFile) -> Result<(), ApiError> {
        let url = self.repo_url(repo, &format!("contents/{}", encode_path(&request.path)));
        debug!(
            "PUT {} branch={} sha={:?}",
            url,
            request.branch,
            request.sha.as_ref().map(BlobSha::as_str)
        );

        let body = PutContentBody {
            message: &request.message,
            content: STANDARD.encode(&request.content),
            branch: &request.branch,
            sha: request.sha.as_ref().map(BlobSha::as_str),
        };

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(map_write_error(status_error(response).await))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_api_url() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "t").unwrap();
        assert_eq!(client.api_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    fn repo_url_includes_owner_and_name() {
        let client = GitHubClient::new(GitHubClient::DEFAULT_API_URL, "t").unwrap();
        let repo = RepoSlug::parse("acme/widgets").unwrap();
        assert_eq!(
            client.repo_url(&repo, "deployments"),
            "https://api.github.com/repos/acme/widgets/deployments"
        );
    }

    #[test]
    fn encodes_each_path_segment() {
        assert_eq!(
            encode_path("status/my svc/prod.json"),
            "status/my%20svc/prod.json"
        );
    }

    #[test]
    fn maps_409_and_sha_422_to_conflict() {
        let stale = map_write_error(ApiError::Status {
            status: 409,
            message: "is at 1a2b but expected 3c4d".to_string(),
        });
        assert!(stale.is_conflict());

        let missing = map_write_error(ApiError::Status {
            status: 422,
            message: "Invalid request.\n\n\"sha\" wasn't supplied.".to_string(),
        });
        assert!(missing.is_conflict());

        let other = map_write_error(ApiError::Status {
            status: 422,
            message: "Invalid request.".to_string(),
        });
        assert!(!other.is_conflict());
    }

    #[test]
    fn debug_hides_token() {
        let client = GitHubClient::new(GitHubClient::DEFAULT_API_URL, "ghs_secret").unwrap();
        assert!(!format!("{client:?}").contains("ghs_secret"));
    }
}
