// ABOUTME: Hosting repository context for the current run.
// ABOUTME: Owner/name, commit sha, ref, and API base URL as provided by the CI runner.

use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::types::RepoSlug;

/// Where and what is being deployed, as reported by the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub repository: RepoSlug,
    pub sha: String,
    pub git_ref: String,
    pub api_url: String,
}

impl RepoContext {
    /// Build a context from raw strings (normally `GITHUB_REPOSITORY`,
    /// `GITHUB_SHA`, `GITHUB_REF`, `GITHUB_API_URL`).
    ///
    /// An absent ref falls back to the sha; an absent API URL to the public API.
    pub fn new(
        repository: Option<&str>,
        sha: Option<&str>,
        git_ref: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        let repository = non_empty(repository)
            .ok_or_else(|| Error::MissingContext("GITHUB_REPOSITORY".to_string()))?;
        let repository = RepoSlug::parse(repository)
            .map_err(|e| Error::InvalidInput(format!("GITHUB_REPOSITORY: {e}")))?;

        let sha = non_empty(sha)
            .ok_or_else(|| Error::MissingContext("GITHUB_SHA".to_string()))?
            .to_string();

        let git_ref = non_empty(git_ref).unwrap_or(&sha).to_string();
        let api_url = non_empty(api_url)
            .unwrap_or(GitHubClient::DEFAULT_API_URL)
            .to_string();

        Ok(Self {
            repository,
            sha,
            git_ref,
            api_url,
        })
    }

    /// First seven characters of the commit sha.
    pub fn short_sha(&self) -> String {
        self.sha.chars().take(7).collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_falls_back_to_sha() {
        let ctx = RepoContext::new(Some("acme/api"), Some("0123456789abcdef"), None, None).unwrap();
        assert_eq!(ctx.git_ref, "0123456789abcdef");
        assert_eq!(ctx.api_url, "https://api.github.com");
    }

    #[test]
    fn short_sha_is_seven_chars() {
        let ctx = RepoContext::new(Some("acme/api"), Some("0123456789abcdef"), None, None).unwrap();
        assert_eq!(ctx.short_sha(), "0123456");
    }

    #[test]
    fn short_sha_keeps_shorter_values() {
        let ctx = RepoContext::new(Some("acme/api"), Some("abc"), None, None).unwrap();
        assert_eq!(ctx.short_sha(), "abc");
    }

    #[test]
    fn missing_repository_is_an_error() {
        let err = RepoContext::new(None, Some("abc"), None, None).unwrap_err();
        assert!(matches!(err, Error::MissingContext(ref v) if v == "GITHUB_REPOSITORY"));
    }

    #[test]
    fn empty_sha_is_an_error() {
        let err = RepoContext::new(Some("acme/api"), Some(""), None, None).unwrap_err();
        assert!(matches!(err, Error::MissingContext(ref v) if v == "GITHUB_SHA"));
    }
}
