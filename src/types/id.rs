// ABOUTME: Platform identifiers: numeric deployment IDs and file version tokens.
// ABOUTME: Separate types so a content sha never stands in for a deployment.

use std::fmt;

/// Identifier the platform assigns to a created deployment.
#[must_use = "IDs reference remote resources and should not be ignored"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeploymentId(u64);

impl DeploymentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of a stored file. The store accepts a write carrying it only
/// while it still names the current revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSha(String);

impl BlobSha {
    pub fn new(sha: impl Into<String>) -> Self {
        Self(sha.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
