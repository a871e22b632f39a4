// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Deployment states, repository slugs, and phantom-typed IDs.

mod deployment_state;
mod id;
mod repo_slug;

pub use deployment_state::{DeploymentState, InvalidState};
pub use id::{BlobSha, DeploymentId};
pub use repo_slug::{RepoSlug, RepoSlugError};
