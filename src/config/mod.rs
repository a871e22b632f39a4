// ABOUTME: Caller inputs and their resolution into a run configuration.
// ABOUTME: Applies defaulting rules for service, version, branch, and credentials.

mod context;

pub use context::RepoContext;

use crate::error::{Error, Result};
use crate::types::{DeploymentState, InvalidState};

/// Branch the dashboard mirror writes to when none is given.
pub const DEFAULT_DASHBOARD_BRANCH: &str = "gh-pages";

/// Raw caller inputs, all optional strings.
///
/// CI runners pass unset inputs as empty strings, so an empty value is
/// treated exactly like an absent one.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub token: Option<String>,
    pub environment: Option<String>,
    pub status: Option<String>,
    pub environment_url: Option<String>,
    pub description: Option<String>,
    pub service: Option<String>,
    pub version: Option<String>,
    pub dashboard_repo: Option<String>,
    pub dashboard_branch: Option<String>,
    pub dashboard_token: Option<String>,
}

impl Inputs {
    /// The requested state, `success` when none was given.
    pub fn state(&self) -> std::result::Result<DeploymentState, InvalidState> {
        DeploymentState::validate(self.status.as_deref())
    }
}

/// Target of the dashboard mirror.
///
/// The repository stays a raw `owner/name` string here; it is parsed when
/// the mirror connects, so a bad value only costs the mirror.
#[derive(Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub repository: String,
    pub branch: String,
    pub token: String,
}

impl std::fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("repository", &self.repository)
            .field("branch", &self.branch)
            .finish_non_exhaustive()
    }
}

/// Fully resolved configuration for one invocation.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub context: RepoContext,
    pub environment: String,
    pub state: DeploymentState,
    pub environment_url: Option<String>,
    /// Caller-supplied description; defaults are derived where it is used.
    pub description: Option<String>,
    pub service: String,
    pub version: String,
    /// `None` disables the dashboard mirror.
    pub dashboard: Option<DashboardConfig>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("context", &self.context)
            .field("environment", &self.environment)
            .field("state", &self.state)
            .field("service", &self.service)
            .field("version", &self.version)
            .field("dashboard", &self.dashboard)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Resolve caller inputs against the repository context.
    ///
    /// The status is validated before anything else so an invalid state is
    /// always the reported failure.
    pub fn resolve(inputs: Inputs, context: RepoContext) -> Result<Self> {
        let state = inputs.state()?;

        let token = present(inputs.token).ok_or_else(|| Error::MissingInput("token".to_string()))?;
        let environment = present(inputs.environment)
            .ok_or_else(|| Error::MissingInput("environment".to_string()))?;

        let service =
            present(inputs.service).unwrap_or_else(|| context.repository.name().to_string());
        let version = present(inputs.version).unwrap_or_else(|| context.short_sha());

        let dashboard = present(inputs.dashboard_repo).map(|repository| DashboardConfig {
            repository,
            branch: present(inputs.dashboard_branch)
                .unwrap_or_else(|| DEFAULT_DASHBOARD_BRANCH.to_string()),
            token: present(inputs.dashboard_token).unwrap_or_else(|| token.clone()),
        });

        Ok(Config {
            token,
            context,
            environment,
            state,
            environment_url: present(inputs.environment_url),
            description: present(inputs.description),
            service,
            version,
            dashboard,
        })
    }

    pub fn production_environment(&self) -> bool {
        is_production_environment(&self.environment)
    }
}

/// Exact, case-sensitive match on `prod` or `production`.
pub fn is_production_environment(environment: &str) -> bool {
    environment == "prod" || environment == "production"
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
