// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: State types carry their own data for compile-time guarantees.

use crate::config::Config;
use crate::types::{DeploymentId, DeploymentState};

use super::state::{Created, Planned, Reported};

/// A deployment in progress, parameterized by its current state.
///
/// Only a `Deployment<Reported>` exposes outputs, so nothing downstream
/// (outputs, the dashboard mirror) can run before both platform calls
/// have succeeded.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) config: Config,
    pub(crate) state: S,
}

/// Values other steps may depend on once a deployment is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutputs {
    pub deployment_id: DeploymentId,
    pub service: String,
    pub version: String,
}

impl Deployment<Planned> {
    pub fn new(config: Config) -> Self {
        Deployment {
            config,
            state: Planned,
        }
    }
}

impl<S> Deployment<S> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &str {
        &self.config.service
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    pub fn environment(&self) -> &str {
        &self.config.environment
    }

    pub fn state(&self) -> DeploymentState {
        self.config.state
    }

    /// Description sent with the deployment itself.
    pub fn deployment_description(&self) -> String {
        self.config.description.clone().unwrap_or_else(|| {
            format!(
                "Deploy {}@{} to {}",
                self.config.service, self.config.version, self.config.environment
            )
        })
    }

    /// Description attached to the status (and mirrored to the dashboard).
    pub fn status_description(&self) -> String {
        self.config.description.clone().unwrap_or_else(|| {
            format!(
                "{}@{} deployed to {}",
                self.config.service, self.config.version, self.config.environment
            )
        })
    }
}

impl Deployment<Created> {
    pub fn deployment_id(&self) -> &DeploymentId {
        self.state.deployment_id()
    }
}

impl Deployment<Reported> {
    pub fn deployment_id(&self) -> &DeploymentId {
        self.state.deployment_id()
    }

    pub fn outputs(&self) -> DeploymentOutputs {
        DeploymentOutputs {
            deployment_id: *self.state.deployment_id(),
            service: self.config.service.clone(),
            version: self.config.version.clone(),
        }
    }
}
