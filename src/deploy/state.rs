// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: Later states carry the platform-assigned deployment ID.

use crate::types::DeploymentId;

/// Planned: inputs resolved and status validated, nothing sent yet.
/// Available actions: `create()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Planned;

/// Created: the platform accepted the deployment.
/// Available actions: `report_status()`
#[derive(Debug, Clone)]
pub struct Created {
    deployment_id: DeploymentId,
}

impl Created {
    pub(crate) fn new(deployment_id: DeploymentId) -> Self {
        Self { deployment_id }
    }

    pub fn deployment_id(&self) -> &DeploymentId {
        &self.deployment_id
    }
}

/// Reported: the status is attached to the deployment.
/// Available actions: `outputs()`, mirroring to the dashboard.
#[derive(Debug, Clone)]
pub struct Reported {
    deployment_id: DeploymentId,
}

impl Reported {
    pub(crate) fn new(deployment_id: DeploymentId) -> Self {
        Self { deployment_id }
    }

    pub fn deployment_id(&self) -> &DeploymentId {
        &self.deployment_id
    }
}
