// ABOUTME: State transition methods for deployment reporting.
// ABOUTME: Each method consumes self and returns the next state on success.

use serde_json::json;

use crate::github::{
    CreateDeployment, CreateDeploymentStatus, DeploymentApi, DeploymentCreated,
};

use super::Deployment;
use super::error::ReportError;
use super::state::{Created, Planned, Reported};

/// Outcome of asking the platform to create a deployment.
#[derive(Debug)]
pub enum Creation {
    /// HTTP 201: continue with `report_status()`.
    Created(Deployment<Created>),
    /// Another success code: nothing further should be attempted.
    Deferred {
        status: u16,
        message: Option<String>,
    },
}

// =============================================================================
// Planned -> Created
// =============================================================================

impl Deployment<Planned> {
    /// Request body for the deployment. Policy fields are fixed: no
    /// auto-merge, no required status contexts, never transient.
    pub fn create_request(&self) -> CreateDeployment {
        CreateDeployment {
            git_ref: self.config.context.sha.clone(),
            environment: self.config.environment.clone(),
            payload: json!({
                "service": self.config.service,
                "version": self.config.version,
            })
            .to_string(),
            auto_merge: false,
            required_contexts: Vec::new(),
            description: self.deployment_description(),
            transient_environment: false,
            production_environment: self.config.production_environment(),
        }
    }

    /// Create the deployment on the platform.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::CreateDeployment` if the request fails. A
    /// success code other than 201 is not an error: it comes back as
    /// `Creation::Deferred`.
    pub async fn create<A>(self, api: &A) -> Result<Creation, ReportError>
    where
        A: DeploymentApi + ?Sized,
    {
        let request = self.create_request();
        tracing::debug!(
            "Creating deployment for {}@{} to {}",
            self.config.service,
            self.config.version,
            self.config.environment
        );

        let created = api
            .create_deployment(&self.config.context.repository, &request)
            .await
            .map_err(ReportError::CreateDeployment)?;

        match created {
            DeploymentCreated::Created(deployment_id) => {
                tracing::debug!("Deployment created with ID: {}", deployment_id);
                Ok(Creation::Created(Deployment {
                    config: self.config,
                    state: Created::new(deployment_id),
                }))
            }
            DeploymentCreated::Deferred { status, message } => {
                Ok(Creation::Deferred { status, message })
            }
        }
    }
}

// =============================================================================
// Created -> Reported
// =============================================================================

impl Deployment<Created> {
    /// Request body for the status. `auto_inactive` makes the platform mark
    /// earlier statuses of the same environment inactive.
    pub fn status_request(&self) -> CreateDeploymentStatus {
        CreateDeploymentStatus {
            state: self.config.state,
            environment_url: self.config.environment_url.clone(),
            description: self.status_description(),
            auto_inactive: true,
        }
    }

    /// Attach the validated status to the created deployment.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::CreateStatus`. The deployment is left in place;
    /// there is no rollback of the creation.
    pub async fn report_status<A>(self, api: &A) -> Result<Deployment<Reported>, ReportError>
    where
        A: DeploymentApi + ?Sized,
    {
        let request = self.status_request();
        let deployment_id = *self.state.deployment_id();

        api.create_deployment_status(&self.config.context.repository, &deployment_id, &request)
            .await
            .map_err(|source| ReportError::CreateStatus {
                deployment_id,
                source,
            })?;

        tracing::debug!("Deployment status set to: {}", self.config.state);

        Ok(Deployment {
            config: self.config,
            state: Reported::new(deployment_id),
        })
    }
}
