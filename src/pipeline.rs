// ABOUTME: One invocation: report the deployment, then mirror it when configured.
// ABOUTME: Reporter failures propagate; mirror failures end up in Diagnostics.

use crate::config::Config;
use crate::dashboard::{DashboardMirror, MirrorError, MirrorOutcome};
use crate::deploy::{Creation, Deployment, DeploymentOutputs, ReportError};
use crate::diagnostics::{Diagnostics, Warning};
use crate::github::{ContentStore, DeploymentApi};
use crate::output::Output;

/// The dashboard mirror as configured for one run.
#[derive(Debug)]
pub enum MirrorTarget<'a, S> {
    /// No dashboard repository configured.
    Disabled,
    Ready(&'a DashboardMirror<S>),
    /// Configured but unusable. Reported as a warning once the deployment
    /// has been reported.
    Unavailable(&'a MirrorError),
}

impl<'a, S> MirrorTarget<'a, S> {
    pub fn from_connection(
        connection: Option<&'a Result<DashboardMirror<S>, MirrorError>>,
    ) -> Self {
        match connection {
            None => MirrorTarget::Disabled,
            Some(Ok(mirror)) => MirrorTarget::Ready(mirror),
            Some(Err(e)) => MirrorTarget::Unavailable(e),
        }
    }
}

/// How an invocation that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Deployment created, status attached, mirror attempted if configured.
    Reported {
        outputs: DeploymentOutputs,
        mirror: MirrorOutcome,
    },
    /// Deployment creation answered with an unexpected success code; the
    /// status and mirror steps were not attempted.
    Deferred { status: u16 },
}

impl RunOutcome {
    pub fn outputs(&self) -> Option<&DeploymentOutputs> {
        match self {
            RunOutcome::Reported { outputs, .. } => Some(outputs),
            RunOutcome::Deferred { .. } => None,
        }
    }
}

/// Run the reporter and, when a mirror is configured, the dashboard mirror.
///
/// # Errors
///
/// Only the two platform calls of the reporter can fail the run. Mirror
/// problems and unexpected creation responses are recorded in `diag`.
pub async fn run<A, S>(
    api: &A,
    mirror: MirrorTarget<'_, S>,
    config: Config,
    output: &Output,
    diag: &mut Diagnostics,
) -> Result<RunOutcome, ReportError>
where
    A: DeploymentApi + ?Sized,
    S: ContentStore,
{
    let planned = Deployment::new(config);
    output.progress(&format!(
        "Creating deployment for {}@{} to {}",
        planned.service(),
        planned.version(),
        planned.environment()
    ));

    let created = match planned.create(api).await? {
        Creation::Created(created) => created,
        Creation::Deferred { status, message } => {
            diag.warn(Warning::unexpected_response(status, message.as_deref()));
            return Ok(RunOutcome::Deferred { status });
        }
    };
    output.progress(&format!(
        "Deployment created with ID: {}",
        created.deployment_id()
    ));

    let reported = created.report_status(api).await?;
    output.progress(&format!("Deployment status set to: {}", reported.state()));

    let mirror = match mirror {
        MirrorTarget::Ready(mirror) => {
            output.progress(&format!(
                "Updating dashboard status in {}@{}",
                mirror.repository(),
                mirror.branch()
            ));
            mirror.publish(&reported, diag).await
        }
        MirrorTarget::Unavailable(error) => {
            let warning = error.to_warning();
            let kind = warning.kind;
            diag.warn(warning);
            MirrorOutcome::Failed(kind)
        }
        MirrorTarget::Disabled => {
            tracing::debug!("No dashboard repository configured, skipping mirror");
            MirrorOutcome::Skipped
        }
    };

    Ok(RunOutcome::Reported {
        outputs: reported.outputs(),
        mirror,
    })
}
