// ABOUTME: Report command implementation.
// ABOUTME: Resolves inputs, wires the API clients, runs the pipeline, and emits outputs.

use crate::cli::ReportArgs;
use shipstat::config::{Config, RepoContext};
use shipstat::dashboard::DashboardMirror;
use shipstat::diagnostics::Diagnostics;
use shipstat::error::Result;
use shipstat::github::GitHubClient;
use shipstat::output::{Output, write_step_outputs};
use shipstat::pipeline::{self, MirrorTarget, RunOutcome};

/// Report one deployment and mirror it to the dashboard when configured.
pub async fn report(args: ReportArgs, output: &mut Output) -> Result<()> {
    output.start_timer();

    let inputs = args.inputs();
    // An invalid status wins over any other configuration problem.
    inputs.state()?;

    let context = RepoContext::new(
        args.repository.as_deref(),
        args.sha.as_deref(),
        args.git_ref.as_deref(),
        args.api_url.as_deref(),
    )?;
    let config = Config::resolve(inputs, context)?;
    tracing::debug!(?config, "Resolved configuration");

    let client = GitHubClient::new(&config.context.api_url, &config.token)?;
    let connection = config
        .dashboard
        .as_ref()
        .map(|dashboard| DashboardMirror::connect(dashboard, &config.context.api_url));
    let mirror = MirrorTarget::from_connection(connection.as_ref());

    let mut diag = Diagnostics::default();
    let outcome = pipeline::run(&client, mirror, config, output, &mut diag).await?;

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    match outcome {
        RunOutcome::Reported { outputs, .. } => {
            output.outputs(&outputs);
            if let Some(path) = args.output_file.as_deref().filter(|p| !p.as_os_str().is_empty()) {
                write_step_outputs(path, &outputs)?;
            }
            output.success("Deployment reported");
        }
        RunOutcome::Deferred { status } => {
            tracing::debug!(status, "Deployment deferred, no outputs produced");
        }
    }

    Ok(())
}
