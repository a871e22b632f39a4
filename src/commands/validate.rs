// ABOUTME: Validate command implementation.
// ABOUTME: Checks a status value offline, with the same rules the report command uses.

use shipstat::error::Result;
use shipstat::output::Output;
use shipstat::types::DeploymentState;

pub fn validate(status: &str, output: &Output) -> Result<()> {
    let state = DeploymentState::parse(status)?;
    output.success(&format!("{state} is a valid deployment status"));
    Ok(())
}
