// ABOUTME: Deployment reporting using the type state pattern.
// ABOUTME: Planned -> Created -> Reported, each step one platform call.

mod deployment;
mod error;
mod state;
mod transitions;

pub use deployment::{Deployment, DeploymentOutputs};
pub use error::ReportError;
pub use state::{Created, Planned, Reported};
pub use transitions::Creation;
