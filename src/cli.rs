// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every input also reads the matching GitHub Actions environment variable.

use clap::{Args, Parser, Subcommand};
use shipstat::config::Inputs;
use shipstat::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipstat")]
#[command(about = "Record a deployment and mirror its status to a dashboard repository")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, env = "SHIPSTAT_FORMAT", default_value = "normal")]
    pub format: OutputMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a deployment, set its status, and update the dashboard
    Report(ReportArgs),

    /// Check a status value without contacting the platform
    Validate {
        /// Status to check
        status: String,
    },
}

#[derive(Args)]
pub struct ReportArgs {
    /// Token used for the deployment API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Target environment (e.g. staging, production)
    #[arg(long, env = "INPUT_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Deployment state [default: success]
    #[arg(long, env = "INPUT_STATUS")]
    pub status: Option<String>,

    /// URL of the running environment
    #[arg(long, env = "INPUT_ENVIRONMENT-URL")]
    pub environment_url: Option<String>,

    /// Description for the deployment and its status
    #[arg(long, env = "INPUT_DESCRIPTION")]
    pub description: Option<String>,

    /// Service name [default: repository name]
    #[arg(long, env = "INPUT_SERVICE")]
    pub service: Option<String>,

    /// Version [default: short commit sha]
    #[arg(long, env = "INPUT_VERSION")]
    pub version: Option<String>,

    /// Dashboard repository (owner/name); enables the status mirror
    #[arg(long, env = "INPUT_DASHBOARD-REPO")]
    pub dashboard_repo: Option<String>,

    /// Dashboard branch [default: gh-pages]
    #[arg(long, env = "INPUT_DASHBOARD-BRANCH")]
    pub dashboard_branch: Option<String>,

    /// Token for the dashboard repository [default: --token]
    #[arg(long, env = "INPUT_DASHBOARD-TOKEN", hide_env_values = true)]
    pub dashboard_token: Option<String>,

    /// Repository being deployed (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit being deployed
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Ref being deployed [default: --sha]
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// File that receives step outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl ReportArgs {
    pub fn inputs(&self) -> Inputs {
        Inputs {
            token: self.token.clone(),
            environment: self.environment.clone(),
            status: self.status.clone(),
            environment_url: self.environment_url.clone(),
            description: self.description.clone(),
            service: self.service.clone(),
            version: self.version.clone(),
            dashboard_repo: self.dashboard_repo.clone(),
            dashboard_branch: self.dashboard_branch.clone(),
            dashboard_token: self.dashboard_token.clone(),
        }
    }
}
