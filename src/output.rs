// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), JSON, and GitHub Actions workflow-command modes.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::deploy::DeploymentOutputs;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
    /// Progress as plain lines, warnings and errors as workflow commands
    Actions,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if matches!(self.mode, OutputMode::Normal | OutputMode::Actions) {
            println!("{message}");
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet | OutputMode::Actions => {
                println!("{message}");
            }
            OutputMode::Json => {
                print_json(&JsonEvent {
                    event: "success",
                    message,
                    duration_secs: self.duration(),
                });
            }
        }
    }

    /// Print a non-fatal warning.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Warning: {message}");
            }
            OutputMode::Actions => {
                println!("::warning::{}", escape_command_data(message));
            }
            OutputMode::Json => {
                print_json(&JsonEvent {
                    event: "warning",
                    message,
                    duration_secs: None,
                });
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Actions => {
                println!("::error::{}", escape_command_data(message));
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Print the values produced by a reported deployment.
    pub fn outputs(&self, outputs: &DeploymentOutputs) {
        match self.mode {
            OutputMode::Json => {
                print_json(&JsonOutputs {
                    event: "outputs",
                    deployment_id: outputs.deployment_id.get(),
                    service: &outputs.service,
                    version: &outputs.version,
                });
            }
            _ => {
                for (name, value) in output_pairs(outputs) {
                    println!("{name}={value}");
                }
            }
        }
    }
}

fn print_json<T: Serialize>(event: &T) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct JsonOutputs<'a> {
    event: &'a str,
    deployment_id: u64,
    service: &'a str,
    version: &'a str,
}

/// Escape data for a `::warning::`/`::error::` workflow command.
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn output_pairs(outputs: &DeploymentOutputs) -> [(&'static str, String); 3] {
    [
        ("deployment-id", outputs.deployment_id.to_string()),
        ("service", outputs.service.clone()),
        ("version", outputs.version.clone()),
    ]
}

const MULTILINE_DELIMITER: &str = "SHIPSTAT_EOF";

/// Append step outputs to a `GITHUB_OUTPUT`-style file.
///
/// Single-line values are written as `name=value`; values containing a
/// newline use the `name<<DELIMITER` block form.
pub fn write_step_outputs(path: &Path, outputs: &DeploymentOutputs) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (name, value) in output_pairs(outputs) {
        if value.contains('\n') {
            writeln!(file, "{name}<<{MULTILINE_DELIMITER}")?;
            writeln!(file, "{value}")?;
            writeln!(file, "{MULTILINE_DELIMITER}")?;
        } else {
            writeln!(file, "{name}={value}")?;
        }
    }
    Ok(())
}
