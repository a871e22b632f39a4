// ABOUTME: Library root for shipstat - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod dashboard;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod github;
pub mod output;
pub mod pipeline;
pub mod types;
