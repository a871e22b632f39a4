// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup, config builders, and in-memory platform fakes.

use std::sync::Once;

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod fakes;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("shipstat=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Context for `acme/web` at a fixed commit.
#[allow(dead_code)]
pub fn context() -> shipstat::config::RepoContext {
    shipstat::config::RepoContext::new(
        Some("acme/web"),
        Some("0123456789abcdef0123456789abcdef01234567"),
        Some("refs/heads/main"),
        None,
    )
    .unwrap()
}

/// Inputs with only the required values set.
#[allow(dead_code)]
pub fn inputs(environment: &str) -> shipstat::config::Inputs {
    shipstat::config::Inputs {
        token: Some("t0k3n".to_string()),
        environment: Some(environment.to_string()),
        ..Default::default()
    }
}
