// ABOUTME: Command module aggregator for the shipstat CLI.
// ABOUTME: Re-exports report and validate command handlers.

mod report;
mod validate;

pub use report::report;
pub use validate::validate;
