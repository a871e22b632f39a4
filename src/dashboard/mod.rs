// ABOUTME: Dashboard mirror: durable status files readable without the platform API.
// ABOUTME: Exports the record format, path derivation, and the best-effort writer.

mod error;
mod mirror;
mod record;

pub use error::{MirrorError, MirrorErrorKind};
pub use mirror::{DashboardMirror, MirrorOutcome};
pub use record::{STATUS_DIR, StatusRecord, status_path};
