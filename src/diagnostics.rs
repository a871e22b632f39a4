// ABOUTME: Diagnostics accumulator for non-fatal warnings during a run.
// ABOUTME: Collects warnings that shouldn't fail the invocation but should be shown to users.

/// Collects non-fatal warnings.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning. Users see it once, through `Output::warning`;
    /// the log only carries it at debug level.
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a run.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Deployment creation returned a success code other than 201.
    pub fn unexpected_response(status: u16, detail: Option<&str>) -> Self {
        let mut message = format!(
            "Unexpected deployment API response status: {}. The deployment may have been queued for auto-merge.",
            status
        );
        if let Some(detail) = detail {
            message.push_str(&format!(" ({detail})"));
        }
        Self {
            kind: WarningKind::UnexpectedResponse,
            message,
        }
    }

    /// Create a warning for a dashboard store that could not be used at all.
    pub fn mirror_setup(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MirrorSetup,
            message: message.into(),
        }
    }

    /// Create a dashboard read warning.
    pub fn mirror_read(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MirrorRead,
            message: message.into(),
        }
    }

    /// Create a dashboard write warning.
    pub fn mirror_write(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MirrorWrite,
            message: message.into(),
        }
    }

    /// Create a dashboard version-conflict warning.
    pub fn mirror_conflict(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MirrorConflict,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Deployment was not created immediately; status and mirror were skipped.
    UnexpectedResponse,
    /// The dashboard store identifier or client was unusable.
    MirrorSetup,
    /// Could not read the current dashboard file.
    MirrorRead,
    /// Could not write the dashboard file.
    MirrorWrite,
    /// Another writer updated the dashboard file first.
    MirrorConflict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::unexpected_response(202, None));
        diag.warn(Warning::mirror_conflict("sha mismatch"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        assert_eq!(
            Warning::mirror_read("x").kind,
            WarningKind::MirrorRead
        );
        assert_eq!(
            Warning::mirror_write("x").kind,
            WarningKind::MirrorWrite
        );
        assert_eq!(
            Warning::mirror_conflict("x").kind,
            WarningKind::MirrorConflict
        );
    }

    #[test]
    fn unexpected_response_mentions_status_and_detail() {
        let warning = Warning::unexpected_response(202, Some("Auto-merged master into topic"));
        assert_eq!(warning.kind, WarningKind::UnexpectedResponse);
        assert!(warning.message.contains("202"));
        assert!(warning.message.contains("Auto-merged master into topic"));
    }
}
