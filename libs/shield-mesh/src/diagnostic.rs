//! # Diagnostics
//!
//! Non-fatal problems reported while building a shield. Every diagnostic is
//! also forwarded to the `log` facade so hosts without a diagnostics view
//! still see it.

use serde::Serialize;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The patch could not be generated and was left empty
    Error,
    /// The patch was generated but a later stage was skipped
    Warning,
}

/// A diagnostic attached to one patch of a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Severity of the problem
    pub severity: Severity,
    /// Position of the offending patch in the build order
    pub patch: usize,
    /// Human readable description
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning for the patch at `patch` and logs it.
    pub fn warning(patch: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("patch {patch}: {message}");
        Self {
            severity: Severity::Warning,
            patch,
            message,
        }
    }

    /// Creates an error diagnostic for the patch at `patch` and logs it.
    pub fn error(patch: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("patch {patch}: {message}");
        Self {
            severity: Severity::Error,
            patch,
            message,
        }
    }
}
