//! # Mesh Errors
//!
//! Error types for shield mesh generation.
//!
//! Geometry errors are local: a generator or overlay that rejects its
//! parameters leaves every buffer it was given untouched, and the builder
//! turns the error into a [`crate::Diagnostic`] instead of aborting.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A parameter is outside its valid range (radius, resolution, depth...)
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many vertices for 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
