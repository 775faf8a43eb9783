//! Error types for the Lantern camera module
//!
//! Only recoverable, caller-input rejections are modeled as errors. Contract
//! violations (near >= far, aspect ratio indistinguishable from zero) are
//! programmer errors and panic via assertions instead of returning a value.

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera errors — the caller-input-rejection category.
///
/// Every variant leaves the camera state exactly as it was before the call.
#[derive(Debug, Clone)]
pub enum Error {
    /// Caller-supplied input is degenerate (e.g. look-at target equals the
    /// eye position)
    DegenerateInput(String),

    /// Operation is not valid in the current projection mode (e.g. FOV
    /// update while the camera holds an orthographic projection)
    ProjectionMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
            Error::ProjectionMode(msg) => write!(f, "Projection mode mismatch: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
