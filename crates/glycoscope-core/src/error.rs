//! Error types for glycoscope.

use thiserror::Error;

/// The main error type for glycoscope operations.
///
/// Degenerate geometry never surfaces here: missing atoms, collinear
/// rings, and near-parallel axes all resolve to documented fallbacks
/// inside the frame estimator. Errors are reserved for contract
/// violations by the host collaborators.
#[derive(Error, Debug)]
pub enum GlycoscopeError {
    /// The selection collaborator rejected or could not evaluate the
    /// selection expression.
    #[error("invalid selection '{0}'")]
    InvalidSelection(String),

    /// The selection collaborator failed for a reason of its own.
    #[error("selection source error: {0}")]
    SourceError(String),
}

/// A specialized Result type for glycoscope operations.
pub type Result<T> = std::result::Result<T, GlycoscopeError>;
