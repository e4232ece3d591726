//! Error types for the analysis engine.

use thiserror::Error;

/// Errors that can occur during stability analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid polynomial input (empty, all-zero, or zero leading
    /// coefficient).
    #[error(transparent)]
    Core(#[from] routhier_core::Error),

    /// Routh array construction hit a zero pivot.
    ///
    /// A row of zeros or a leading zero would require the
    /// auxiliary-polynomial substitution, which this engine does not
    /// attempt; the test is reported as unable to complete.
    #[error("Routh array pivot is zero at row {row}; the test cannot continue")]
    DegenerateRouthRow { row: usize },

    /// Defensive check in state-space construction.
    #[error("denominator leading coefficient is zero")]
    ZeroLeadingDenominatorCoefficient,

    /// Numerator degree exceeds denominator degree; no controllable
    /// canonical realization exists without polynomial division.
    #[error("improper transfer function: numerator degree {num} exceeds denominator degree {den}")]
    ImproperTransferFunction { num: usize, den: usize },

    /// Input signal and time grid lengths disagree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The time grid has fewer than two points, so no step size exists.
    #[error("time grid must contain at least two points")]
    TimeGridTooShort,
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
