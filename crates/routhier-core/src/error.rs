//! Error types for polynomial and transfer function validation.

use thiserror::Error;

/// Errors raised while validating coefficient input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The coefficient list is empty or every coefficient is zero.
    #[error("polynomial is empty or has all-zero coefficients")]
    EmptyOrZeroPolynomial,

    /// The leading coefficient is still zero after stripping.
    ///
    /// Unreachable through [`crate::Polynomial::new`], but checked
    /// defensively wherever coefficients are consumed standalone.
    #[error("polynomial has a zero leading coefficient")]
    InvalidPolynomial,
}

/// Result type for core validation.
pub type Result<T> = std::result::Result<T, Error>;
