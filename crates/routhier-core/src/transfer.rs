//! Transfer functions as ratios of two polynomials.

use num_complex::Complex;
use serde::Serialize;

use crate::error::Result;
use crate::polynomial::Polynomial;

/// A single-input single-output transfer function `N(s) / D(s)`.
///
/// Both polynomials satisfy the [`Polynomial`] invariants, so the
/// denominator is never structurally zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl TransferFunction {
    /// Build a transfer function from raw coefficient lists, highest
    /// degree first.
    pub fn new(numerator: &[f64], denominator: &[f64]) -> Result<Self> {
        Ok(Self {
            numerator: Polynomial::new(numerator)?,
            denominator: Polynomial::new(denominator)?,
        })
    }

    /// Build from already-validated polynomials.
    pub fn from_polynomials(numerator: Polynomial, denominator: Polynomial) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// Evaluate `N(s) / D(s)` at a complex point.
    ///
    /// Points where `D(s) = 0` produce non-finite components; callers that
    /// sample the imaginary axis are expected to handle those samples.
    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        self.numerator.eval(s) / self.denominator.eval(s)
    }

    /// True when the numerator degree is at most the denominator degree.
    pub fn is_proper(&self) -> bool {
        self.numerator.degree() <= self.denominator.degree()
    }
}
