//! Real polynomials stored highest degree first.

use num_complex::Complex;
use num_traits::Zero;
use serde::Serialize;

use crate::error::{Error, Result};

/// A real polynomial in the Laplace variable `s`.
///
/// Coefficients are ordered highest degree first, so `[1.0, 3.0, 2.0]` is
/// `s² + 3s + 2`. Construction strips leading zeros and rejects empty or
/// all-zero input; the leading coefficient of a valid polynomial is always
/// non-zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from raw coefficients, highest degree first.
    ///
    /// Leading zeros are stripped. Returns [`Error::EmptyOrZeroPolynomial`]
    /// if the input is empty or every coefficient is zero.
    pub fn new(raw: &[f64]) -> Result<Self> {
        if raw.is_empty() || raw.iter().all(|c| *c == 0.0) {
            return Err(Error::EmptyOrZeroPolynomial);
        }
        let first_nonzero = raw.iter().position(|c| *c != 0.0).unwrap_or(raw.len());
        Ok(Self {
            coeffs: raw[first_nonzero..].to_vec(),
        })
    }

    /// The stripped coefficients, highest degree first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree after stripping leading zeros.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The (non-zero) leading coefficient.
    pub fn leading(&self) -> f64 {
        self.coeffs[0]
    }

    /// Evaluate the polynomial at a complex point.
    ///
    /// Accumulates `Σ coeff[i] · s^(degree − i)` with complex powers. This
    /// is the single evaluation routine shared by the Nyquist and Bode
    /// samplers and by test residual checks.
    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        let degree = self.degree();
        self.coeffs
            .iter()
            .enumerate()
            .fold(Complex::zero(), |acc, (i, &coeff)| {
                acc + coeff * s.powi((degree - i) as i32)
            })
    }

    /// Coefficients scaled by `1 / divisor`, highest degree first.
    pub fn scaled_by(&self, divisor: f64) -> Vec<f64> {
        self.coeffs.iter().map(|c| c / divisor).collect()
    }
}
