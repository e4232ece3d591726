//! Polynomial root extraction.
//!
//! Degree 1 and 2 use closed forms; degree 3 and above go through the
//! companion matrix and a general real-matrix eigenvalue decomposition.
//! The quadratic branch computes conjugate pairs directly from real and
//! imaginary parts so the pair is exactly symmetric.

use nalgebra::DMatrix;
use num_complex::Complex;
use routhier_core::Polynomial;

use crate::error::Result;

/// Degree-class dispatch for root extraction.
///
/// Modeling the dispatch as a variant keeps the branches exhaustive and
/// isolates the eigenvalue decomposition behind the single [`DegreeClass::General`]
/// arm.
#[derive(Debug, Clone, PartialEq)]
enum DegreeClass {
    /// Degree 0: no roots.
    Constant,
    /// `a·s + b`.
    Linear { a: f64, b: f64 },
    /// `a·s² + b·s + c`.
    Quadratic { a: f64, b: f64, c: f64 },
    /// Degree ≥ 3: trailing coefficients of the monic polynomial.
    General { monic_tail: Vec<f64> },
}

impl DegreeClass {
    fn of(poly: &Polynomial) -> Result<Self> {
        // Unreachable through Polynomial::new, but root extraction is also
        // used standalone on numerators and denominators.
        if poly.leading() == 0.0 {
            return Err(routhier_core::Error::InvalidPolynomial.into());
        }
        let coeffs = poly.coeffs();
        Ok(match poly.degree() {
            0 => Self::Constant,
            1 => Self::Linear {
                a: coeffs[0],
                b: coeffs[1],
            },
            2 => Self::Quadratic {
                a: coeffs[0],
                b: coeffs[1],
                c: coeffs[2],
            },
            _ => Self::General {
                monic_tail: poly.scaled_by(poly.leading())[1..].to_vec(),
            },
        })
    }
}

/// Find all roots of a real polynomial.
///
/// Returns one root per degree. Complex roots of the quadratic branch come
/// back as an exact conjugate pair; eigenvalue-derived roots are reported
/// as the decomposition produces them.
pub fn find_roots(poly: &Polynomial) -> Result<Vec<Complex<f64>>> {
    Ok(match DegreeClass::of(poly)? {
        DegreeClass::Constant => Vec::new(),
        DegreeClass::Linear { a, b } => vec![Complex::new(-b / a, 0.0)],
        DegreeClass::Quadratic { a, b, c } => {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let sqrt_d = discriminant.sqrt();
                vec![
                    Complex::new((-b + sqrt_d) / (2.0 * a), 0.0),
                    Complex::new((-b - sqrt_d) / (2.0 * a), 0.0),
                ]
            } else {
                let re = -b / (2.0 * a);
                let im = (-discriminant).sqrt() / (2.0 * a);
                vec![Complex::new(re, im), Complex::new(re, -im)]
            }
        }
        DegreeClass::General { monic_tail } => {
            companion_matrix(&monic_tail).complex_eigenvalues().iter().copied().collect()
        }
    })
}

/// Companion matrix of a monic polynomial given its trailing coefficients.
///
/// Ones on the subdiagonal, negated trailing coefficients across the first
/// row; its eigenvalues are the polynomial's roots.
fn companion_matrix(monic_tail: &[f64]) -> DMatrix<f64> {
    let n = monic_tail.len();
    let mut companion = DMatrix::zeros(n, n);
    for (i, &coeff) in monic_tail.iter().enumerate() {
        companion[(0, i)] = -coeff;
        if i < n - 1 {
            companion[(i + 1, i)] = 1.0;
        }
    }
    companion
}
