//! Controllable canonical state-space realization.

use nalgebra::{DMatrix, DVector, RowDVector};
use routhier_core::TransferFunction;

use crate::error::{Error, Result};

/// State-space model `dx/dt = Ax + Bu`, `y = Cx + Du` with
/// `n = denominator degree` states.
///
/// A is the companion matrix of the normalized denominator (ones on the
/// subdiagonal, negated trailing coefficients across the first row), B is
/// the unit input vector, C carries the normalized numerator aligned so
/// that `C·(sI−A)⁻¹·B + D` reproduces `N(s)/D(s)` exactly, and D is the
/// feed-through term (zero for strictly proper systems).
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceModel {
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
    pub c: RowDVector<f64>,
    pub d: f64,
}

impl StateSpaceModel {
    /// Number of states.
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// Build the realization from a transfer function.
    ///
    /// Fails with [`Error::ImproperTransferFunction`] when the numerator
    /// degree exceeds the denominator degree, and defensively with
    /// [`Error::ZeroLeadingDenominatorCoefficient`] (unreachable after
    /// polynomial validation).
    pub fn build(tf: &TransferFunction) -> Result<Self> {
        let den = tf.denominator();
        let num = tf.numerator();

        if den.leading() == 0.0 {
            return Err(Error::ZeroLeadingDenominatorCoefficient);
        }
        let n = den.degree();
        let m = num.degree();
        if m > n {
            return Err(Error::ImproperTransferFunction { num: m, den: n });
        }

        // Normalize both polynomials by the denominator's leading
        // coefficient, so a[0] = 1.
        let a_coeffs = den.scaled_by(den.leading());
        let b_coeffs = num.scaled_by(den.leading());

        // Left-pad the numerator to n + 1 entries: nb[j] is the
        // coefficient of s^(n-j).
        let mut nb = vec![0.0; n + 1];
        nb[(n - m)..].copy_from_slice(&b_coeffs);

        let mut a = DMatrix::zeros(n, n);
        for i in 0..n {
            a[(0, i)] = -a_coeffs[i + 1];
            if i + 1 < n {
                a[(i + 1, i)] = 1.0;
            }
        }

        let mut b = DVector::zeros(n);
        if n > 0 {
            b[0] = 1.0;
        }

        // Feed-through: the ratio of leading coefficients when degrees
        // match, else zero.
        let d = if m == n { b_coeffs[0] } else { 0.0 };

        // State x_{k+1} carries s^(n-1-k)·U/D, so c_k is the coefficient
        // of s^(n-1-k) in N - d·D.
        let c = RowDVector::from_fn(n, |_, k| nb[k + 1] - d * a_coeffs[k + 1]);

        Ok(Self { a, b, c, d })
    }
}
