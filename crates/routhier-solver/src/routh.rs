//! Routh-Hurwitz stability test.
//!
//! Derives a stability verdict from denominator coefficients alone,
//! without computing roots. The zero-pivot special cases (a leading zero
//! or a full row of zeros) are not resolved via the auxiliary-polynomial
//! substitution; they surface as [`Error::DegenerateRouthRow`].

use serde::Serialize;

use routhier_core::Polynomial;

use crate::error::{Error, Result};

/// The triangular Routh array.
///
/// Row 0 holds the even-position coefficients, row 1 the odd-position
/// coefficients; each further row is derived from the two rows above it
/// until the newest row has a single entry. Built once per analysis and
/// discarded after the verdict is read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouthArray {
    pub rows: Vec<Vec<f64>>,
}

/// Outcome of the Routh-Hurwitz test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouthAnalysis {
    pub array: RouthArray,
    /// True iff every array entry shares one strict sign.
    ///
    /// A valid Routh table for a stable system has no sign changes in its
    /// first column; checking every entry is a conservative superset of
    /// that criterion.
    pub stable: bool,
}

/// Run the Routh-Hurwitz test on a denominator polynomial.
pub fn analyze(denominator: &Polynomial) -> Result<RouthAnalysis> {
    let coeffs = denominator.coeffs();

    let even: Vec<f64> = coeffs.iter().copied().step_by(2).collect();
    let odd: Vec<f64> = coeffs.iter().copied().skip(1).step_by(2).collect();

    let mut rows = vec![even];
    if !odd.is_empty() {
        rows.push(odd);
    }

    while rows.last().map(|r| r.len()).unwrap_or(0) > 1 {
        let above = &rows[rows.len() - 2];
        let below = &rows[rows.len() - 1];
        let pivot = below[0];
        if pivot == 0.0 {
            return Err(Error::DegenerateRouthRow { row: rows.len() });
        }

        // Entries past a row's end read as zero, as in the hand-built table.
        let width = above.len() - 1;
        let next: Vec<f64> = (0..width)
            .map(|i| {
                let a = above.get(i + 1).copied().unwrap_or(0.0);
                let b = below.get(i + 1).copied().unwrap_or(0.0);
                (pivot * a - above[0] * b) / pivot
            })
            .collect();
        rows.push(next);
    }

    let stable = all_same_strict_sign(&rows);

    Ok(RouthAnalysis {
        array: RouthArray { rows },
        stable,
    })
}

fn all_same_strict_sign(rows: &[Vec<f64>]) -> bool {
    let mut entries = rows.iter().flatten();
    let Some(&first) = entries.next() else {
        return false;
    };
    if first == 0.0 {
        return false;
    }
    entries.all(|&e| e != 0.0 && e.is_sign_positive() == first.is_sign_positive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_even_and_odd_coefficients() {
        // s⁴ + 2s³ + 3s² + 4s + 5
        let p = Polynomial::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let result = analyze(&p).unwrap();
        assert_eq!(result.array.rows[0], vec![1.0, 3.0, 5.0]);
        assert_eq!(result.array.rows[1], vec![2.0, 4.0]);
    }

    #[test]
    fn stable_second_order() {
        // s² + 3s + 2, poles at -1 and -2
        let p = Polynomial::new(&[1.0, 3.0, 2.0]).unwrap();
        assert!(analyze(&p).unwrap().stable);
    }

    #[test]
    fn stable_third_order() {
        // (s+1)³ = s³ + 3s² + 3s + 1
        let p = Polynomial::new(&[1.0, 3.0, 3.0, 1.0]).unwrap();
        assert!(analyze(&p).unwrap().stable);
    }

    #[test]
    fn unstable_sign_flip() {
        // s² - 3s + 2, poles at 1 and 2
        let p = Polynomial::new(&[1.0, -3.0, 2.0]).unwrap();
        assert!(!analyze(&p).unwrap().stable);
    }

    #[test]
    fn unstable_with_all_positive_first_rows() {
        // s³ + s² + 2s + 8 has a RHP conjugate pair despite positive
        // coefficients; the derived row catches it.
        let p = Polynomial::new(&[1.0, 1.0, 2.0, 8.0]).unwrap();
        assert!(!analyze(&p).unwrap().stable);
    }

    #[test]
    fn zero_pivot_is_degenerate() {
        // s³ + s: the odd row is [0, 0]
        let p = Polynomial::new(&[1.0, 0.0, 1.0, 0.0]).unwrap();
        assert!(matches!(
            analyze(&p),
            Err(Error::DegenerateRouthRow { .. })
        ));
    }

    #[test]
    fn first_order_and_constant() {
        assert!(analyze(&Polynomial::new(&[1.0, 2.0]).unwrap()).unwrap().stable);
        assert!(!analyze(&Polynomial::new(&[1.0, -2.0]).unwrap()).unwrap().stable);
        assert!(analyze(&Polynomial::new(&[3.0]).unwrap()).unwrap().stable);
    }

    #[test]
    fn final_row_has_single_entry() {
        let p = Polynomial::new(&[1.0, 6.0, 11.0, 6.0]).unwrap();
        let result = analyze(&p).unwrap();
        assert_eq!(result.array.rows.last().unwrap().len(), 1);
        assert!(result.stable);
    }
}
