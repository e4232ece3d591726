//! Stability and phase classification from root locations.

use num_complex::Complex;
use serde::Serialize;

/// Two-valued stability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stability {
    Stable,
    Unstable,
}

/// Combined stability and phase classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub stability: Stability,
    /// True unless the system is stable with all zeros in the open left
    /// half plane.
    pub non_minimum_phase: bool,
}

/// Classify a system from its pole and zero locations.
///
/// Stable iff every pole has strictly negative real part; minimum phase
/// iff stable and every zero does too. Pure over already-computed roots.
pub fn classify(poles: &[Complex<f64>], zeros: &[Complex<f64>]) -> Classification {
    let stable = poles.iter().all(|p| p.re < 0.0);
    let minimum_phase = stable && zeros.iter().all(|z| z.re < 0.0);
    Classification {
        stability: if stable {
            Stability::Stable
        } else {
            Stability::Unstable
        },
        non_minimum_phase: !minimum_phase,
    }
}
