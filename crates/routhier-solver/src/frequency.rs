//! Frequency-response sampling along the imaginary axis.
//!
//! Both samplers evaluate the shared `Polynomial::eval` routine at
//! `s = jω` and are independent across sample points, so the sweeps run on
//! the rayon thread pool. The sequential RK4 simulation in
//! [`crate::transient`] is never parallelized.

use std::f64::consts::TAU;

use num_complex::Complex;
use rayon::prelude::*;
use serde::Serialize;

use routhier_core::TransferFunction;

/// Number of sample points per sweep.
pub const SAMPLE_COUNT: usize = 100;

/// Bode sweep range: 10^BODE_DECADE_MIN .. 10^BODE_DECADE_MAX rad/s.
pub const BODE_DECADE_MIN: f64 = -2.0;
pub const BODE_DECADE_MAX: f64 = 2.0;

/// One point of the Nyquist curve in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NyquistPoint {
    pub real: f64,
    pub imag: f64,
}

/// Nyquist sweep result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NyquistResponse {
    /// `N(jω)/D(jω)` traced over the sweep.
    pub points: Vec<NyquistPoint>,
    /// How many sampled points have negative real part.
    ///
    /// A coarse proxy for encirclements of the critical point, not a
    /// winding-number computation. Kept under this name so callers cannot
    /// mistake it for a rigorous encirclement count.
    pub negative_real_samples: usize,
}

/// Bode sweep result: parallel frequency, magnitude, and phase sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodeResponse {
    /// Sample frequencies (rad/s), logarithmically spaced.
    pub frequencies: Vec<f64>,
    /// `20·log10(|N(jω)| / |D(jω)|)`.
    pub magnitude_db: Vec<f64>,
    /// `arg N(jω) − arg D(jω)` in degrees.
    pub phase_deg: Vec<f64>,
}

/// Sample the Nyquist curve over 100 uniform frequencies in `[0, 2π)`.
pub fn sample_nyquist(tf: &TransferFunction) -> NyquistResponse {
    let points: Vec<NyquistPoint> = (0..SAMPLE_COUNT)
        .into_par_iter()
        .map(|i| {
            let omega = TAU * (i as f64) / (SAMPLE_COUNT as f64);
            let h = tf.eval(Complex::new(0.0, omega));
            if !h.re.is_finite() || !h.im.is_finite() {
                log::warn!("Nyquist sample at ω = {omega} hit a pole on the imaginary axis");
            }
            NyquistPoint {
                real: h.re,
                imag: h.im,
            }
        })
        .collect();

    let negative_real_samples = points.iter().filter(|p| p.real < 0.0).count();

    NyquistResponse {
        points,
        negative_real_samples,
    }
}

/// Sample magnitude and phase over 100 log-spaced frequencies spanning
/// the fixed decade range.
pub fn sample_bode(tf: &TransferFunction) -> BodeResponse {
    let frequencies: Vec<f64> = (0..SAMPLE_COUNT)
        .map(|i| {
            let t = (i as f64) / ((SAMPLE_COUNT - 1) as f64);
            10f64.powf(BODE_DECADE_MIN + (BODE_DECADE_MAX - BODE_DECADE_MIN) * t)
        })
        .collect();

    let samples: Vec<(f64, f64)> = frequencies
        .par_iter()
        .map(|&omega| {
            let s = Complex::new(0.0, omega);
            let num = tf.numerator().eval(s);
            let den = tf.denominator().eval(s);
            let magnitude_db = 20.0 * (num.norm() / den.norm()).log10();
            let phase_deg = (num.arg() - den.arg()).to_degrees();
            (magnitude_db, phase_deg)
        })
        .collect();

    let (magnitude_db, phase_deg) = samples.into_iter().unzip();

    BodeResponse {
        frequencies,
        magnitude_db,
        phase_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nyquist_has_expected_sample_count() {
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let response = sample_nyquist(&tf);
        assert_eq!(response.points.len(), SAMPLE_COUNT);
    }

    #[test]
    fn nyquist_starts_at_dc_gain() {
        // 2/(s+1) has DC gain 2
        let tf = TransferFunction::new(&[2.0], &[1.0, 1.0]).unwrap();
        let response = sample_nyquist(&tf);
        assert!((response.points[0].real - 2.0).abs() < 1e-12);
        assert!(response.points[0].imag.abs() < 1e-12);
    }

    #[test]
    fn negative_real_tally_is_a_sample_count_not_a_winding_number() {
        // (s-1)/(s+1) maps low frequencies into the left half plane; the
        // tally counts those samples, nothing more.
        let tf = TransferFunction::new(&[1.0, -1.0], &[1.0, 1.0]).unwrap();
        let response = sample_nyquist(&tf);
        assert!(response.negative_real_samples > 0);
        assert!(response.negative_real_samples <= SAMPLE_COUNT);
        assert_eq!(
            response.negative_real_samples,
            response.points.iter().filter(|p| p.real < 0.0).count()
        );
    }

    #[test]
    fn bode_sweep_is_log_spaced_over_the_decade_range() {
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let response = sample_bode(&tf);
        assert_eq!(response.frequencies.len(), SAMPLE_COUNT);
        assert!((response.frequencies[0] - 1e-2).abs() < 1e-12);
        assert!((response.frequencies[SAMPLE_COUNT - 1] - 1e2).abs() < 1e-10);
        // Uniform ratio between consecutive samples
        let r0 = response.frequencies[1] / response.frequencies[0];
        let r1 = response.frequencies[51] / response.frequencies[50];
        assert!((r0 - r1).abs() < 1e-9);
    }

    #[test]
    fn first_order_magnitude_and_phase() {
        // 1/(s+1): at ω = 1, |H| = -3.01 dB and phase = -45°
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let s = Complex::new(0.0, 1.0);
        let num = tf.numerator().eval(s);
        let den = tf.denominator().eval(s);
        let mag_db = 20.0 * (num.norm() / den.norm()).log10();
        let phase = (num.arg() - den.arg()).to_degrees();
        assert!((mag_db + 3.0103).abs() < 1e-3);
        assert!((phase + 45.0).abs() < 1e-9);
    }

    #[test]
    fn static_gain_has_flat_response() {
        let tf = TransferFunction::new(&[10.0], &[1.0]).unwrap();
        let response = sample_bode(&tf);
        for (mag, phase) in response.magnitude_db.iter().zip(&response.phase_deg) {
            assert!((mag - 20.0).abs() < 1e-9);
            assert!(phase.abs() < 1e-9);
        }
    }
}
