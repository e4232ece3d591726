//! The analysis orchestrator: one entry point, one aggregate result.

use num_complex::Complex;
use serde::Serialize;

use routhier_core::TransferFunction;

use crate::classify::{Classification, Stability, classify};
use crate::error::Result;
use crate::frequency::{BodeResponse, NyquistResponse, sample_bode, sample_nyquist};
use crate::roots::find_roots;
use crate::state_space::StateSpaceModel;
use crate::transient::{SimulationParams, TimeSeries, impulse_response, step_response};

/// Everything one analysis run produces.
///
/// Pure data: root sets, verdicts, and sampled responses. Human-readable
/// explanations are generated separately by [`crate::report`]. Built once
/// per call, owned by the caller, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub stability: Stability,
    pub non_minimum_phase: bool,
    /// Roots of the numerator.
    pub zeros: Vec<Complex<f64>>,
    /// Roots of the denominator.
    pub poles: Vec<Complex<f64>>,
    pub step_response: TimeSeries,
    pub impulse_response: TimeSeries,
    pub nyquist: NyquistResponse,
    pub bode: BodeResponse,
}

/// Run a full analysis with default simulation parameters.
///
/// Coefficients are ordered highest degree first. Fails before any numeric
/// work if either list is empty or all-zero; any later failure aborts the
/// whole analysis with no partial result.
pub fn analyze(numerator: &[f64], denominator: &[f64]) -> Result<AnalysisResult> {
    analyze_with(numerator, denominator, &SimulationParams::default())
}

/// Run a full analysis with explicit simulation parameters.
pub fn analyze_with(
    numerator: &[f64],
    denominator: &[f64],
    params: &SimulationParams,
) -> Result<AnalysisResult> {
    let tf = TransferFunction::new(numerator, denominator)?;

    let zeros = find_roots(tf.numerator())?;
    let poles = find_roots(tf.denominator())?;

    let model = StateSpaceModel::build(&tf)?;
    let step = step_response(&model, params)?;
    let impulse = impulse_response(&model, params)?;

    let nyquist = sample_nyquist(&tf);
    let bode = sample_bode(&tf);

    let Classification {
        stability,
        non_minimum_phase,
    } = classify(&poles, &zeros);

    Ok(AnalysisResult {
        stability,
        non_minimum_phase,
        zeros,
        poles,
        step_response: step,
        impulse_response: impulse,
        nyquist,
        bode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use routhier_core::Error as CoreError;

    #[test]
    fn rejects_all_zero_numerator() {
        let result = analyze(&[0.0], &[1.0, 1.0]);
        assert!(matches!(
            result,
            Err(crate::Error::Core(CoreError::EmptyOrZeroPolynomial))
        ));
    }

    #[test]
    fn rejects_all_zero_denominator() {
        let result = analyze(&[1.0], &[0.0, 0.0, 0.0]);
        assert!(matches!(
            result,
            Err(crate::Error::Core(CoreError::EmptyOrZeroPolynomial))
        ));
    }

    #[test]
    fn aggregate_has_all_sections() {
        let result = analyze(&[1.0], &[1.0, 3.0, 2.0]).unwrap();
        assert_eq!(result.poles.len(), 2);
        assert!(result.zeros.is_empty());
        assert_eq!(result.step_response.time.len(), result.step_response.response.len());
        assert_eq!(result.nyquist.points.len(), crate::frequency::SAMPLE_COUNT);
        assert_eq!(result.bode.frequencies.len(), crate::frequency::SAMPLE_COUNT);
    }

    #[test]
    fn custom_params_change_the_grid() {
        let params = SimulationParams {
            horizon: 1.0,
            step: 0.1,
        };
        let result = analyze_with(&[1.0], &[1.0, 1.0], &params).unwrap();
        assert_eq!(result.step_response.time.len(), 11);
    }
}
