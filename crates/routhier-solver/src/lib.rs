//! Numerical stability analysis for LTI transfer functions.
//!
//! The engine is a set of pure functions over the immutable types in
//! `routhier-core`: polynomial root extraction, the Routh-Hurwitz test,
//! Nyquist/Bode frequency sampling, controllable-canonical state-space
//! construction, and fixed-step RK4 simulation for step and impulse
//! responses. [`analysis::analyze`] is the single entry point that runs
//! the full pipeline and returns one aggregate result.
//!
//! All failures are synchronous and deterministic; a failed analysis
//! yields no partial result.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod frequency;
pub mod report;
pub mod roots;
pub mod routh;
pub mod state_space;
pub mod transient;

pub use analysis::{AnalysisResult, analyze, analyze_with};
pub use classify::{Classification, Stability, classify};
pub use error::{Error, Result};
pub use frequency::{BodeResponse, NyquistPoint, NyquistResponse, sample_bode, sample_nyquist};
pub use roots::find_roots;
pub use routh::{RouthAnalysis, RouthArray};
pub use state_space::StateSpaceModel;
pub use transient::{SimulationParams, TimeSeries, simulate};
