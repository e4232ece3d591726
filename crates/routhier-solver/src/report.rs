//! Plain-text explanations for analysis results.
//!
//! Kept out of the numeric core: [`crate::AnalysisResult`] carries data
//! only, and this module turns it into display strings on demand.

use num_complex::Complex;

use crate::analysis::AnalysisResult;
use crate::classify::Stability;

/// One-sentence verdict suitable for a summary line.
pub fn summary(result: &AnalysisResult) -> String {
    let stability = match result.stability {
        Stability::Stable => "stable",
        Stability::Unstable => "unstable",
    };
    let phase = if result.non_minimum_phase {
        "non-minimum phase"
    } else {
        "minimum phase"
    };
    format!(
        "The system is {stability}. Pole-zero analysis indicates {phase} behavior."
    )
}

/// Multi-line explanation: verdict plus pole and zero listings.
pub fn explanation(result: &AnalysisResult) -> Vec<String> {
    let mut lines = vec![summary(result)];

    if result.poles.is_empty() {
        lines.push("Poles: none (constant denominator).".to_string());
    } else {
        lines.push(format!("Poles: {}.", format_roots(&result.poles)));
    }
    if result.zeros.is_empty() {
        lines.push("Zeros: none.".to_string());
    } else {
        lines.push(format!("Zeros: {}.", format_roots(&result.zeros)));
    }

    match result.stability {
        Stability::Stable => lines.push(
            "All poles lie in the open left half plane, so bounded inputs \
             produce bounded outputs."
                .to_string(),
        ),
        Stability::Unstable => lines.push(
            "At least one pole lies on or right of the imaginary axis, so \
             the response grows without bound."
                .to_string(),
        ),
    }

    lines
}

fn format_roots(roots: &[Complex<f64>]) -> String {
    roots
        .iter()
        .map(|r| format_root(*r))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_root(root: Complex<f64>) -> String {
    if root.im == 0.0 {
        format!("{:.4}", root.re)
    } else if root.im > 0.0 {
        format!("{:.4} + {:.4}j", root.re, root.im)
    } else {
        format!("{:.4} - {:.4}j", root.re, -root.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn stable_minimum_phase_summary() {
        let result = analyze(&[1.0], &[1.0, 3.0, 2.0]).unwrap();
        let text = summary(&result);
        assert!(text.contains("stable"));
        assert!(text.contains("minimum phase"));
        assert!(!text.contains("non-minimum"));
    }

    #[test]
    fn unstable_summary() {
        let result = analyze(&[1.0], &[1.0, -1.0]).unwrap();
        assert!(summary(&result).contains("unstable"));
    }

    #[test]
    fn explanation_lists_roots() {
        let result = analyze(&[1.0, -1.0], &[1.0, 1.0]).unwrap();
        let lines = explanation(&result);
        assert!(lines.iter().any(|l| l.starts_with("Poles: ") && l.contains("-1.0000")));
        assert!(lines.iter().any(|l| l.starts_with("Zeros: ") && l.contains("1.0000")));
    }

    #[test]
    fn complex_roots_format_with_j() {
        assert_eq!(format_root(Complex::new(-1.0, 2.0)), "-1.0000 + 2.0000j");
        assert_eq!(format_root(Complex::new(-1.0, -2.0)), "-1.0000 - 2.0000j");
        assert_eq!(format_root(Complex::new(3.0, 0.0)), "3.0000");
    }
}
