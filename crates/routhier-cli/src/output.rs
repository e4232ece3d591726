//! Tabular terminal output for analysis results.

use num_complex::Complex;
use routhier_solver::{AnalysisResult, RouthAnalysis, TimeSeries, report};

/// Sections of the result to print.
#[derive(Debug, Clone, Copy)]
pub struct PrintSections {
    pub step: bool,
    pub impulse: bool,
    pub frequency: bool,
}

/// Format a coefficient list as a readable polynomial in `s`.
///
/// `[5.0, 2.0, 3.0]` becomes `5s^2 + 2s + 3`.
pub fn format_polynomial(coeffs: &[f64]) -> String {
    let degree = coeffs.len() - 1;
    let mut out = String::new();
    for (i, &coeff) in coeffs.iter().enumerate() {
        if coeff == 0.0 && coeffs.len() > 1 {
            continue;
        }
        let sign = if out.is_empty() {
            if coeff < 0.0 { "-" } else { "" }
        } else if coeff < 0.0 {
            " - "
        } else {
            " + "
        };
        let power = degree - i;
        let magnitude = coeff.abs();
        let coeff_text = if magnitude == 1.0 && power > 0 {
            String::new()
        } else {
            trim_float(magnitude)
        };
        let var = match power {
            0 => String::new(),
            1 => "s".to_string(),
            p => format!("s^{p}"),
        };
        out.push_str(sign);
        out.push_str(&coeff_text);
        out.push_str(&var);
    }
    if out.is_empty() { "0".to_string() } else { out }
}

fn trim_float(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Print the full analysis report.
pub fn print_analysis(
    numerator: &[f64],
    denominator: &[f64],
    result: &AnalysisResult,
    sections: PrintSections,
) {
    println!("Transfer Function Analysis");
    println!("==========================================");
    println!();
    println!("H(s) = ({}) / ({})", format_polynomial(numerator), format_polynomial(denominator));
    println!();

    for line in report::explanation(result) {
        println!("{line}");
    }
    println!();

    print_roots("Poles", &result.poles);
    print_roots("Zeros", &result.zeros);

    if sections.step {
        print_series("Step Response", &result.step_response);
    }
    if sections.impulse {
        print_series("Impulse Response", &result.impulse_response);
    }
    if sections.frequency {
        print_frequency(result);
    }
}

fn print_roots(label: &str, roots: &[Complex<f64>]) {
    println!("{label}:");
    if roots.is_empty() {
        println!("  (none)");
    } else {
        println!("{:>14}{:>14}", "Real", "Imag");
        println!("{}", "-".repeat(28));
        for root in roots {
            println!("{:>14.6}{:>14.6}", root.re, root.im);
        }
    }
    println!();
}

fn print_series(label: &str, series: &TimeSeries) {
    println!("{label}:");
    println!("{:>14}{:>14}", "Time", "Response");
    println!("{}", "-".repeat(28));
    // Roughly twenty rows keeps the table readable; JSON output carries
    // the full series.
    let stride = (series.time.len() / 20).max(1);
    for (t, y) in series
        .time
        .iter()
        .zip(&series.response)
        .step_by(stride)
    {
        println!("{:>14.4}{:>14.6}", t, y);
    }
    println!();
}

fn print_frequency(result: &AnalysisResult) {
    println!("Bode Samples:");
    println!("{:>14}{:>14}{:>14}", "ω (rad/s)", "Mag (dB)", "Phase (°)");
    println!("{}", "-".repeat(42));
    let stride = (result.bode.frequencies.len() / 20).max(1);
    for i in (0..result.bode.frequencies.len()).step_by(stride) {
        println!(
            "{:>14.6}{:>14.4}{:>14.4}",
            result.bode.frequencies[i], result.bode.magnitude_db[i], result.bode.phase_deg[i]
        );
    }
    println!();
    println!(
        "Nyquist: {} samples, {} with negative real part (coarse encirclement proxy)",
        result.nyquist.points.len(),
        result.nyquist.negative_real_samples
    );
    println!();
}

/// Print the Routh array and its verdict.
pub fn print_routh(analysis: &RouthAnalysis) {
    println!("Routh Array:");
    for row in &analysis.array.rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>12.6}")).collect();
        println!("  {}", cells.join(" "));
    }
    println!();
    println!(
        "Routh-Hurwitz verdict: {}",
        if analysis.stable { "stable" } else { "unstable" }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_polynomial() {
        assert_eq!(format_polynomial(&[5.0, 2.0, 3.0]), "5s^2 + 2s + 3");
    }

    #[test]
    fn suppresses_unit_coefficients_and_zero_terms() {
        assert_eq!(format_polynomial(&[1.0, 0.0, -2.0]), "s^2 - 2");
        assert_eq!(format_polynomial(&[1.0, 1.0]), "s + 1");
    }

    #[test]
    fn handles_negative_leading_coefficient() {
        assert_eq!(format_polynomial(&[-1.0, 2.0]), "-s + 2");
    }

    #[test]
    fn constant_and_zero() {
        assert_eq!(format_polynomial(&[7.0]), "7");
        assert_eq!(format_polynomial(&[0.0]), "0");
    }

    #[test]
    fn fractional_coefficients_keep_their_digits() {
        assert_eq!(format_polynomial(&[0.5, 1.5]), "0.5s + 1.5");
    }
}
