//! MATLAB script generation for external verification.

/// Which analysis sections the generated script should plot.
#[derive(Debug, Clone, Copy)]
pub struct MatlabSections {
    pub bode: bool,
    pub nyquist: bool,
    pub step: bool,
    pub impulse: bool,
}

/// Render a `.m` script that rebuilds the transfer function with the
/// Control System Toolbox and plots the selected analyses.
pub fn matlab_script(numerator: &[f64], denominator: &[f64], sections: MatlabSections) -> String {
    let join = |coeffs: &[f64]| {
        coeffs
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut script = format!(
        "% MATLAB Script for Transfer Function Analysis\n\
         \n\
         % Numerator and Denominator of the Transfer Function\n\
         num = [{}];\n\
         den = [{}];\n\
         \n\
         % Create Transfer Function\n\
         sys = tf(num, den);\n",
        join(numerator),
        join(denominator)
    );

    if sections.bode {
        script.push_str("\n% Bode Plot\nfigure;\nbode(sys);\n");
    }
    if sections.nyquist {
        script.push_str("\n% Nyquist Plot\nfigure;\nnyquist(sys);\n");
    }
    if sections.step {
        script.push_str("\n% Step Response\nfigure;\nstep(sys);\n");
    }
    if sections.impulse {
        script.push_str("\n% Impulse Response\nfigure;\nimpulse(sys);\n");
    }

    script
}
