//! routhier CLI: analyze transfer functions from the command line.

mod library;
mod matlab;
mod output;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use routhier_core::Polynomial;
use routhier_solver::{SimulationParams, analyze_with, routh};

use library::{FunctionLibrary, SavedFunction};
use matlab::MatlabSections;
use output::PrintSections;

#[derive(Parser)]
#[command(name = "routhier")]
#[command(about = "Stability analysis of LTI transfer functions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transfer function given as coefficient lists
    Analyze {
        /// Numerator coefficients, comma-separated, highest degree first
        #[arg(long)]
        num: Option<String>,

        /// Denominator coefficients, comma-separated, highest degree first
        #[arg(long)]
        den: Option<String>,

        /// Load coefficients from a saved function instead of --num/--den
        #[arg(long, conflicts_with_all = ["num", "den"])]
        load: Option<String>,

        /// Total simulated time
        #[arg(long, default_value = "10.0")]
        horizon: f64,

        /// Integration step size
        #[arg(long, default_value = "0.01")]
        step: f64,

        /// Also run the Routh-Hurwitz test on the denominator
        #[arg(long)]
        routh: bool,

        /// Skip the step response table
        #[arg(long)]
        no_step: bool,

        /// Skip the impulse response table
        #[arg(long)]
        no_impulse: bool,

        /// Skip the Bode/Nyquist tables
        #[arg(long)]
        no_frequency: bool,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Library file for --load
        #[arg(long, default_value = "routhier-library.json")]
        library: PathBuf,
    },

    /// Generate a MATLAB script reproducing the analysis
    Export {
        /// Numerator coefficients, comma-separated, highest degree first
        #[arg(long)]
        num: String,

        /// Denominator coefficients, comma-separated, highest degree first
        #[arg(long)]
        den: String,

        /// Output file path
        #[arg(short, long, default_value = "transfer_function_analysis.m")]
        output: PathBuf,

        /// Omit the Bode plot
        #[arg(long)]
        no_bode: bool,

        /// Omit the Nyquist plot
        #[arg(long)]
        no_nyquist: bool,

        /// Omit the step response plot
        #[arg(long)]
        no_step: bool,

        /// Omit the impulse response plot
        #[arg(long)]
        no_impulse: bool,
    },

    /// Save a transfer function under a name
    Save {
        name: String,

        #[arg(long)]
        num: String,

        #[arg(long)]
        den: String,

        #[arg(long, default_value = "routhier-library.json")]
        library: PathBuf,
    },

    /// List saved transfer functions
    List {
        #[arg(long, default_value = "routhier-library.json")]
        library: PathBuf,
    },

    /// Delete a saved transfer function
    Delete {
        name: String,

        #[arg(long, default_value = "routhier-library.json")]
        library: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            num,
            den,
            load,
            horizon,
            step,
            routh,
            no_step,
            no_impulse,
            no_frequency,
            json,
            library,
        } => {
            let (num_text, den_text) = match load {
                Some(name) => {
                    let lib = FunctionLibrary::open(&library)?;
                    let saved = lib.load(&name)?;
                    (saved.numerator.clone(), saved.denominator.clone())
                }
                None => match (num, den) {
                    (Some(n), Some(d)) => (n, d),
                    _ => bail!("provide --num and --den, or --load NAME"),
                },
            };
            cmd_analyze(
                &num_text,
                &den_text,
                SimulationParams { horizon, step },
                routh,
                PrintSections {
                    step: !no_step,
                    impulse: !no_impulse,
                    frequency: !no_frequency,
                },
                json,
            )
        }
        Commands::Export {
            num,
            den,
            output,
            no_bode,
            no_nyquist,
            no_step,
            no_impulse,
        } => cmd_export(
            &num,
            &den,
            &output,
            MatlabSections {
                bode: !no_bode,
                nyquist: !no_nyquist,
                step: !no_step,
                impulse: !no_impulse,
            },
        ),
        Commands::Save {
            name,
            num,
            den,
            library,
        } => cmd_save(&name, &num, &den, &library),
        Commands::List { library } => cmd_list(&library),
        Commands::Delete { name, library } => {
            let mut lib = FunctionLibrary::open(&library)?;
            lib.delete(&name)?;
            println!("Deleted '{name}'.");
            Ok(())
        }
    }
}

/// Parse a comma-separated coefficient list, highest degree first.
fn parse_coeffs(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(|entry| {
            let trimmed = entry.trim();
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .with_context(|| format!("invalid coefficient '{trimmed}'"))
        })
        .collect()
}

fn cmd_analyze(
    num_text: &str,
    den_text: &str,
    params: SimulationParams,
    run_routh: bool,
    sections: PrintSections,
    json: bool,
) -> Result<()> {
    let num = parse_coeffs(num_text).context("numerator")?;
    let den = parse_coeffs(den_text).context("denominator")?;

    let result = analyze_with(&num, &den, &params).context("analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::print_analysis(&num, &den, &result, sections);

    if run_routh {
        let denominator = Polynomial::new(&den)?;
        match routh::analyze(&denominator) {
            Ok(analysis) => output::print_routh(&analysis),
            Err(e) => println!("Routh-Hurwitz test could not complete: {e}"),
        }
    }

    Ok(())
}

fn cmd_export(num_text: &str, den_text: &str, path: &PathBuf, sections: MatlabSections) -> Result<()> {
    let num = parse_coeffs(num_text).context("numerator")?;
    let den = parse_coeffs(den_text).context("denominator")?;

    let script = matlab::matlab_script(&num, &den, sections);
    fs::write(path, script).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_save(name: &str, num_text: &str, den_text: &str, library: &PathBuf) -> Result<()> {
    // Validate before saving so the library never holds unparseable input.
    parse_coeffs(num_text).context("numerator")?;
    parse_coeffs(den_text).context("denominator")?;

    let mut lib = FunctionLibrary::open(library)?;
    lib.save(
        name,
        SavedFunction {
            numerator: num_text.to_string(),
            denominator: den_text.to_string(),
        },
    )?;
    println!("Saved '{name}'.");
    Ok(())
}

fn cmd_list(library: &PathBuf) -> Result<()> {
    let lib = FunctionLibrary::open(library)?;
    if lib.is_empty() {
        println!("No saved functions.");
        return Ok(());
    }
    for (name, saved) in lib.iter() {
        let display = match (parse_coeffs(&saved.numerator), parse_coeffs(&saved.denominator)) {
            (Ok(num), Ok(den)) => format!(
                "({}) / ({})",
                output::format_polynomial(&num),
                output::format_polynomial(&den)
            ),
            _ => format!("{} / {}", saved.numerator, saved.denominator),
        };
        println!("{name}: H(s) = {display}");
    }
    Ok(())
}
