//! Spectone CLI - turn mass spectra into sound.
//!
//! This binary only parses arguments and dispatches; the command
//! implementations live in the `spectone_cli` library crate.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use spectone_cli::commands;
use spectone_spec::{FrequencyPolicy, PolicyKind, SynthesisRequest};

/// Spectone - mass-spectrum sonification
#[derive(Parser)]
#[command(name = "spectone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a spectrum into a WAV file
    Generate {
        #[command(flatten)]
        spectrum: SpectrumArgs,

        #[command(flatten)]
        request: RequestArgs,

        /// Output WAV file path
        #[arg(short, long, default_value = "spectrum.wav")]
        out: String,

        /// Also write per-peak transformation records as JSON
        #[arg(long)]
        records: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print per-peak transformation records without writing audio
    Inspect {
        #[command(flatten)]
        spectrum: SpectrumArgs,

        #[command(flatten)]
        request: RequestArgs,

        /// Write the records as JSON to this path
        #[arg(long)]
        records: Option<String>,

        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check a request and spectrum against the service bounds
    Validate {
        #[command(flatten)]
        spectrum: SpectrumArgs,

        #[command(flatten)]
        request: RequestArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Where the spectrum comes from. Exactly one source is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct SpectrumArgs {
    /// Path to a spectrum text file ("mz intensity" pairs)
    #[arg(short, long)]
    input: Option<String>,

    /// Inline spectrum text ("mz intensity" pairs)
    #[arg(short, long)]
    text: Option<String>,
}

/// Synthesis parameters shared by every subcommand.
#[derive(Args)]
struct RequestArgs {
    /// Frequency policy: linear, inverse, or modulo
    #[arg(short, long, default_value = "linear")]
    policy: String,

    /// Linear policy: Hz added to each m/z value
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    offset: f64,

    /// Inverse policy: numerator of the reciprocal mapping
    #[arg(long, default_value_t = 100_000.0, allow_negative_numbers = true)]
    scale: f64,

    /// Inverse policy: added to m/z before dividing
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    shift: f64,

    /// Modulo policy: m/z multiplier
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    factor: f64,

    /// Modulo policy: wrap-around divisor
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    modulus: f64,

    /// Modulo policy: Hz added after wrapping
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    base: f64,

    /// Clip duration in seconds
    #[arg(short, long, default_value_t = 5.0)]
    duration: f64,

    /// Sample rate in Hz
    #[arg(short = 'r', long, default_value_t = 44_100)]
    sample_rate: u32,
}

impl RequestArgs {
    /// Builds a synthesis request, rejecting unknown policy names.
    fn to_request(&self) -> anyhow::Result<SynthesisRequest> {
        let policy = match self.policy.parse::<PolicyKind>()? {
            PolicyKind::Linear => FrequencyPolicy::Linear {
                offset: self.offset,
            },
            PolicyKind::Inverse => FrequencyPolicy::Inverse {
                scale: self.scale,
                shift: self.shift,
            },
            PolicyKind::Modulo => FrequencyPolicy::Modulo {
                factor: self.factor,
                modulus: self.modulus,
                base: self.base,
            },
        };

        Ok(SynthesisRequest {
            policy,
            duration_seconds: self.duration,
            sample_rate: self.sample_rate,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spectrum,
            request,
            out,
            records,
            json,
        } => request.to_request().and_then(|request| {
            commands::generate::run(
                spectrum.input.as_deref(),
                spectrum.text.as_deref(),
                &request,
                &out,
                records.as_deref(),
                json,
            )
        }),
        Commands::Inspect {
            spectrum,
            request,
            records,
            json,
        } => request.to_request().and_then(|request| {
            commands::inspect::run(
                spectrum.input.as_deref(),
                spectrum.text.as_deref(),
                &request,
                records.as_deref(),
                json,
            )
        }),
        Commands::Validate {
            spectrum,
            request,
            json,
        } => request.to_request().and_then(|request| {
            commands::validate::run(
                spectrum.input.as_deref(),
                spectrum.text.as_deref(),
                &request,
                json,
            )
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_generate_defaults() {
        let cli = parse(&["spectone", "generate", "--text", "100 40 200 20"]);
        let Commands::Generate {
            spectrum,
            request,
            out,
            records,
            json,
        } = cli.command
        else {
            panic!("expected generate");
        };

        assert_eq!(spectrum.text.as_deref(), Some("100 40 200 20"));
        assert_eq!(spectrum.input, None);
        assert_eq!(out, "spectrum.wav");
        assert_eq!(records, None);
        assert!(!json);

        let request = request.to_request().unwrap();
        assert_eq!(
            request.policy,
            FrequencyPolicy::Linear { offset: 300.0 }
        );
        assert_eq!(request.duration_seconds, 5.0);
        assert_eq!(request.sample_rate, 44_100);
    }

    #[test]
    fn test_generate_inverse_policy_flags() {
        let cli = parse(&[
            "spectone", "generate", "--text", "100 40", "--policy", "inverse", "--scale",
            "50000", "--shift", "2.5", "--duration", "0.5", "--sample-rate", "22050",
        ]);
        let Commands::Generate { request, .. } = cli.command else {
            panic!("expected generate");
        };

        let request = request.to_request().unwrap();
        assert_eq!(
            request.policy,
            FrequencyPolicy::Inverse {
                scale: 50_000.0,
                shift: 2.5,
            }
        );
        assert_eq!(request.duration_seconds, 0.5);
        assert_eq!(request.sample_rate, 22_050);
    }

    #[test]
    fn test_inspect_modulo_policy_flags() {
        let cli = parse(&[
            "spectone", "inspect", "--text", "100 40", "--policy", "modulo", "--factor",
            "7", "--modulus", "450", "--base", "60",
        ]);
        let Commands::Inspect { request, .. } = cli.command else {
            panic!("expected inspect");
        };

        let request = request.to_request().unwrap();
        assert_eq!(
            request.policy,
            FrequencyPolicy::Modulo {
                factor: 7.0,
                modulus: 450.0,
                base: 60.0,
            }
        );
    }

    #[test]
    fn test_negative_offset_parses() {
        let cli = parse(&["spectone", "generate", "--text", "100 40", "--offset", "-50"]);
        let Commands::Generate { request, .. } = cli.command else {
            panic!("expected generate");
        };
        let request = request.to_request().unwrap();
        assert_eq!(request.policy, FrequencyPolicy::Linear { offset: -50.0 });
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let cli = parse(&["spectone", "validate", "--text", "100 40", "--policy", "cubic"]);
        let Commands::Validate { request, .. } = cli.command else {
            panic!("expected validate");
        };
        let err = request.to_request().unwrap_err();
        assert!(err.to_string().contains("cubic"));
    }

    #[test]
    fn test_spectrum_source_is_required() {
        assert!(Cli::try_parse_from(["spectone", "generate"]).is_err());
    }

    #[test]
    fn test_spectrum_sources_conflict() {
        let result = Cli::try_parse_from([
            "spectone", "generate", "--input", "a.txt", "--text", "100 40",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_subcommand_parses() {
        let cli = parse(&["spectone", "validate", "--input", "spectrum.txt", "--json"]);
        let Commands::Validate { spectrum, json, .. } = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(spectrum.input.as_deref(), Some("spectrum.txt"));
        assert!(json);
    }
}
