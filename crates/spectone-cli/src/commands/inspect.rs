//! `spectone inspect` - show per-peak transformation records.
//!
//! Runs the full synthesis so the records reflect exactly what
//! `generate` would produce, then discards the audio.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use spectone_spec::{validate_request, SynthesisRequest};
use spectone_synth::synthesize;

use super::{exit_on_validation, load_spectrum};

/// Runs the inspect command.
pub fn run(
    input: Option<&str>,
    text: Option<&str>,
    request: &SynthesisRequest,
    records_path: Option<&str>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    if let Some(code) = exit_on_validation(&validate_request(request)) {
        return Ok(code);
    }

    let peaks = load_spectrum(input, text)?;
    let result = synthesize(&peaks, request)?;

    if let Some(path) = records_path {
        let records_json = serde_json::to_string_pretty(&result.records)?;
        fs::write(path, records_json)
            .with_context(|| format!("failed to write records file '{}'", path))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
    } else {
        println!(
            "{}",
            format!(
                "{:>12}  {:>12}  {:>10}  {:>9}  {:>10}",
                "m/z", "freq (Hz)", "intensity", "amp", "dB"
            )
            .bold()
        );
        for record in &result.records {
            let db = if record.amplitude_db.is_finite() {
                format!("{:>10.2}", record.amplitude_db)
            } else {
                format!("{:>10}", "-inf")
            };
            println!(
                "{:>12.4}  {:>12.3}  {:>10.3}  {:>9.4}  {}",
                record.mz, record.frequency, record.intensity, record.amplitude_linear, db
            );
        }
        println!("pcm hash: {}", result.wav.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}
