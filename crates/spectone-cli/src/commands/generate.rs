//! `spectone generate` - synthesize a spectrum into a WAV file.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use spectone_spec::{validate_request, SynthesisRequest};
use spectone_synth::synthesize;

use super::{exit_on_validation, load_spectrum};

/// Runs the generate command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    input: Option<&str>,
    text: Option<&str>,
    request: &SynthesisRequest,
    out: &str,
    records_path: Option<&str>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    if let Some(code) = exit_on_validation(&validate_request(request)) {
        return Ok(code);
    }

    let peaks = load_spectrum(input, text)?;
    let result = synthesize(&peaks, request)?;

    fs::write(out, &result.wav.wav_data)
        .with_context(|| format!("failed to write WAV file '{}'", out))?;

    if let Some(path) = records_path {
        let records_json = serde_json::to_string_pretty(&result.records)?;
        fs::write(path, records_json)
            .with_context(|| format!("failed to write records file '{}'", path))?;
    }

    if json {
        let envelope = serde_json::json!({
            "ok": true,
            "wav_path": out,
            "records_path": records_path,
            "pcm_hash": result.wav.pcm_hash,
            "sample_rate": result.wav.sample_rate,
            "num_samples": result.wav.num_samples,
            "num_peaks": result.records.len(),
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!(
            "{} {} ({} peaks, {} samples at {} Hz)",
            "wrote".green(),
            out,
            result.records.len(),
            result.wav.num_samples,
            result.wav.sample_rate
        );
        println!("pcm hash: {}", result.wav.pcm_hash);
        if let Some(path) = records_path {
            println!("{} {}", "wrote".green(), path);
        }
    }

    Ok(ExitCode::SUCCESS)
}
