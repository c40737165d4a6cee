//! `spectone validate` - check a request and spectrum without synthesizing.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use spectone_spec::{
    parse_spectrum_text, validate_request, validate_spectrum_text, SynthesisRequest,
};

use super::report_validation_errors;

/// Runs the validate command.
///
/// All bound violations are accumulated and reported together; the parse
/// step only runs when the text passes its length check.
pub fn run(
    input: Option<&str>,
    text: Option<&str>,
    request: &SynthesisRequest,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let spectrum_text = match (input, text) {
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read spectrum file '{}'", path))?,
        (None, Some(inline)) => inline.to_string(),
        _ => anyhow::bail!("provide exactly one of --input or --text"),
    };

    let mut result = validate_request(request);
    for error in validate_spectrum_text(&spectrum_text).errors {
        result.add_error(error);
    }

    let mut parse_error = None;
    let mut num_peaks = None;
    if result.is_ok() {
        match parse_spectrum_text(&spectrum_text) {
            Ok(peaks) => num_peaks = Some(peaks.len()),
            Err(e) => parse_error = Some(e.to_string()),
        }
    }

    let ok = result.is_ok() && parse_error.is_none();

    if json {
        let errors: Vec<serde_json::Value> = result
            .errors
            .iter()
            .map(|e| {
                serde_json::json!({
                    "code": e.code.code(),
                    "path": e.path,
                    "message": e.message,
                })
            })
            .collect();
        let envelope = serde_json::json!({
            "ok": ok,
            "errors": errors,
            "parse_error": parse_error,
            "num_peaks": num_peaks,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else if ok {
        println!(
            "{} ({} peaks)",
            "valid".green(),
            num_peaks.unwrap_or_default()
        );
    } else {
        report_validation_errors(&result);
        if let Some(message) = &parse_error {
            eprintln!("{}: {}", "invalid".red(), message);
        }
    }

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
