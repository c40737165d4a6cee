//! Command implementations.

pub mod generate;
pub mod inspect;
pub mod validate;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use spectone_spec::{parse_spectrum_text, validate_spectrum_text, Peak, ValidationResult};

/// Loads spectrum peaks from a file path or inline text.
///
/// Exactly one source must be provided; clap enforces that in the
/// argument definitions.
pub(crate) fn load_spectrum(input: Option<&str>, text: Option<&str>) -> anyhow::Result<Vec<Peak>> {
    let text = match (input, text) {
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read spectrum file '{}'", path))?,
        (None, Some(inline)) => inline.to_string(),
        _ => anyhow::bail!("provide exactly one of --input or --text"),
    };

    let length_check = validate_spectrum_text(&text);
    if !length_check.is_ok() {
        report_validation_errors(&length_check);
        anyhow::bail!("spectrum text failed validation");
    }

    let peaks = parse_spectrum_text(&text)?;
    Ok(peaks)
}

/// Prints every accumulated validation error to stderr.
pub(crate) fn report_validation_errors(result: &ValidationResult) {
    for error in &result.errors {
        eprintln!("{}: {}", "invalid".red(), error);
    }
}

/// Maps a validation outcome to an exit code, reporting errors.
pub(crate) fn exit_on_validation(result: &ValidationResult) -> Option<ExitCode> {
    if result.is_ok() {
        None
    } else {
        report_validation_errors(result);
        Some(ExitCode::FAILURE)
    }
}
