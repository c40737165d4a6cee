//! Spectral peaks and freeform spectrum-text parsing.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// One observation in a mass spectrum: a mass-to-charge ratio and its
/// measured intensity.
///
/// Intensity is expected to be non-negative; values are taken as-is and
/// normalized against the spectrum maximum during synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Mass-to-charge ratio (m/z).
    pub mz: f64,
    /// Measured intensity (arbitrary units, >= 0).
    pub intensity: f64,
}

impl Peak {
    /// Creates a new peak.
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

/// Parses freeform spectrum text into an ordered peak list.
///
/// The format is whitespace-separated numbers, taken pairwise as
/// (mz, intensity). Newlines and runs of spaces or tabs are all treated
/// as separators, so both one-pair-per-line and flat layouts parse.
///
/// # Errors
/// Returns [`SpecError::MalformedSpectrumText`] when the text contains a
/// token that is not a number or an odd number of values.
pub fn parse_spectrum_text(text: &str) -> Result<Vec<Peak>, SpecError> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token
            .parse()
            .map_err(|_| SpecError::malformed(format!("invalid number: '{}'", token)))?;
        values.push(value);
    }

    if values.len() % 2 != 0 {
        return Err(SpecError::malformed(
            "spectrum data must have an even number of values (pairs of mz/intensity)",
        ));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Peak::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_one_pair_per_line() {
        let peaks = parse_spectrum_text("100.0 50.0\n200.5 75.0\n").unwrap();
        assert_eq!(
            peaks,
            vec![Peak::new(100.0, 50.0), Peak::new(200.5, 75.0)]
        );
    }

    #[test]
    fn test_parse_flat_layout() {
        let peaks = parse_spectrum_text("  12 1\t34 2  ").unwrap();
        assert_eq!(peaks, vec![Peak::new(12.0, 1.0), Peak::new(34.0, 2.0)]);
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let peaks = parse_spectrum_text("300 1 100 2 200 3").unwrap();
        let mzs: Vec<f64> = peaks.iter().map(|p| p.mz).collect();
        assert_eq!(mzs, vec![300.0, 100.0, 200.0]);
    }

    #[test]
    fn test_parse_rejects_odd_count() {
        let err = parse_spectrum_text("100 50 200").unwrap_err();
        assert!(err.to_string().contains("even number"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_token() {
        let err = parse_spectrum_text("100 fifty").unwrap_err();
        assert!(err.to_string().contains("'fifty'"));
    }

    #[test]
    fn test_parse_empty_text_yields_no_peaks() {
        // Emptiness is rejected later by the synthesizer, not the parser.
        assert_eq!(parse_spectrum_text("").unwrap(), vec![]);
    }

    #[test]
    fn test_peak_serde_roundtrip() {
        let peak = Peak::new(99.5, 1234.0);
        let json = serde_json::to_string(&peak).unwrap();
        let parsed: Peak = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, peak);
    }
}
