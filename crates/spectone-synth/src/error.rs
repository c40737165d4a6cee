//! Error types for the spectrum synthesizer.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that abort a synthesis call. No partial audio is ever
/// returned; a failed call produces nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Zero peaks supplied; there is no maximum to normalize against.
    #[error("empty spectrum: at least one peak is required")]
    EmptySpectrum,

    /// A policy evaluation produced a non-finite frequency, e.g. the
    /// inverse policy dividing by zero when `mz + shift == 0`.
    #[error("frequency computation failed for peak at m/z {mz}: got {frequency}")]
    FrequencyComputation {
        /// The m/z value whose mapping failed.
        mz: f64,
        /// The non-finite value the policy produced.
        frequency: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spectrum_display() {
        assert!(SynthError::EmptySpectrum
            .to_string()
            .contains("at least one peak"));
    }

    #[test]
    fn test_frequency_computation_display() {
        let err = SynthError::FrequencyComputation {
            mz: -1.0,
            frequency: f64::INFINITY,
        };
        let text = err.to_string();
        assert!(text.contains("m/z -1"));
        assert!(text.contains("inf"));
    }
}
