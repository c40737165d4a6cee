//! Spectone spectrum synthesizer.
//!
//! This crate turns a mass spectrum into an audible WAV clip. Every peak
//! maps to a sine tone via a frequency policy from `spectone-spec`; the
//! tones are intensity-weighted, mixed in floating point, normalized to
//! full scale, and quantized to mono 16-bit PCM exactly once.
//!
//! # Determinism
//!
//! Synthesis uses no randomness and no timing information: identical
//! inputs produce byte-identical WAV output. The BLAKE3 hash of the PCM
//! payload is part of every result so callers can audit that property.
//!
//! # Example
//!
//! ```
//! use spectone_spec::{parse_spectrum_text, SynthesisRequest};
//! use spectone_synth::synthesize;
//!
//! let peaks = parse_spectrum_text("100 40\n200 20").unwrap();
//! let result = synthesize(&peaks, &SynthesisRequest::default()).unwrap();
//!
//! assert_eq!(result.records.len(), 2);
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate structure
//!
//! - [`synthesize()`] / [`Synthesizer`] - the synthesis routine
//! - [`record`] - per-peak transformation records
//! - [`wav`] - deterministic mono WAV encoding
//! - [`error`] - the failure taxonomy

pub mod error;
pub mod record;
pub mod synth;
pub mod wav;

pub use error::{SynthError, SynthResult};
pub use record::PeakRecord;
pub use synth::{synthesize, SynthesisResult, Synthesizer};
pub use wav::WavResult;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use spectone_spec::{parse_spectrum_text, FrequencyPolicy, SynthesisRequest};

    #[test]
    fn test_text_to_wav_pipeline() {
        let peaks = parse_spectrum_text("41.1 37.3\n43.1 100.0\n57.1 25.0").unwrap();
        let request = SynthesisRequest {
            policy: FrequencyPolicy::Linear { offset: 300.0 },
            duration_seconds: 0.2,
            sample_rate: 22_050,
        };

        let result = synthesize(&peaks, &request).unwrap();

        assert_eq!(result.records.len(), 3);
        assert_eq!(result.wav.sample_rate, 22_050);
        assert_eq!(result.wav.num_samples, 4_410);
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
        assert_eq!(&result.wav.wav_data[8..12], b"WAVE");

        // The base peak (43.1, max intensity) sits at 0 dBFS pre-mix.
        assert_eq!(result.records[1].amplitude_linear, 1.0);
    }

    #[test]
    fn test_pipeline_determinism_across_policies() {
        let peaks = parse_spectrum_text("100 40 200 20 300 10").unwrap();
        let policies = [
            FrequencyPolicy::Linear { offset: 300.0 },
            FrequencyPolicy::Inverse {
                scale: 100_000.0,
                shift: 1.0,
            },
            FrequencyPolicy::Modulo {
                factor: 10.0,
                modulus: 500.0,
                base: 100.0,
            },
        ];

        for policy in policies {
            let request = SynthesisRequest {
                policy,
                duration_seconds: 0.1,
                sample_rate: 8_000,
            };
            let result1 = synthesize(&peaks, &request).unwrap();
            let result2 = synthesize(&peaks, &request).unwrap();
            assert_eq!(result1.wav.pcm_hash, result2.wav.pcm_hash);
        }
    }

    #[test]
    fn test_records_serialize_to_json() {
        let peaks = parse_spectrum_text("100 40 200 0").unwrap();
        let result = synthesize(&peaks, &SynthesisRequest::default()).unwrap();

        let json = serde_json::to_string(&result.records).unwrap();
        assert!(json.contains("\"mz\":100.0"));
        // The zero-intensity peak reports null dB.
        assert!(json.contains("\"amplitude_db\":null"));
    }
}
