//! The spectrum-to-waveform synthesis routine.
//!
//! Each peak becomes a sine tone at a policy-mapped frequency, scaled by
//! the peak's intensity relative to the spectrum maximum. Tones
//! accumulate into one floating-point waveform which is normalized to
//! full scale and quantized exactly once at the end.

use std::f64::consts::TAU;

use spectone_spec::{Peak, SynthesisRequest};

use crate::error::{SynthError, SynthResult};
use crate::record::PeakRecord;
use crate::wav::WavResult;

/// Amplitude scale applied to each tone before mixing (i16::MAX).
///
/// Mathematically redundant once the post-mix rescale runs, but kept so
/// the accumulator matches the original pipeline sample for sample.
const TONE_SCALE: f64 = 32767.0;

/// Result of one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    /// Encoded WAV file with PCM hash.
    pub wav: WavResult,
    /// One transformation record per input peak, in input order.
    pub records: Vec<PeakRecord>,
}

/// Reusable synthesis state: the time axis and the mix accumulator.
///
/// One `Synthesizer` serves one call at a time; it is plain caller-owned
/// state, so concurrent callers each hold their own. Reusing a value
/// across calls keeps the two sample-length buffers warm instead of
/// reallocating per request.
#[derive(Debug, Default)]
pub struct Synthesizer {
    time_axis: Vec<f64>,
    combined: Vec<f64>,
}

impl Synthesizer {
    /// Creates a synthesizer with empty buffers. Buffers are sized on
    /// the first call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizes the spectrum into a WAV clip plus per-peak records.
    ///
    /// Peaks are processed in input order and the record list preserves
    /// that order 1:1, including peaks that map to a non-positive
    /// frequency and therefore contribute no audio.
    ///
    /// # Errors
    /// * [`SynthError::EmptySpectrum`] when `peaks` is empty.
    /// * [`SynthError::FrequencyComputation`] when the policy produces a
    ///   non-finite frequency for any peak. The whole call fails; no
    ///   partial audio is returned.
    pub fn synthesize(
        &mut self,
        peaks: &[Peak],
        request: &SynthesisRequest,
    ) -> SynthResult<SynthesisResult> {
        if peaks.is_empty() {
            return Err(SynthError::EmptySpectrum);
        }

        let sample_rate = request.sample_rate;
        let sample_count = (sample_rate as f64 * request.duration_seconds).floor() as usize;
        self.prepare(sample_count, sample_rate);

        let max_intensity = peaks
            .iter()
            .map(|p| p.intensity)
            .fold(0.0_f64, |a, b| a.max(b));

        let mut records = Vec::with_capacity(peaks.len());

        for peak in peaks {
            let frequency = request.policy.frequency(peak.mz);
            if !frequency.is_finite() {
                return Err(SynthError::FrequencyComputation {
                    mz: peak.mz,
                    frequency,
                });
            }

            // Pre-mix normalization; the record reports this value and
            // deliberately not the post-mix rescale below.
            let amplitude_linear = if max_intensity > 0.0 {
                peak.intensity / max_intensity
            } else {
                0.0
            };
            let amplitude_db = if amplitude_linear > 0.0 {
                20.0 * amplitude_linear.log10()
            } else {
                f64::NEG_INFINITY
            };

            records.push(PeakRecord {
                mz: peak.mz,
                frequency,
                intensity: peak.intensity,
                amplitude_linear,
                amplitude_db,
            });

            // Inaudible or invalid; recorded above but not mixed.
            if frequency <= 0.0 {
                continue;
            }

            let amplitude = amplitude_linear * TONE_SCALE;
            let omega = TAU * frequency;
            for (sample, &t) in self.combined.iter_mut().zip(self.time_axis.iter()) {
                *sample += amplitude * (omega * t).sin();
            }
        }

        // Full-scale normalization to undo clipping from superposition.
        // A silent spectrum stays all-zero.
        let peak_abs = self
            .combined
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b));
        if peak_abs > 0.0 {
            for sample in self.combined.iter_mut() {
                *sample /= peak_abs;
            }
        }

        Ok(SynthesisResult {
            wav: WavResult::from_mono(&self.combined, sample_rate),
            records,
        })
    }

    /// Sizes the buffers for `sample_count` samples, rebuilding the
    /// half-open time axis `t[i] = i / sample_rate` and zeroing the
    /// accumulator.
    fn prepare(&mut self, sample_count: usize, sample_rate: u32) {
        let dt = 1.0 / sample_rate as f64;
        self.time_axis.clear();
        self.time_axis.extend((0..sample_count).map(|i| i as f64 * dt));

        self.combined.clear();
        self.combined.resize(sample_count, 0.0);
    }
}

/// One-shot convenience wrapper allocating a fresh [`Synthesizer`].
pub fn synthesize(peaks: &[Peak], request: &SynthesisRequest) -> SynthResult<SynthesisResult> {
    Synthesizer::new().synthesize(peaks, request)
}
