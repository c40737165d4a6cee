//! Per-peak transformation records.

use serde::{Serialize, Serializer};

/// How one input peak was transformed, for diagnostics and display.
///
/// One record is emitted per input peak, in input order, whether or not
/// the peak contributed audio. `amplitude_linear` reports the pre-mix
/// normalization only; the post-mix full-scale rescale applied to the
/// combined waveform is intentionally not reflected here, matching the
/// behavior of the original service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakRecord {
    /// Mass-to-charge ratio of the input peak.
    pub mz: f64,
    /// Frequency in Hz the policy mapped this peak to. May be zero or
    /// negative, in which case the peak was skipped during mixing.
    pub frequency: f64,
    /// Original (un-normalized) intensity.
    pub intensity: f64,
    /// Intensity divided by the spectrum maximum, in [0, 1].
    pub amplitude_linear: f64,
    /// `20 * log10(amplitude_linear)`, or negative infinity when the
    /// amplitude is zero. Serialized to JSON as `null` in that case.
    #[serde(serialize_with = "serialize_db")]
    pub amplitude_db: f64,
}

/// JSON has no -Infinity, so a non-finite dB value becomes null.
fn serialize_db<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}
