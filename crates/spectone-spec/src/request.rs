//! Synthesis request parameters.

use serde::{Deserialize, Serialize};

use crate::policy::FrequencyPolicy;

/// Parameters for one synthesis run.
///
/// Defaults match the original service: a 5 second clip at 44.1 kHz with
/// the linear policy at offset 300.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Frequency-mapping policy with its parameters. The `policy` tag
    /// and its fields sit at the top level of the serialized form.
    #[serde(flatten)]
    pub policy: FrequencyPolicy,
    /// Clip duration in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_duration() -> f64 {
    5.0
}

fn default_sample_rate() -> u32 {
    44_100
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            policy: FrequencyPolicy::default(),
            duration_seconds: default_duration(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl SynthesisRequest {
    /// Creates a request with the given policy and default audio
    /// parameters.
    pub fn with_policy(policy: FrequencyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
