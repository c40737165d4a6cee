//! WAV format parameters.

/// Format parameters for the `fmt ` chunk.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels. Spectone output is always mono.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 here).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format at the given sample rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
