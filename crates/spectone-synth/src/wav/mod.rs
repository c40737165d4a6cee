//! Deterministic WAV encoding.
//!
//! Writes mono 16-bit PCM RIFF/WAVE buffers with no timestamps or
//! variable metadata, so identical input always encodes to identical
//! bytes. The BLAKE3 hash of the PCM payload is exposed for
//! determinism audits.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{quantize_to_pcm16, write_wav, write_wav_to_vec};
