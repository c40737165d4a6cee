//! Header writing and 16-bit quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Writes a complete WAV file: 44-byte header followed by PCM data.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    // RIFF size excludes the 8 bytes of the RIFF chunk header itself.
    let file_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size, 16 for PCM
    writer.write_all(&1u16.to_le_bytes())?; // audio format, 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a fresh byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Quantizes floating-point samples to little-endian 16-bit PCM bytes.
///
/// Each sample is scaled by 32767, rounded, and clamped to the
/// representable range. This is the single quantization step of the
/// pipeline; everything upstream stays in floating point.
pub fn quantize_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let scaled = (sample * 32767.0)
            .round()
            .clamp(i16::MIN as f64, i16::MAX as f64);
        pcm.extend_from_slice(&(scaled as i16).to_le_bytes());
    }

    pcm
}
