//! Data subchunk and sample codec

use crate::error::{Result, WaveError};
use crate::wave::fmt::{FormatTag, WaveFmt};

pub const DATA_TAG: [u8; 4] = *b"data";

/// A single decoded sample, normalized to [-1.0, 1.0]
pub type Sample = f64;

const SCALE_8: f64 = 128.0;
const SCALE_16: f64 = 32768.0;
const SCALE_24: f64 = 8388608.0;
const SCALE_32: f64 = 2147483648.0;

/// The data subchunk: raw payload plus its decoded samples
#[derive(Debug, Clone, PartialEq)]
pub struct WaveData {
    /// Subchunk tag, always `data`
    pub subchunk_id: [u8; 4],
    /// Size of the raw payload in bytes
    pub subchunk_size: u32,
    /// Payload exactly as stored in the file
    pub raw_data: Vec<u8>,
    /// Interleaved samples decoded from the payload
    pub samples: Vec<Sample>,
}

impl WaveData {
    /// Build the subchunk from samples, encoding them per the format.
    ///
    /// The stored samples are decoded back from the encoded payload, so
    /// they always reflect what a reader of the file would see. For
    /// integer formats that means one round of quantization happens here.
    pub fn from_samples(fmt: &WaveFmt, samples: Vec<Sample>) -> Result<Self> {
        let raw_data = encode_samples(fmt, &samples)?;
        let samples = decode_samples(fmt, &raw_data)?;

        Ok(WaveData {
            subchunk_id: DATA_TAG,
            subchunk_size: raw_data.len() as u32,
            raw_data,
            samples,
        })
    }

    /// Build the subchunk from a raw payload, decoding it per the format
    pub fn from_raw(fmt: &WaveFmt, raw_data: Vec<u8>) -> Result<Self> {
        let samples = decode_samples(fmt, &raw_data)?;

        Ok(WaveData {
            subchunk_id: DATA_TAG,
            subchunk_size: raw_data.len() as u32,
            raw_data,
            samples,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Decode a raw data payload into normalized samples
pub fn decode_samples(fmt: &WaveFmt, raw: &[u8]) -> Result<Vec<Sample>> {
    check_sample_layout(fmt)?;

    if fmt.block_align != 0 && raw.len() % fmt.block_align as usize != 0 {
        return Err(WaveError::data(format!(
            "Payload of {} bytes leaves a partial frame (block align {})",
            raw.len(),
            fmt.block_align
        )));
    }

    let bytes_per_sample = fmt.bytes_per_sample() as usize;
    let mut samples = Vec::with_capacity(raw.len() / bytes_per_sample);

    match (fmt.effective_format(), fmt.bits_per_sample) {
        (FormatTag::Pcm, 8) => {
            for &b in raw {
                samples.push((b as f64 - SCALE_8) / SCALE_8);
            }
        }
        (FormatTag::Pcm, 16) => {
            for b in raw.chunks_exact(2) {
                let v = i16::from_le_bytes([b[0], b[1]]);
                samples.push(v as f64 / SCALE_16);
            }
        }
        (FormatTag::Pcm, 24) => {
            for b in raw.chunks_exact(3) {
                // sign-extend the top byte
                let sign = if b[2] & 0x80 != 0 { 0xff } else { 0x00 };
                let v = i32::from_le_bytes([b[0], b[1], b[2], sign]);
                samples.push(v as f64 / SCALE_24);
            }
        }
        (FormatTag::Pcm, 32) => {
            for b in raw.chunks_exact(4) {
                let v = i32::from_le_bytes([b[0], b[1], b[2], b[3]]);
                samples.push(v as f64 / SCALE_32);
            }
        }
        (FormatTag::IeeeFloat, 32) => {
            for b in raw.chunks_exact(4) {
                samples.push(f32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64);
            }
        }
        (FormatTag::IeeeFloat, 64) => {
            for b in raw.chunks_exact(8) {
                samples.push(f64::from_le_bytes([
                    b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
                ]));
            }
        }
        _ => unreachable!("checked by check_sample_layout"),
    }

    Ok(samples)
}

/// Encode normalized samples into a raw data payload
pub fn encode_samples(fmt: &WaveFmt, samples: &[Sample]) -> Result<Vec<u8>> {
    check_sample_layout(fmt)?;

    let bytes_per_sample = fmt.bytes_per_sample() as usize;
    let mut raw = Vec::with_capacity(samples.len() * bytes_per_sample);

    match (fmt.effective_format(), fmt.bits_per_sample) {
        (FormatTag::Pcm, 8) => {
            for &x in samples {
                let v = (x * SCALE_8 + SCALE_8).round().clamp(0.0, 255.0) as u8;
                raw.push(v);
            }
        }
        (FormatTag::Pcm, 16) => {
            for &x in samples {
                let v = (x * SCALE_16).round().clamp(-32768.0, 32767.0) as i16;
                raw.extend_from_slice(&v.to_le_bytes());
            }
        }
        (FormatTag::Pcm, 24) => {
            for &x in samples {
                let v = (x * SCALE_24).round().clamp(-8388608.0, 8388607.0) as i32;
                let b = v.to_le_bytes();
                raw.extend_from_slice(&[b[0], b[1], b[2]]);
            }
        }
        (FormatTag::Pcm, 32) => {
            for &x in samples {
                let v = (x * SCALE_32).round().clamp(-2147483648.0, 2147483647.0) as i32;
                raw.extend_from_slice(&v.to_le_bytes());
            }
        }
        (FormatTag::IeeeFloat, 32) => {
            for &x in samples {
                raw.extend_from_slice(&(x as f32).to_le_bytes());
            }
        }
        (FormatTag::IeeeFloat, 64) => {
            for &x in samples {
                raw.extend_from_slice(&x.to_le_bytes());
            }
        }
        _ => unreachable!("checked by check_sample_layout"),
    }

    Ok(raw)
}

/// Reject format/bit-depth combinations the sample codec does not handle.
/// Extensible containers are judged by their resolved sub-format.
fn check_sample_layout(fmt: &WaveFmt) -> Result<()> {
    match (fmt.effective_format(), fmt.bits_per_sample) {
        (FormatTag::Pcm, 8 | 16 | 24 | 32) => Ok(()),
        (FormatTag::IeeeFloat, 32 | 64) => Ok(()),
        (FormatTag::Pcm | FormatTag::IeeeFloat, bits) => Err(WaveError::unsupported(format!(
            "{:?} with {} bits per sample",
            fmt.audio_format, bits
        ))),
        (tag, _) => Err(WaveError::unsupported(format!(
            "Audio format {:?} (code {})",
            tag,
            u16::from(tag)
        ))),
    }
}
