//! Format descriptor subchunk

use crate::error::{Result, WaveError};

pub const FMT_TAG: [u8; 4] = *b"fmt ";

/// Audio format code stored in the fmt subchunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM, uncompressed linear quantization
    Pcm,
    /// IEEE floating point
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Anything else
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// The fmt subchunk describing how the data subchunk is encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFmt {
    /// Subchunk tag, always `fmt `
    pub subchunk_id: [u8; 4],
    /// Size of the subchunk body: 16 for PCM, 18 plus extension for anything else
    pub subchunk_size: u32,
    pub audio_format: FormatTag,
    /// Mono 1, stereo 2, ..
    pub num_channels: u16,
    pub sample_rate: u32,
    /// sample_rate * num_channels * bits_per_sample / 8
    pub byte_rate: u32,
    /// num_channels * bits_per_sample / 8, bytes per frame
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Size of the extension, only present for non-PCM formats
    pub extra_param_size: u16,
    pub extra_params: Vec<u8>,
}

impl WaveFmt {
    /// Build a PCM format descriptor with the derived fields filled in
    pub fn new_pcm(sample_rate: u32, num_channels: u16, bits_per_sample: u16) -> Self {
        Self::with_format(FormatTag::Pcm, sample_rate, num_channels, bits_per_sample)
    }

    /// Build an IEEE float format descriptor (32 or 64 bits per sample)
    pub fn new_ieee_float(sample_rate: u32, num_channels: u16, bits_per_sample: u16) -> Self {
        Self::with_format(FormatTag::IeeeFloat, sample_rate, num_channels, bits_per_sample)
    }

    fn with_format(
        audio_format: FormatTag,
        sample_rate: u32,
        num_channels: u16,
        bits_per_sample: u16,
    ) -> Self {
        let block_align = num_channels * (bits_per_sample / 8);
        let byte_rate = sample_rate * block_align as u32;

        let mut fmt = WaveFmt {
            subchunk_id: FMT_TAG,
            subchunk_size: 0,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            extra_param_size: 0,
            extra_params: Vec::new(),
        };
        fmt.subchunk_size = fmt.chunk_body_size();
        fmt
    }

    /// Parse the subchunk body (the bytes after the 8-byte tag/size prefix)
    pub fn from_chunk_body(body: &[u8]) -> Result<Self> {
        if body.len() < 16 {
            return Err(WaveError::format(format!(
                "fmt subchunk needs at least 16 bytes, got {}",
                body.len()
            )));
        }

        let audio_format = FormatTag::from(u16::from_le_bytes([body[0], body[1]]));
        let num_channels = u16::from_le_bytes([body[2], body[3]]);
        let sample_rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
        let byte_rate = u32::from_le_bytes([body[8], body[9], body[10], body[11]]);
        let block_align = u16::from_le_bytes([body[12], body[13]]);
        let bits_per_sample = u16::from_le_bytes([body[14], body[15]]);

        // Extension parameters shift where the data subchunk starts. Some
        // encoders also emit a zero-size extension field for float files, so
        // presence is keyed off the body length here, not the format tag.
        let (extra_param_size, extra_params) = if body.len() >= 18 {
            let size = u16::from_le_bytes([body[16], body[17]]);
            let end = 18 + size as usize;
            if body.len() < end {
                return Err(WaveError::format(format!(
                    "fmt extension claims {} bytes but only {} remain",
                    size,
                    body.len() - 18
                )));
            }
            (size, body[18..end].to_vec())
        } else {
            (0, Vec::new())
        };

        Ok(WaveFmt {
            subchunk_id: FMT_TAG,
            subchunk_size: body.len() as u32,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            extra_param_size,
            extra_params,
        })
    }

    /// Serialize the subchunk body, extension fields only for non-PCM formats
    pub fn to_chunk_body(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.chunk_body_size() as usize);

        bytes.extend_from_slice(&u16::from(self.audio_format).to_le_bytes());
        bytes.extend_from_slice(&self.num_channels.to_le_bytes());
        bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&self.byte_rate.to_le_bytes());
        bytes.extend_from_slice(&self.block_align.to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        if self.audio_format != FormatTag::Pcm {
            bytes.extend_from_slice(&(self.extra_params.len() as u16).to_le_bytes());
            bytes.extend_from_slice(&self.extra_params);
        }

        bytes
    }

    /// Size of the serialized subchunk body
    pub fn chunk_body_size(&self) -> u32 {
        if self.audio_format == FormatTag::Pcm {
            16
        } else {
            18 + self.extra_params.len() as u32
        }
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// The format that actually describes the sample encoding.
    ///
    /// For extensible fmt subchunks the real format code sits in the first
    /// two bytes of the sub-format GUID, after the valid-bits and
    /// channel-mask fields of the extension.
    pub fn effective_format(&self) -> FormatTag {
        if self.audio_format == FormatTag::Extensible && self.extra_params.len() >= 8 {
            FormatTag::from(u16::from_le_bytes([self.extra_params[6], self.extra_params[7]]))
        } else {
            self.audio_format
        }
    }

    /// Expected byte rate from the other fields
    pub fn calculate_byte_rate(&self) -> u32 {
        self.sample_rate * self.num_channels as u32 * (self.bits_per_sample / 8) as u32
    }

    /// Expected block alignment from the other fields
    pub fn calculate_block_align(&self) -> u16 {
        self.num_channels * (self.bits_per_sample / 8)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_channels == 0 {
            return Err(WaveError::format("Invalid channel count: 0"));
        }

        if self.sample_rate == 0 {
            return Err(WaveError::format("Invalid sample rate: 0"));
        }

        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(WaveError::format(format!(
                "Invalid bits per sample: {}",
                self.bits_per_sample
            )));
        }

        let expected_block_align = self.calculate_block_align();
        if self.block_align != expected_block_align {
            return Err(WaveError::format(format!(
                "Block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        let expected_byte_rate = self.calculate_byte_rate();
        if self.byte_rate != expected_byte_rate {
            return Err(WaveError::format(format!(
                "Byte rate mismatch: expected {}, got {}",
                expected_byte_rate, self.byte_rate
            )));
        }

        if self.audio_format == FormatTag::Pcm && !self.extra_params.is_empty() {
            return Err(WaveError::format(
                "PCM fmt subchunk must not carry extension parameters",
            ));
        }

        if self.extra_param_size as usize != self.extra_params.len() {
            return Err(WaveError::format(format!(
                "Extension size field says {} bytes, found {}",
                self.extra_param_size,
                self.extra_params.len()
            )));
        }

        Ok(())
    }
}
