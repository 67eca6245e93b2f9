//! RIFF container header

use crate::error::{Result, WaveError};

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";

/// The 12-byte header every WAVE file starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveHeader {
    /// Container tag, `RIFF` for little-endian files
    pub chunk_id: [u8; 4],
    /// Size of everything that follows this field (file size minus 8)
    pub chunk_size: u32,
    /// Format tag, always `WAVE`
    pub format: [u8; 4],
}

impl WaveHeader {
    pub fn new(chunk_size: u32) -> Self {
        WaveHeader {
            chunk_id: RIFF_TAG,
            chunk_size,
            format: WAVE_TAG,
        }
    }

    /// Parse the header from the first 12 bytes of a file
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 12 {
            return Err(WaveError::header(format!(
                "RIFF header needs 12 bytes, got {}",
                bytes.len()
            )));
        }

        let header = WaveHeader {
            chunk_id: [bytes[0], bytes[1], bytes[2], bytes[3]],
            chunk_size: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            format: [bytes[8], bytes[9], bytes[10], bytes[11]],
        };

        header.validate()?;
        Ok(header)
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&self.chunk_id);
        bytes[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.format);
        bytes
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_id != RIFF_TAG {
            return Err(WaveError::header(format!(
                "Not a RIFF file (tag {:?})",
                String::from_utf8_lossy(&self.chunk_id)
            )));
        }

        if self.format != WAVE_TAG {
            return Err(WaveError::header(format!(
                "Not a WAVE file (tag {:?})",
                String::from_utf8_lossy(&self.format)
            )));
        }

        Ok(())
    }
}
