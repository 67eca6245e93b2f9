//! In-memory representation of a RIFF/WAVE file

pub mod convert;
pub mod data;
pub mod fmt;
pub mod header;
pub mod reader;
pub mod writer;

pub use convert::WaveConverter;
pub use data::{Sample, WaveData};
pub use fmt::{FormatTag, WaveFmt};
pub use header::WaveHeader;
pub use reader::{parse_wave, read_wave_file};
pub use writer::{wave_to_bytes, write_wave_file};

use crate::error::Result;
use std::io::Cursor;

/// An entire WAVE file: RIFF header, format descriptor and sample data
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub header: WaveHeader,
    pub fmt: WaveFmt,
    pub data: WaveData,
}

impl Wave {
    /// Assemble a file from a format descriptor and interleaved samples.
    ///
    /// Samples are encoded immediately so the raw payload and every chunk
    /// size field are consistent from the start.
    pub fn new(fmt: WaveFmt, samples: Vec<Sample>) -> Result<Self> {
        fmt.validate()?;

        let data = WaveData::from_samples(&fmt, samples)?;
        let header = WaveHeader::new(writer::riff_chunk_size(&fmt, data.subchunk_size));

        Ok(Wave { header, fmt, data })
    }

    /// Parse a file held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        reader::parse_wave(&mut Cursor::new(bytes))
    }

    /// Serialize back to the canonical byte layout
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::wave_to_bytes(self)
    }

    /// Number of frames (one sample per channel)
    pub fn num_frames(&self) -> u64 {
        if self.fmt.block_align == 0 {
            return 0;
        }
        self.data.raw_data.len() as u64 / self.fmt.block_align as u64
    }

    pub fn duration_seconds(&self) -> f64 {
        if self.fmt.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.fmt.sample_rate as f64
    }
}
