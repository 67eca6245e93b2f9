//! Serializing a [`Wave`] back to the canonical byte layout

use crate::error::{Result, WaveError};
use crate::wave::Wave;
use crate::wave::data::DATA_TAG;
use crate::wave::fmt::WaveFmt;
use crate::wave::header::WaveHeader;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize and write a WAVE file to disk
pub fn write_wave_file<P: AsRef<Path>>(path: P, wave: &Wave) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WaveError::io(format!("Cannot create output directory: {}", e)))?;
        }
    }

    let bytes = wave_to_bytes(wave)?;

    let file = File::create(path)
        .map_err(|e| WaveError::io(format!("Cannot create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&bytes)?;
    writer.flush()?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Serialize a [`Wave`] into bytes.
///
/// Chunk sizes are recomputed from the payload rather than taken from the
/// stored fields, and a pad byte is appended when the data payload length is
/// odd. The pad is counted in the RIFF chunk size but not in the data
/// subchunk size.
pub fn wave_to_bytes(wave: &Wave) -> Result<Vec<u8>> {
    wave.fmt.validate()?;

    let fmt_body = wave.fmt.to_chunk_body();
    let data_len = wave.data.raw_data.len() as u32;
    let riff_size = riff_chunk_size(&wave.fmt, data_len);

    let mut bytes = Vec::with_capacity(8 + riff_size as usize);

    bytes.extend_from_slice(&WaveHeader::new(riff_size).to_bytes());

    bytes.extend_from_slice(&wave.fmt.subchunk_id);
    bytes.extend_from_slice(&(fmt_body.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&fmt_body);

    bytes.extend_from_slice(&DATA_TAG);
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&wave.data.raw_data);

    if data_len % 2 != 0 {
        bytes.push(0);
    }

    Ok(bytes)
}

/// RIFF chunk size for a file with this fmt and a data payload of `data_len`
/// bytes: WAVE tag + both subchunk headers + both bodies + the pad byte.
pub(crate) fn riff_chunk_size(fmt: &WaveFmt, data_len: u32) -> u32 {
    4 + 8 + fmt.chunk_body_size() + 8 + data_len + data_len % 2
}
