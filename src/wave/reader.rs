//! Parsing a WAVE byte stream into a [`Wave`]

use crate::error::{Result, WaveError};
use crate::wave::Wave;
use crate::wave::data::WaveData;
use crate::wave::fmt::WaveFmt;
use crate::wave::header::WaveHeader;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Read and parse a WAVE file from disk
pub fn read_wave_file<P: AsRef<Path>>(path: P) -> Result<Wave> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| WaveError::io(format!("Cannot open {}: {}", path.display(), e)))?;

    parse_wave(&mut BufReader::new(file))
}

/// Parse a WAVE stream: RIFF header, then subchunks in file order.
///
/// The fmt subchunk must appear before data. Subchunks other than fmt and
/// data are skipped together with their word-alignment padding. The scan
/// ends at the data subchunk.
pub fn parse_wave<R: Read + Seek>(reader: &mut R) -> Result<Wave> {
    let mut riff = [0u8; 12];
    reader
        .read_exact(&mut riff)
        .map_err(|e| WaveError::header(format!("Failed to read RIFF header: {}", e)))?;

    let header = WaveHeader::from_bytes(&riff)?;
    debug!("RIFF container, declared size {}", header.chunk_size);

    let mut fmt: Option<WaveFmt> = None;

    loop {
        let mut chunk_header = [0u8; 8];
        if reader.read_exact(&mut chunk_header).is_err() {
            return Err(if fmt.is_none() {
                WaveError::format("fmt subchunk not found")
            } else {
                WaveError::data("data subchunk not found")
            });
        }

        let chunk_id = [chunk_header[0], chunk_header[1], chunk_header[2], chunk_header[3]];
        let chunk_size = u32::from_le_bytes([
            chunk_header[4],
            chunk_header[5],
            chunk_header[6],
            chunk_header[7],
        ]);

        match &chunk_id {
            b"fmt " => {
                let mut body = vec![0u8; chunk_size as usize];
                reader
                    .read_exact(&mut body)
                    .map_err(|e| WaveError::format(format!("Failed to read fmt subchunk: {}", e)))?;

                let parsed = WaveFmt::from_chunk_body(&body)?;
                parsed.validate()?;
                debug!(
                    "fmt subchunk: {:?}, {} ch, {} Hz, {} bits",
                    parsed.audio_format, parsed.num_channels, parsed.sample_rate, parsed.bits_per_sample
                );
                fmt = Some(parsed);
            }
            b"data" => {
                let fmt = fmt
                    .take()
                    .ok_or_else(|| WaveError::format("data subchunk appears before fmt"))?;

                let mut raw = vec![0u8; chunk_size as usize];
                reader
                    .read_exact(&mut raw)
                    .map_err(|e| WaveError::data(format!("Failed to read data payload: {}", e)))?;

                let data = WaveData::from_raw(&fmt, raw)?;
                debug!("data subchunk: {} bytes, {} samples", data.subchunk_size, data.len());

                return Ok(Wave { header, fmt, data });
            }
            other => {
                warn!(
                    "Skipping subchunk {:?} ({} bytes)",
                    String::from_utf8_lossy(other),
                    chunk_size
                );
                // subchunks are word-aligned, odd sizes carry a pad byte
                let skip = chunk_size as i64 + (chunk_size % 2) as i64;
                reader
                    .seek(SeekFrom::Current(skip))
                    .map_err(|e| WaveError::format(format!("Failed to skip subchunk: {}", e)))?;
            }
        }
    }
}
