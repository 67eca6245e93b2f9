//! Round-trip tests for the container codec
//!
//! File round-trips through this crate, plus both directions against hound
//! as an independent WAV implementation.

use tempfile::TempDir;
use wavefile::wave::{read_wave_file, write_wave_file};
use wavefile::{FormatTag, Sample, Wave, WaveFmt};

/// A short deterministic test signal
fn test_signal(frames: usize, channels: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(frames * channels);
    for i in 0..frames {
        let t = i as f64 / 48000.0;
        let v = 0.8 * (2.0 * std::f64::consts::PI * 440.0 * t).sin();
        for _ in 0..channels {
            samples.push(v);
        }
    }
    samples
}

#[test]
fn file_roundtrip_16_bit_stereo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.wav");

    let fmt = WaveFmt::new_pcm(48000, 2, 16);
    let wave = Wave::new(fmt, test_signal(480, 2)).unwrap();
    write_wave_file(&path, &wave).unwrap();

    let loaded = read_wave_file(&path).unwrap();
    assert_eq!(loaded.fmt, wave.fmt);
    assert_eq!(loaded.header, wave.header);
    // samples were quantized once on encode, the reload is exact
    assert_eq!(loaded.data.samples, wave.data.samples);
    assert_eq!(loaded.data.raw_data, wave.data.raw_data);
}

#[test]
fn file_roundtrip_24_bit_mono() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out.wav");

    let fmt = WaveFmt::new_pcm(44100, 1, 24);
    let wave = Wave::new(fmt, test_signal(441, 1)).unwrap();
    write_wave_file(&path, &wave).unwrap();

    let loaded = read_wave_file(&path).unwrap();
    assert_eq!(loaded.fmt.bits_per_sample, 24);
    assert_eq!(loaded.data.samples, wave.data.samples);
}

#[test]
fn file_roundtrip_float64() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.wav");

    let fmt = WaveFmt::new_ieee_float(48000, 1, 64);
    let samples = test_signal(100, 1);
    let wave = Wave::new(fmt, samples.clone()).unwrap();
    write_wave_file(&path, &wave).unwrap();

    let loaded = read_wave_file(&path).unwrap();
    assert_eq!(loaded.fmt.audio_format, FormatTag::IeeeFloat);
    // f64 storage is lossless
    assert_eq!(loaded.data.samples, samples);
}

#[test]
fn hound_reads_our_16_bit_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ours.wav");

    let values: Vec<i16> = vec![0, 1, -1, 32767, -32768, 12345, -12345];
    let samples: Vec<Sample> = values.iter().map(|&v| v as f64 / 32768.0).collect();

    let fmt = WaveFmt::new_pcm(44100, 1, 16);
    let wave = Wave::new(fmt, samples).unwrap();
    write_wave_file(&path, &wave).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(read, values);
}

#[test]
fn we_read_hound_16_bit_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theirs.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let values: Vec<i16> = vec![100, -100, 2000, -2000, 30000, -30000];

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &v in &values {
        writer.write_sample(v).unwrap();
    }
    writer.finalize().unwrap();

    let wave = read_wave_file(&path).unwrap();
    assert_eq!(wave.fmt.audio_format, FormatTag::Pcm);
    assert_eq!(wave.fmt.num_channels, 2);
    assert_eq!(wave.fmt.sample_rate, 22050);
    assert_eq!(wave.fmt.byte_rate, 88200);

    let expected: Vec<Sample> = values.iter().map(|&v| v as f64 / 32768.0).collect();
    assert_eq!(wave.data.samples, expected);
}

#[test]
fn we_read_hound_24_bit_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theirs_24.wav");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48000,
        bits_per_sample: 24,
        sample_format: hound::SampleFormat::Int,
    };
    let values: Vec<i32> = vec![0, 1, -1, 8_388_607, -8_388_608, 123_456];

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &v in &values {
        writer.write_sample(v).unwrap();
    }
    writer.finalize().unwrap();

    let wave = read_wave_file(&path).unwrap();
    assert_eq!(wave.fmt.bits_per_sample, 24);
    assert_eq!(wave.fmt.effective_format(), FormatTag::Pcm);

    let expected: Vec<Sample> = values.iter().map(|&v| v as f64 / 8_388_608.0).collect();
    assert_eq!(wave.data.samples, expected);
}

#[test]
fn hound_reads_our_float32_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ours_f32.wav");

    let samples: Vec<Sample> = vec![0.0, 0.5, -0.5, 0.25];
    let fmt = WaveFmt::new_ieee_float(48000, 1, 32);
    let wave = Wave::new(fmt, samples.clone()).unwrap();
    write_wave_file(&path, &wave).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_format, hound::SampleFormat::Float);

    let read: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
    let expected: Vec<f32> = samples.iter().map(|&v| v as f32).collect();
    assert_eq!(read, expected);
}

#[test]
fn we_read_hound_float32_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theirs_f32.wav");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let values: Vec<f32> = vec![0.125, -0.625, 0.875];

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &v in &values {
        writer.write_sample(v).unwrap();
    }
    writer.finalize().unwrap();

    let wave = read_wave_file(&path).unwrap();
    assert_eq!(wave.fmt.effective_format(), FormatTag::IeeeFloat);
    assert_eq!(wave.fmt.bits_per_sample, 32);

    let expected: Vec<Sample> = values.iter().map(|&v| v as f64).collect();
    assert_eq!(wave.data.samples, expected);
}

#[test]
fn byte_roundtrip_preserves_parsed_wave() {
    let fmt = WaveFmt::new_pcm(8000, 1, 8);
    let wave = Wave::new(fmt, test_signal(101, 1)).unwrap();

    let bytes = wave.to_bytes().unwrap();
    let reparsed = Wave::from_bytes(&bytes).unwrap();

    assert_eq!(reparsed, wave);
    assert_eq!(reparsed.to_bytes().unwrap(), bytes);
}
