//! wavefile - WAV container inspector and converter

use clap::Parser;
use std::path::Path;
use std::process;
use std::time::Instant;
use wavefile::{Args, Result, Wave, WaveConverter, init_logging};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.verbose {
        println!("{}", wavefile::get_library_info());
        println!();
    }

    let info_only = args.info;
    let config = wavefile::config::Config::from_args_and_config(args)?;

    if !config.input_path.exists() {
        return Err(wavefile::WaveError::config(format!(
            "Input file does not exist: {}",
            config.input_path.display()
        )));
    }

    let wave = wavefile::wave::read_wave_file(&config.input_path)?;

    if info_only || config.output_path.is_none() {
        print_info(&config.input_path, &wave);
        return Ok(());
    }

    let output_path = config.output_path.clone().unwrap();
    let (target_tag, target_bits) = config.target_format(&wave.fmt);

    println!("=== WAV Converter ===");
    println!("Input: {}", config.input_path.display());
    println!("Output: {}", output_path.display());
    println!("Encoding: {:?} {} bit", target_tag, target_bits);
    println!("=====================\n");

    let started = Instant::now();
    let converted = WaveConverter::convert_format(&wave, target_tag, target_bits)?;
    wavefile::wave::write_wave_file(&output_path, &converted)?;

    println!("=== Conversion Complete ===");
    println!("Frames: {}", converted.num_frames());
    println!("Bytes written: {}", converted.data.subchunk_size);
    println!("Time: {:.2}s", started.elapsed().as_secs_f64());
    if config.verbose() {
        println!("Duration: {:.3}s", converted.duration_seconds());
    }

    Ok(())
}

fn print_info(path: &Path, wave: &Wave) {
    println!("=== WAV File Info ===");
    println!("File: {}", path.display());
    println!(
        "Container: {} / {}",
        String::from_utf8_lossy(&wave.header.chunk_id),
        String::from_utf8_lossy(&wave.header.format)
    );
    println!("Chunk size: {}", wave.header.chunk_size);
    println!("Audio format: {:?}", wave.fmt.audio_format);
    println!("Channels: {}", wave.fmt.num_channels);
    println!("Sample rate: {} Hz", wave.fmt.sample_rate);
    println!("Byte rate: {}", wave.fmt.byte_rate);
    println!("Block align: {}", wave.fmt.block_align);
    println!("Bits per sample: {}", wave.fmt.bits_per_sample);
    println!("Data size: {} bytes", wave.data.subchunk_size);
    println!("Frames: {}", wave.num_frames());
    println!("Duration: {:.3}s", wave.duration_seconds());
}
