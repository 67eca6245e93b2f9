//! Configuration for the conversion tool

use crate::error::{Result, WaveError};
use crate::wave::fmt::{FormatTag, WaveFmt};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub convert: ConvertConfig,
    pub verbose: bool,
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target bit depth, source depth is kept when unset
    pub bits_per_sample: Option<u16>,
    /// Encode the output as IEEE float instead of PCM
    pub ieee_float: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convert: ConvertConfig::default(),
            verbose: false,
            input_path: PathBuf::from("input.wav"),
            output_path: None,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            bits_per_sample: None,
            ieee_float: false,
        }
    }
}

impl Config {
    /// Target encoding for a given source format
    pub fn target_format(&self, source: &WaveFmt) -> (FormatTag, u16) {
        if self.convert.ieee_float {
            (FormatTag::IeeeFloat, self.convert.bits_per_sample.unwrap_or(32))
        } else if let Some(bits) = self.convert.bits_per_sample {
            (FormatTag::Pcm, bits)
        } else {
            (source.audio_format, source.bits_per_sample)
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wavefile", about = "WAV container inspector and converter", version, author)]
pub struct Args {
    #[arg(short = 'i', long = "input", help = "Input WAV file path")]
    pub input: PathBuf,

    #[arg(short = 'o', long = "output", help = "Output WAV file path")]
    pub output: Option<PathBuf>,

    #[arg(short = 'b', long = "bits", help = "Target bits per sample (8/16/24/32, or 32/64 with --float)")]
    pub bits: Option<u16>,

    #[arg(long = "float", help = "Encode the output as IEEE float")]
    pub float: bool,

    #[arg(long = "info", help = "Print container details and exit")]
    pub info: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create config from command line arguments
    pub fn from_args() -> Result<Self> {
        let args = Args::parse();
        Self::from_args_and_config(args)
    }

    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        // First load config file (if provided)
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        config.input_path = args.input;
        config.output_path = args.output.or(config.output_path);
        config.convert.bits_per_sample = args.bits.or(config.convert.bits_per_sample);
        config.convert.ieee_float = args.float || config.convert.ieee_float;
        config.verbose = args.verbose || config.verbose;

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WaveError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WaveError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        if let Some(bits) = self.convert.bits_per_sample {
            if self.convert.ieee_float {
                if !matches!(bits, 32 | 64) {
                    return Err(WaveError::config(format!(
                        "IEEE float output supports 32 or 64 bits, got {}",
                        bits
                    )));
                }
            } else if !matches!(bits, 8 | 16 | 24 | 32) {
                return Err(WaveError::config(format!(
                    "PCM output supports 8, 16, 24 or 32 bits, got {}",
                    bits
                )));
            }
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaveError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WaveError::config(format!("Failed to write config file: {}", e)))
    }
}
