//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::noise::Randomness;
use crate::ocean::WaveBank;
use crate::params::{Channel, OceanConfig, RasterConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "swellfield")]
#[command(about = "Render procedural Gerstner ocean fields to images", long_about = None)]
pub struct Args {
    /// TOML preset to start from (defaults are used otherwise)
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Write the effective configuration to a TOML preset
    #[arg(long, value_name = "FILE")]
    pub write_preset: Option<PathBuf>,

    /// Number of octaves (1-12)
    #[arg(long)]
    pub octaves: Option<usize>,

    /// Waves per octave (1-32)
    #[arg(long)]
    pub waves: Option<usize>,

    /// Base wavelength (world units)
    #[arg(long)]
    pub wavelength: Option<f32>,

    /// Base amplitude (world units)
    #[arg(long)]
    pub amplitude: Option<f32>,

    /// Crest steepness
    #[arg(long)]
    pub steepness: Option<f32>,

    /// Mean wave direction (degrees)
    #[arg(long, value_name = "DEGREES")]
    pub direction: Option<f32>,

    /// Direction spread either side of the mean (degrees)
    #[arg(long, value_name = "DEGREES")]
    pub deviation: Option<f32>,

    /// Phase speed multiplier
    #[arg(long)]
    pub speed: Option<f32>,

    /// Randomness seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Randomness variant: hash1-3, cell1-2, rand1-3, perlin, even, simplex
    #[arg(long, value_name = "VARIANT")]
    pub randomness: Option<Randomness>,

    /// Evaluation time (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Output image size (width = height)
    #[arg(long, default_value_t = 512)]
    pub size: u32,

    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Channel to render: height, displacement, normal, sea_level, break, foam, foam_two, jacobian
    #[arg(long, default_value = "height")]
    pub channel: Channel,

    /// Output image path
    #[arg(long, default_value = "ocean.png")]
    pub output: PathBuf,

    /// Also write every field as raw f32 records
    #[arg(long, value_name = "FILE")]
    pub raw: Option<PathBuf>,

    /// Print the built wave bank
    #[arg(long)]
    pub dump_bank: bool,
}

impl Args {
    /// Load the preset (if any), apply command-line overrides, then validate
    pub fn ocean_config(&self) -> Result<OceanConfig, ConfigError> {
        let mut config = match &self.preset {
            Some(path) => OceanConfig::read_from_file(path)?,
            None => OceanConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut OceanConfig) {
        let waves = &mut config.waves;
        if let Some(v) = self.octaves {
            waves.octaves = v;
        }
        if let Some(v) = self.waves {
            waves.waves_per_octave = v;
        }
        if let Some(v) = self.wavelength {
            waves.wavelength = v;
        }
        if let Some(v) = self.amplitude {
            waves.amplitude = v;
        }
        if let Some(v) = self.steepness {
            waves.steepness = v;
        }
        if let Some(v) = self.direction {
            waves.direction_deg = v;
        }
        if let Some(v) = self.deviation {
            waves.deviation_deg = v;
        }
        if let Some(v) = self.speed {
            waves.speed = v;
        }
        if let Some(v) = self.seed {
            waves.seed = v;
        }
        if let Some(v) = self.randomness {
            waves.randomness = v;
        }
    }

    pub fn raster_config(&self) -> RasterConfig {
        RasterConfig {
            width: self.size,
            height: self.size,
            time_s: self.time,
            threads: self.threads,
        }
    }
}

/// Tabulate a bank, one wave per line
pub fn format_bank(bank: &WaveBank) -> String {
    let mut out = String::from(
        "index octave wavelength  amplitude  direction(deg)  w          q          phi\n",
    );
    for wave in bank.waves() {
        let angle = wave.direction.y.atan2(wave.direction.x).to_degrees();
        out.push_str(&format!(
            "{:>5} {:>6} {:>10.4} {:>10.4} {:>15.2} {:>10.5} {:>10.4} {:>10.4}\n",
            wave.index,
            wave.octave,
            wave.wavelength,
            wave.amplitude,
            angle,
            wave.angular_frequency,
            wave.steepness,
            wave.phase_speed
        ));
    }
    out
}
