//! swellfield - render procedural Gerstner ocean fields
//!
//! Builds a wave bank from a preset and command-line overrides, evaluates it
//! over a UV grid and writes the requested channel as a PNG.

use clap::Parser;
use log::info;

use swellfield::cli::{format_bank, Args};
use swellfield::noise::StandardNoise;
use swellfield::ocean::OceanSystem;
use swellfield::rendering::FieldRaster;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.ocean_config()?;
    if let Some(path) = &args.write_preset {
        config.save_to_file(path)?;
        info!("wrote preset to {}", path.display());
    }

    let noise = StandardNoise::new(config.waves.seed);
    let ocean = OceanSystem::new(config, &noise)?;

    if args.dump_bank {
        print!("{}", format_bank(ocean.bank()));
    }

    let raster = FieldRaster::evaluate(&ocean, &args.raster_config())?;
    raster.save_image(args.channel, &args.output)?;

    if let Some(path) = &args.raw {
        raster.write_raw(path)?;
    }

    Ok(())
}
