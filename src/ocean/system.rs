//! High-level ocean system: validated configuration plus its built bank.

use glam::Vec2;
use log::{info, warn};

use super::bank::WaveBank;
use super::field::PhaseTerms;
use super::mask::SurfaceSample;
use crate::error::ValidationError;
use crate::noise::NoiseSource;
use crate::params::OceanConfig;

/// Ocean ready for sampling; immutable and shareable across threads
#[derive(Debug, Clone)]
pub struct OceanSystem {
    bank: WaveBank,
    config: OceanConfig,
}

impl OceanSystem {
    /// Validate the whole configuration once and build the wave bank
    pub fn new(config: OceanConfig, noise: &impl NoiseSource) -> Result<Self, ValidationError> {
        config.validate()?;
        if config.waves.folds_broadly() {
            warn!(
                "steepness {} > 1: crests will fold over across most of the surface",
                config.waves.steepness
            );
        }
        let bank = WaveBank::build(&config.waves, noise);

        let (min, max) = bank
            .waves()
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), w| {
                (lo.min(w.wavelength), hi.max(w.wavelength))
            });
        info!(
            "ocean ready: wavelengths {:.3}..{:.3}, coordinate scale {:?}",
            min, max, config.coordinates.scale
        );

        Ok(Self { bank, config })
    }

    /// Sample at a wave-field position
    pub fn sample(&self, position: Vec2, time_s: f32) -> SurfaceSample {
        self.bank.sample(position, time_s, &self.config.masks)
    }

    /// Sample at a surface coordinate, through the coordinate mapping
    pub fn sample_uv(&self, uv: Vec2, time_s: f32) -> SurfaceSample {
        self.sample(self.config.coordinates.to_position(uv), time_s)
    }

    /// As [`OceanSystem::sample_uv`], reusing a phase buffer across calls
    pub fn sample_uv_with(&self, terms: &mut PhaseTerms, uv: Vec2, time_s: f32) -> SurfaceSample {
        let position = self.config.coordinates.to_position(uv);
        self.bank
            .sample_with(terms, position, time_s, &self.config.masks)
    }

    pub fn bank(&self) -> &WaveBank {
        &self.bank
    }

    pub fn config(&self) -> &OceanConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::StandardNoise;
    use crate::params::CoordinateMapping;

    #[test]
    fn test_invalid_config_rejected_before_build() {
        let mut config = OceanConfig::default();
        config.waves.octaves = 0;
        config.waves.wavelength = 0.0;
        let err = OceanSystem::new(config, &StandardNoise::default()).unwrap_err();
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn test_steep_config_builds() {
        let mut config = OceanConfig::default();
        config.waves.steepness = 3.0;
        let ocean = OceanSystem::new(config, &StandardNoise::default()).unwrap();
        assert!(ocean.config().waves.folds_broadly());
        assert_eq!(ocean.bank().len(), 32);
    }

    #[test]
    fn test_sample_uv_uses_mapping() {
        let mut config = OceanConfig::default();
        config.coordinates = CoordinateMapping {
            scale: Vec2::splat(100.0),
            offset: Vec2::new(5.0, -5.0),
        };
        let ocean = OceanSystem::new(config, &StandardNoise::default()).unwrap();

        let uv = Vec2::new(0.25, 0.5);
        assert_eq!(
            ocean.sample_uv(uv, 2.0),
            ocean.sample(Vec2::new(30.0, 45.0), 2.0)
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let ocean = OceanSystem::new(OceanConfig::default(), &StandardNoise::default()).unwrap();
        let positions: Vec<Vec2> = (0..8).map(|i| Vec2::new(i as f32 * 7.0, 3.0)).collect();
        let expected: Vec<SurfaceSample> =
            positions.iter().map(|&p| ocean.sample(p, 1.5)).collect();

        let actual: Vec<SurfaceSample> = std::thread::scope(|scope| {
            let handles: Vec<_> = positions
                .iter()
                .map(|&p| {
                    let ocean = &ocean;
                    scope.spawn(move || ocean.sample(p, 1.5))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(actual, expected);
    }
}
