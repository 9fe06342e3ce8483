//! Wave bank: the immutable set of elementary waves built from [`WaveParams`].

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use log::{debug, info};

use crate::error::ValidationError;
use crate::noise::{NoiseSource, Randomness, WaveSlot};
use crate::params::WaveParams;

/// Gravitational acceleration used for phase speed (m/s²)
pub const GRAVITY: f32 = 9.8;

/// Per-octave wavelength band is `[current / SPREAD, current * SPREAD]`
const WAVELENGTH_SPREAD: f32 = 1.5;

/// One traveling sinusoid of the superposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementaryWave {
    /// Spatial period (world units)
    pub wavelength: f32,

    /// Vertical amplitude (world units)
    pub amplitude: f32,

    /// Unit horizontal travel direction (z = 0)
    pub direction: Vec3,

    /// `2 / wavelength`
    pub angular_frequency: f32,

    /// Steepness coefficient Q, normalized by the bank size
    pub steepness: f32,

    /// Phase advance per second
    pub phase_speed: f32,

    pub octave: usize,

    /// Global index within the bank
    pub index: usize,
}

impl ElementaryWave {
    /// Phase at a horizontal position and time
    #[inline]
    pub fn phase(&self, x: f32, y: f32, time: f32) -> f32 {
        self.angular_frequency * (self.direction.x * x + self.direction.y * y)
            + self.phase_speed * time
    }

    /// Time for the wave to retrace itself
    pub fn period(&self) -> f32 {
        TAU / self.phase_speed
    }
}

/// Immutable bank of elementary waves
#[derive(Debug, Clone, PartialEq)]
pub struct WaveBank {
    waves: Vec<ElementaryWave>,
    octaves: usize,
    waves_per_octave: usize,
}

impl WaveBank {
    /// Validate `params` and build the bank
    pub fn try_build(
        params: &WaveParams,
        noise: &impl NoiseSource,
    ) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(Self::build(params, noise))
    }

    /// Build the bank from already-validated parameters
    ///
    /// Deterministic: identical `params` and noise source always produce an
    /// identical bank.
    pub fn build(params: &WaveParams, noise: &impl NoiseSource) -> Self {
        let octaves = params.octaves;
        let waves_per_octave = params.waves_per_octave;
        let total = params.total_waves();
        let amplitude_ratio = params.amplitude / params.wavelength;

        let mut waves = Vec::with_capacity(total);

        for octave in 0..octaves {
            let current = params.wavelength / 2f32.powi(octave as i32);
            let min_wavelength = current / WAVELENGTH_SPREAD;
            let max_wavelength = current * WAVELENGTH_SPREAD;

            let decay_fraction = octave as f32 / octaves as f32;
            let amplitude_decay = 1.0 / (1.0 + decay_fraction * params.amplitude_decay);
            let steepness_decay =
                1.0 / (1.0 + decay_fraction * params.steepness_decay * params.steepness);

            debug!(
                "octave {}: wavelength {:.3}..{:.3}, amplitude decay {:.3}, steepness decay {:.3}",
                octave, min_wavelength, max_wavelength, amplitude_decay, steepness_decay
            );

            for local in 0..waves_per_octave {
                let slot = WaveSlot {
                    index: octave * waves_per_octave + local,
                    local,
                    octave,
                    waves_per_octave,
                    total,
                };
                let rng = draw(params.randomness, slot, params.seed, noise);

                let wavelength = lerp(min_wavelength, max_wavelength, rng);
                let amplitude = wavelength * amplitude_ratio * amplitude_decay;
                let angular_frequency = 2.0 / wavelength;

                let intensity = amplitude * angular_frequency * total as f32;
                let steepness = if intensity > 0.0 {
                    params.steepness * steepness_decay / intensity
                } else {
                    0.0
                };

                let phase_speed = params.speed * (GRAVITY * (TAU / wavelength)).sqrt();

                let angle_deg = params.direction_deg
                    + lerp(-params.deviation_deg, params.deviation_deg, rng);
                let direction = Quat::from_rotation_z(angle_deg.to_radians()) * Vec3::X;

                waves.push(ElementaryWave {
                    wavelength,
                    amplitude,
                    direction,
                    angular_frequency,
                    steepness,
                    phase_speed,
                    octave,
                    index: slot.index,
                });
            }
        }

        info!(
            "built wave bank: {} octaves x {} waves ({} total), randomness {}, seed {}",
            octaves, waves_per_octave, total, params.randomness, params.seed
        );

        Self {
            waves,
            octaves,
            waves_per_octave,
        }
    }

    pub fn waves(&self) -> &[ElementaryWave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn octaves(&self) -> usize {
        self.octaves
    }

    pub fn waves_per_octave(&self) -> usize {
        self.waves_per_octave
    }

    /// Waves belonging to one octave
    pub fn octave(&self, octave: usize) -> &[ElementaryWave] {
        let start = (octave * self.waves_per_octave).min(self.waves.len());
        let end = (start + self.waves_per_octave).min(self.waves.len());
        &self.waves[start..end]
    }
}

fn draw(variant: Randomness, slot: WaveSlot, seed: u32, noise: &impl NoiseSource) -> f32 {
    let (a, b) = variant.coordinates(slot, seed);
    noise.sample(variant, a, b)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
