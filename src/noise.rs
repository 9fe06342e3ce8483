//! Randomness sources for wave-bank generation.
//!
//! The builder draws one scalar in `[0, 1]` per wave. Which function produces
//! that scalar, and which coordinates it is fed, is selected by [`Randomness`].
//! Gradient variants are backed by the `noise` crate (Perlin, OpenSimplex);
//! hash and cell variants use an integer bit mixer; `Rand*` variants use the
//! closed-form sine hash [`rand`].

use std::fmt;
use std::str::FromStr;

use noise::{NoiseFn, OpenSimplex, Perlin};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selectable randomness variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomness {
    /// Hash of absolute wave index and seed
    Hash1,
    /// Hash of normalized wave index and seed
    Hash2,
    /// Hash of local (in-octave) index and seed offset by octave
    Hash3,
    /// Cell noise of absolute wave index and seed
    Cell1,
    /// Cell noise of normalized wave index and seed
    Cell2,
    /// Sine hash of absolute wave index plus seed
    #[default]
    Rand1,
    /// Sine hash of normalized wave index plus seed
    Rand2,
    /// Sine hash of local index plus seed and octave
    Rand3,
    /// Perlin gradient noise of normalized index and seed
    Perlin,
    /// Evenly spaced draws: `local / waves_per_octave`
    #[serde(rename = "even")]
    EvenDistribution,
    /// OpenSimplex gradient noise of normalized index and seed
    Simplex,
}

impl Randomness {
    pub const ALL: [Randomness; 11] = [
        Randomness::Hash1,
        Randomness::Hash2,
        Randomness::Hash3,
        Randomness::Cell1,
        Randomness::Cell2,
        Randomness::Rand1,
        Randomness::Rand2,
        Randomness::Rand3,
        Randomness::Perlin,
        Randomness::EvenDistribution,
        Randomness::Simplex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Randomness::Hash1 => "hash1",
            Randomness::Hash2 => "hash2",
            Randomness::Hash3 => "hash3",
            Randomness::Cell1 => "cell1",
            Randomness::Cell2 => "cell2",
            Randomness::Rand1 => "rand1",
            Randomness::Rand2 => "rand2",
            Randomness::Rand3 => "rand3",
            Randomness::Perlin => "perlin",
            Randomness::EvenDistribution => "even",
            Randomness::Simplex => "simplex",
        }
    }

    /// Coordinates fed to [`NoiseSource::sample`] for one wave slot.
    pub fn coordinates(self, slot: WaveSlot, seed: u32) -> (f32, f32) {
        let seed = seed as f32;
        let absolute = slot.index as f32;
        let normalized = slot.index as f32 / slot.total as f32;
        let local = slot.local as f32;

        match self {
            Randomness::Hash1 | Randomness::Cell1 | Randomness::Rand1 => (absolute, seed),
            Randomness::Hash2 | Randomness::Cell2 | Randomness::Rand2 => (normalized, seed),
            Randomness::Hash3 | Randomness::Rand3 => (local, seed + slot.octave as f32),
            // Gradient noise is zero on the integer lattice
            Randomness::Perlin | Randomness::Simplex => (normalized + 0.5, seed + 0.5),
            Randomness::EvenDistribution => (local, slot.waves_per_octave as f32),
        }
    }
}

impl fmt::Display for Randomness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown randomness variant '{0}' (expected one of hash1, hash2, hash3, cell1, cell2, rand1, rand2, rand3, perlin, even, simplex)")]
pub struct ParseRandomnessError(pub String);

impl FromStr for Randomness {
    type Err = ParseRandomnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if matches!(lowered.as_str(), "evendistribution" | "even_distribution") {
            return Ok(Randomness::EvenDistribution);
        }
        Randomness::ALL
            .into_iter()
            .find(|variant| variant.name() == lowered)
            .ok_or_else(|| ParseRandomnessError(s.to_string()))
    }
}

/// Position of a wave inside the bank, used to derive noise coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSlot {
    /// Global index `octave * waves_per_octave + local`
    pub index: usize,
    /// Index within the octave
    pub local: usize,
    pub octave: usize,
    pub waves_per_octave: usize,
    /// Total waves in the bank
    pub total: usize,
}

/// Scalar randomness in `[0, 1]` for a variant and two coordinates.
pub trait NoiseSource {
    fn sample(&self, variant: Randomness, a: f32, b: f32) -> f32;
}

/// `fract(sin(x * 91.3458) * 47453.5453)`, with `fract(x) = x - floor(x)`.
pub fn rand(x: f32) -> f32 {
    let v = (x * 91.3458).sin() * 47453.5453;
    v - v.floor()
}

/// Default noise source for every [`Randomness`] variant.
#[derive(Debug, Clone, Copy)]
pub struct StandardNoise {
    perlin: Perlin,
    simplex: OpenSimplex,
}

impl StandardNoise {
    /// Create new noise source; `seed` selects the gradient permutation tables
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            simplex: OpenSimplex::new(seed),
        }
    }

    fn hash_unit(a: u32, b: u32) -> f32 {
        let h = mix(a ^ mix(b.wrapping_add(0x9e37_79b9)));
        // Top 24 bits map exactly onto f32 mantissa precision
        (h >> 8) as f32 / (1u32 << 24) as f32
    }

    fn gradient_unit(value: f64) -> f32 {
        ((value as f32 + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl Default for StandardNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for StandardNoise {
    fn sample(&self, variant: Randomness, a: f32, b: f32) -> f32 {
        match variant {
            Randomness::Hash1 | Randomness::Hash2 | Randomness::Hash3 => {
                Self::hash_unit(a.to_bits(), b.to_bits())
            }
            Randomness::Cell1 | Randomness::Cell2 => {
                Self::hash_unit(a.floor() as i32 as u32, b.floor() as i32 as u32)
            }
            Randomness::Rand1 | Randomness::Rand2 | Randomness::Rand3 => rand(a + b),
            Randomness::Perlin => Self::gradient_unit(self.perlin.get([a as f64, b as f64])),
            Randomness::Simplex => Self::gradient_unit(self.simplex.get([a as f64, b as f64])),
            Randomness::EvenDistribution => {
                if b > 0.0 {
                    (a / b).clamp(0.0, 1.0)
                } else {
                    0.0
                }
            }
        }
    }
}

// lowbias32 integer finalizer
fn mix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}
