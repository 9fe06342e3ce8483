//! Wave bank parameters and their guardrails.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violation};
use crate::noise::Randomness;

/// Maximum octave count
pub const MAX_OCTAVES: usize = 12;

/// Maximum waves per octave
pub const MAX_WAVES_PER_OCTAVE: usize = 32;

/// Maximum total waves in a bank
pub const MAX_WAVES: usize = 384;

/// Artist parameters for building a wave bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Number of octaves; each halves the wavelength band of the previous one
    pub octaves: usize,

    /// Waves per octave
    pub waves_per_octave: usize,

    /// Centre wavelength of the first octave (world units)
    pub wavelength: f32,

    /// Wave height at `wavelength`; scaled proportionally for other wavelengths
    pub amplitude: f32,

    /// How strongly amplitude falls off in finer octaves (0 = no falloff)
    pub amplitude_decay: f32,

    /// Overall crest sharpness; values above 1 fold the surface
    pub steepness: f32,

    /// How strongly steepness falls off in finer octaves
    pub steepness_decay: f32,

    /// Mean travel direction, degrees counter-clockwise from +x (0-360)
    pub direction_deg: f32,

    /// Maximum angular spread either side of `direction_deg` (0-180)
    pub deviation_deg: f32,

    /// Phase speed multiplier
    pub speed: f32,

    /// Randomness seed
    pub seed: u32,

    /// Source of per-wave randomness
    pub randomness: Randomness,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            waves_per_octave: 8,
            wavelength: 80.0,
            amplitude: 3.0,
            amplitude_decay: 1.0,
            steepness: 0.5,
            steepness_decay: 1.0,
            direction_deg: 45.0,
            deviation_deg: 45.0,
            speed: 1.0,
            seed: 0,
            randomness: Randomness::Rand1,
        }
    }
}

impl WaveParams {
    /// Total number of waves the bank will hold
    pub fn total_waves(&self) -> usize {
        self.octaves * self.waves_per_octave
    }

    /// Valid, but steep enough that crests fold over across most of the surface
    pub fn folds_broadly(&self) -> bool {
        self.steepness > 1.0
    }

    /// Check every guardrail, collecting all violations
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();

        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            errors.push(Violation::OctavesOutOfRange {
                got: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        if !(1..=MAX_WAVES_PER_OCTAVE).contains(&self.waves_per_octave) {
            errors.push(Violation::WavesOutOfRange {
                got: self.waves_per_octave,
                max: MAX_WAVES_PER_OCTAVE,
            });
        }
        if self.total_waves() > MAX_WAVES {
            errors.push(Violation::TooManyWaves {
                got: self.total_waves(),
                max: MAX_WAVES,
            });
        }

        let scalars = [
            ("wavelength", self.wavelength),
            ("amplitude", self.amplitude),
            ("amplitude_decay", self.amplitude_decay),
            ("steepness", self.steepness),
            ("steepness_decay", self.steepness_decay),
            ("direction_deg", self.direction_deg),
            ("deviation_deg", self.deviation_deg),
            ("speed", self.speed),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                errors.push(Violation::NonFinite { name });
            }
        }

        if self.wavelength <= 0.0 {
            errors.push(Violation::NonPositiveWavelength(self.wavelength));
        }
        if self.amplitude < 0.0 {
            errors.push(Violation::NegativeAmplitude(self.amplitude));
        }
        for (name, got) in [
            ("amplitude_decay", self.amplitude_decay),
            ("steepness", self.steepness),
            ("steepness_decay", self.steepness_decay),
            ("speed", self.speed),
        ] {
            if got < 0.0 {
                errors.push(Violation::NegativeParameter { name, got });
            }
        }
        for (name, got, max) in [
            ("direction_deg", self.direction_deg, 360.0),
            ("deviation_deg", self.deviation_deg, 180.0),
        ] {
            if !(0.0..=max).contains(&got) {
                errors.push(Violation::AngleOutOfRange {
                    name,
                    got,
                    min: 0.0,
                    max,
                });
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WaveParams::default().validate().is_ok());
        assert_eq!(WaveParams::default().total_waves(), 32);
    }

    #[test]
    fn test_capacity_limits() {
        let params = WaveParams {
            octaves: 12,
            waves_per_octave: 32,
            ..Default::default()
        };
        assert_eq!(params.total_waves(), MAX_WAVES);
        assert!(params.validate().is_ok());

        let params = WaveParams {
            octaves: 13,
            waves_per_octave: 33,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err
            .violations
            .contains(&Violation::OctavesOutOfRange { got: 13, max: 12 }));
        assert!(err
            .violations
            .contains(&Violation::WavesOutOfRange { got: 33, max: 32 }));
        assert!(err
            .violations
            .contains(&Violation::TooManyWaves { got: 429, max: 384 }));
    }

    #[test]
    fn test_zero_counts_rejected() {
        let params = WaveParams {
            octaves: 0,
            waves_per_octave: 0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().violations.len(), 2);
    }

    #[test]
    fn test_all_violations_reported_together() {
        let params = WaveParams {
            wavelength: 0.0,
            amplitude: -2.0,
            speed: -1.0,
            deviation_deg: 200.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.violations.len(), 4);
        assert!(err.violations.contains(&Violation::NonPositiveWavelength(0.0)));
        assert!(err.violations.contains(&Violation::NegativeAmplitude(-2.0)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = WaveParams {
            steepness: f32::NAN,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err
            .violations
            .contains(&Violation::NonFinite { name: "steepness" }));
    }

    #[test]
    fn test_steep_params_are_valid_but_fold() {
        let params = WaveParams {
            steepness: 5.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert!(params.folds_broadly());
        assert!(!WaveParams::default().folds_broadly());
    }

    #[test]
    fn test_zero_amplitude_allowed() {
        let params = WaveParams {
            amplitude: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
