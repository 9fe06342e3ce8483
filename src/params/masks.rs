//! Sea-level and foam classification settings.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violation};

/// Soft transition band for a mask
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    /// Width of the band (same units as the classified quantity, > 0)
    pub size: f32,

    /// Easing shape: 0 = linear, > 0 exponential, < 0 logarithmic
    pub exponent: f32,
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            size: 1.0,
            exponent: 0.0,
        }
    }
}

/// Thresholds that turn the evaluated field into masks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Height above which the sea-level mask is 1
    pub sea_level: f32,

    /// Optional band below `sea_level` over which the mask fades to 0
    pub sea_level_ramp: Option<Ramp>,

    /// Jacobian determinant below which the surface is foam
    pub foam_threshold: f32,

    /// Optional band above `foam_threshold` over which foam fades out
    pub foam_ramp: Option<Ramp>,

    /// Gain of the secondary foam mask
    pub foam_two_brightness: f32,

    /// Offset added to `-J` by the secondary foam mask
    pub foam_two_threshold: f32,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            sea_level: 0.0,
            sea_level_ramp: None,
            foam_threshold: 0.3,
            foam_ramp: None,
            foam_two_brightness: 1.0,
            foam_two_threshold: 0.0,
        }
    }
}

impl MaskParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();

        for (name, value) in [
            ("sea_level", self.sea_level),
            ("foam_threshold", self.foam_threshold),
            ("foam_two_brightness", self.foam_two_brightness),
            ("foam_two_threshold", self.foam_two_threshold),
        ] {
            if !value.is_finite() {
                errors.push(Violation::NonFinite { name });
            }
        }

        for (name, ramp) in [("sea_level", self.sea_level_ramp), ("foam", self.foam_ramp)] {
            let Some(ramp) = ramp else {
                continue;
            };
            if !ramp.size.is_finite() || !ramp.exponent.is_finite() {
                errors.push(Violation::NonFinite { name });
            } else if ramp.size <= 0.0 {
                errors.push(Violation::NonPositiveRampSize {
                    name,
                    got: ramp.size,
                });
            }
        }

        if self.foam_two_brightness < 0.0 {
            errors.push(Violation::NegativeParameter {
                name: "foam_two_brightness",
                got: self.foam_two_brightness,
            });
        }

        errors.into_result()
    }
}
