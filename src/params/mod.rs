//! Parameter definitions with documented units and ranges.
//!
//! Everything an ocean needs is grouped in [`OceanConfig`], which can be
//! loaded from and saved to a TOML preset:
//!
//! ```toml
//! [waves]
//! octaves = 4
//! waves_per_octave = 8
//! wavelength = 80.0
//! randomness = "rand1"
//!
//! [masks]
//! foam_threshold = 0.3
//! foam_ramp = { size = 0.5, exponent = 2.0 }
//!
//! [coordinates]
//! scale = [200.0, 200.0]
//! ```

mod masks;
mod render;
mod surface;
mod waves;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError, Violation};

// Re-export all types
pub use masks::{MaskParams, Ramp};
pub use render::{Channel, RasterConfig};
pub use surface::CoordinateMapping;
pub use waves::{WaveParams, MAX_OCTAVES, MAX_WAVES, MAX_WAVES_PER_OCTAVE};

/// Complete ocean configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    pub waves: WaveParams,
    pub masks: MaskParams,
    pub coordinates: CoordinateMapping,
}

impl OceanConfig {
    /// Validate every section, reporting all violations at once
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();

        if let Err(e) = self.waves.validate() {
            errors.extend(e);
        }
        if let Err(e) = self.masks.validate() {
            errors.extend(e);
        }
        if !self.coordinates.scale.is_finite() {
            errors.push(Violation::NonFinite {
                name: "coordinates.scale",
            });
        }
        if !self.coordinates.offset.is_finite() {
            errors.push(Violation::NonFinite {
                name: "coordinates.offset",
            });
        }

        errors.into_result()
    }

    /// Parse and validate a TOML preset
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_toml_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML preset without validating it
    ///
    /// Use this when the values are adjusted afterwards; call
    /// [`OceanConfig::validate`] once they are final.
    pub fn parse_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read and validate a preset file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a preset file without validating it
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml_str(&content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
