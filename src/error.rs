//! Error types for configuration, validation and raster export.

use std::path::PathBuf;

use thiserror::Error;

/// A single violated configuration constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("octaves must be in 1..={max}, got {got}")]
    OctavesOutOfRange { got: usize, max: usize },

    #[error("waves per octave must be in 1..={max}, got {got}")]
    WavesOutOfRange { got: usize, max: usize },

    #[error("total wave count {got} exceeds bank capacity {max}")]
    TooManyWaves { got: usize, max: usize },

    #[error("wavelength must be > 0, got {0}")]
    NonPositiveWavelength(f32),

    #[error("amplitude must be >= 0, got {0}")]
    NegativeAmplitude(f32),

    #[error("{name} ramp size must be > 0, got {got}")]
    NonPositiveRampSize { name: &'static str, got: f32 },

    #[error("{name} must be >= 0, got {got}")]
    NegativeParameter { name: &'static str, got: f32 },

    #[error("{name} must be in {min}..={max} degrees, got {got}")]
    AngleOutOfRange {
        name: &'static str,
        got: f32,
        min: f32,
        max: f32,
    },

    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
}

/// Every constraint violated by a configuration, collected in one pass.
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("{}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Merge violations collected by another validator.
    pub fn extend(&mut self, other: ValidationError) {
        self.violations.extend(other.violations);
    }
}

fn summarize(violations: &[Violation]) -> String {
    let mut text = format!(
        "invalid ocean configuration ({} violation{})",
        violations.len(),
        if violations.len() == 1 { "" } else { "s" }
    );
    for violation in violations {
        text.push_str(&format!("\n  - {violation}"));
    }
    text
}

/// Failure loading or saving a TOML preset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read preset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write preset {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse preset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize preset: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Failure writing a rendered field.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
}
