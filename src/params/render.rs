//! Raster export configuration.

use std::fmt;
use std::str::FromStr;

/// Field channel written to an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Vertical displacement, normalized to the raster's range
    #[default]
    Height,
    /// Displacement xyz, each component normalized to its range
    Displacement,
    /// Surface normal remapped to `n * 0.5 + 0.5`
    Normal,
    SeaLevel,
    Break,
    Foam,
    FoamTwo,
    /// Jacobian determinant as `0.5 + 0.5 * J`
    Jacobian,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::Height,
        Channel::Displacement,
        Channel::Normal,
        Channel::SeaLevel,
        Channel::Break,
        Channel::Foam,
        Channel::FoamTwo,
        Channel::Jacobian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Height => "height",
            Channel::Displacement => "displacement",
            Channel::Normal => "normal",
            Channel::SeaLevel => "sea_level",
            Channel::Break => "break",
            Channel::Foam => "foam",
            Channel::FoamTwo => "foam_two",
            Channel::Jacobian => "jacobian",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase().replace('-', "_");
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == lowered)
            .ok_or_else(|| format!("unknown channel '{}'", s))
    }
}

/// Raster export configuration
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Image width (pixels)
    pub width: u32,

    /// Image height (pixels)
    pub height: u32,

    /// Evaluation time (seconds)
    pub time_s: f32,

    /// Worker threads; 0 uses the available parallelism
    pub threads: usize,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            time_s: 0.0,
            threads: 0,
        }
    }
}

impl RasterConfig {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of worker threads actually used
    pub fn worker_count(&self) -> usize {
        let requested = if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.threads
        };
        requested.clamp(1, (self.height as usize).max(1))
    }
}
