//! Mapping from surface (UV) coordinates to wave-field positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Affine map `position = uv * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateMapping {
    /// World units spanned by one UV unit along each axis
    pub scale: Vec2,

    /// Constant shift applied after scaling (world units)
    pub offset: Vec2,
}

impl Default for CoordinateMapping {
    fn default() -> Self {
        Self {
            scale: Vec2::splat(200.0),
            offset: Vec2::ZERO,
        }
    }
}

impl CoordinateMapping {
    pub fn to_position(&self, uv: Vec2) -> Vec2 {
        uv * self.scale + self.offset
    }
}
