//! Procedural ocean surface: wave bank construction and per-sample evaluation.

mod bank;
mod field;
mod mask;
mod ramp;
mod system;

// Re-export public types
pub use bank::{ElementaryWave, WaveBank, GRAVITY};
pub use field::{Jacobian, PhaseTerms, SurfaceGeometry};
pub use mask::{break_mask, foam_mask, foam_mask_two, sea_level_mask, SurfaceSample};
pub use ramp::{interp, LINEAR_EPSILON};
pub use system::OceanSystem;
