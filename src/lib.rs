//! swellfield - procedural Gerstner ocean surface synthesis
//!
//! A compact parameter set is turned into an immutable [`ocean::WaveBank`],
//! which is then evaluated per sample into displacement, surface
//! derivatives and sea-level / foam / break masks.

pub mod cli;
pub mod error;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod rendering;
