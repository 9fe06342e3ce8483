//! Sea-level, break and foam classification.

use glam::{Vec2, Vec3};

use super::bank::WaveBank;
use super::field::{Jacobian, PhaseTerms, SurfaceGeometry};
use super::ramp::interp;
use crate::params::{MaskParams, Ramp};

/// Full evaluation result at one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub displacement: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub jacobian: Jacobian,
    pub sea_level_mask: f32,
    pub break_mask: f32,
    pub foam_mask: f32,
    pub foam_mask_two: f32,
}

impl SurfaceSample {
    pub fn classify(geometry: SurfaceGeometry, masks: &MaskParams) -> Self {
        let j = geometry.jacobian.determinant;
        Self {
            displacement: geometry.displacement,
            normal: geometry.normal,
            tangent: geometry.tangent,
            bitangent: geometry.bitangent,
            jacobian: geometry.jacobian,
            sea_level_mask: sea_level_mask(geometry.displacement.z, masks),
            break_mask: break_mask(j),
            foam_mask: foam_mask(j, masks),
            foam_mask_two: foam_mask_two(j, masks.foam_two_brightness, masks.foam_two_threshold),
        }
    }
}

/// 1 where the surface folds over itself
pub fn break_mask(determinant: f32) -> f32 {
    if determinant < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// 1 below the foam threshold, optionally fading out above it
pub fn foam_mask(determinant: f32, masks: &MaskParams) -> f32 {
    let threshold = masks.foam_threshold;
    if determinant < threshold {
        return 1.0;
    }
    match masks.foam_ramp {
        Some(Ramp { size, exponent }) if determinant <= threshold + size => {
            interp(exponent, (threshold + size - determinant) / size)
        }
        _ => 0.0,
    }
}

/// `clamp(brightness * (threshold - J), 0, 1)`
pub fn foam_mask_two(determinant: f32, brightness: f32, threshold: f32) -> f32 {
    (brightness * (-determinant + threshold)).clamp(0.0, 1.0)
}

/// 1 at or above sea level, optionally fading to 0 across a band below it
pub fn sea_level_mask(height: f32, masks: &MaskParams) -> f32 {
    let sea_level = masks.sea_level;
    if height >= sea_level {
        return 1.0;
    }
    match masks.sea_level_ramp {
        Some(Ramp { size, exponent }) if height > sea_level - size => {
            interp(exponent, (height - (sea_level - size)) / size)
        }
        _ => 0.0,
    }
}

impl WaveBank {
    /// Evaluate every output field at `position` and `time`
    pub fn sample(&self, position: Vec2, time: f32, masks: &MaskParams) -> SurfaceSample {
        SurfaceSample::classify(self.geometry(position, time), masks)
    }

    /// As [`WaveBank::sample`], reusing a caller-owned phase buffer
    pub fn sample_with(
        &self,
        terms: &mut PhaseTerms,
        position: Vec2,
        time: f32,
        masks: &MaskParams,
    ) -> SurfaceSample {
        terms.recompute(self, position, time);
        SurfaceSample::classify(SurfaceGeometry::from_phase_terms(self, terms), masks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::StandardNoise;
    use crate::params::WaveParams;

    fn ramped(threshold: f32, size: f32, exponent: f32) -> MaskParams {
        MaskParams {
            foam_threshold: threshold,
            foam_ramp: Some(Ramp { size, exponent }),
            sea_level: threshold,
            sea_level_ramp: Some(Ramp { size, exponent }),
            ..Default::default()
        }
    }

    #[test]
    fn test_break_mask_sign() {
        assert_eq!(break_mask(-0.01), 1.0);
        assert_eq!(break_mask(0.0), 0.0);
        assert_eq!(break_mask(0.5), 0.0);
    }

    #[test]
    fn test_foam_hard_threshold() {
        let masks = MaskParams {
            foam_threshold: 0.3,
            ..Default::default()
        };
        assert_eq!(foam_mask(0.29, &masks), 1.0);
        assert_eq!(foam_mask(0.3, &masks), 0.0);
        assert_eq!(foam_mask(0.31, &masks), 0.0);
    }

    #[test]
    fn test_foam_linear_ramp() {
        let masks = ramped(0.0, 1.0, 0.0);
        assert_eq!(foam_mask(-0.5, &masks), 1.0);
        assert!((foam_mask(0.25, &masks) - 0.75).abs() < 1e-6);
        assert!((foam_mask(0.75, &masks) - 0.25).abs() < 1e-6);
        assert_eq!(foam_mask(1.0, &masks), 0.0);
        assert_eq!(foam_mask(1.5, &masks), 0.0);
    }

    #[test]
    fn test_foam_ramp_uses_shared_easing() {
        let masks = ramped(0.0, 2.0, 3.0);
        assert_eq!(foam_mask(0.5, &masks), interp(3.0, 0.75));
    }

    #[test]
    fn test_foam_two_clamped_and_monotonic() {
        for j in [-3.0, -0.2, 0.0, 0.4, 2.0] {
            let mut previous = 0.0;
            for step in 0..=20 {
                let brightness = step as f32 * 0.5;
                let value = foam_mask_two(j, brightness, 0.1);
                assert!((0.0..=1.0).contains(&value));
                assert!(value >= previous, "J = {}, brightness = {}", j, brightness);
                previous = value;
            }
        }
        assert_eq!(foam_mask_two(-0.4, 1.0, 0.1), 0.5);
    }

    #[test]
    fn test_sea_level_ramp() {
        let hard = MaskParams {
            sea_level: 1.0,
            ..Default::default()
        };
        assert_eq!(sea_level_mask(1.0, &hard), 1.0);
        assert_eq!(sea_level_mask(0.99, &hard), 0.0);

        let soft = ramped(1.0, 2.0, 0.0);
        assert_eq!(sea_level_mask(2.0, &soft), 1.0);
        assert!((sea_level_mask(0.0, &soft) - 0.5).abs() < 1e-6);
        assert_eq!(sea_level_mask(-1.0, &soft), 0.0);
        assert_eq!(sea_level_mask(-5.0, &soft), 0.0);
    }

    #[test]
    fn test_zero_amplitude_is_flat_and_unbroken() {
        let params = WaveParams {
            amplitude: 0.0,
            ..Default::default()
        };
        let bank = WaveBank::build(&params, &StandardNoise::default());
        let masks = MaskParams::default();

        for (x, y, t) in [(0.0, 0.0, 0.0), (12.5, -40.0, 3.0), (-300.0, 77.0, 19.5)] {
            let sample = bank.sample(Vec2::new(x, y), t, &masks);
            assert_eq!(sample.displacement, Vec3::ZERO);
            assert_eq!(sample.jacobian.xy, 0.0);
            assert!(sample.jacobian.determinant >= 0.0);
            assert_eq!(sample.break_mask, 0.0);
        }
    }

    #[test]
    fn test_sample_with_matches_sample() {
        let bank = WaveBank::build(&WaveParams::default(), &StandardNoise::default());
        let masks = MaskParams::default();
        let mut terms = PhaseTerms::default();
        let p = Vec2::new(4.0, 9.0);
        assert_eq!(bank.sample_with(&mut terms, p, 1.0, &masks), bank.sample(p, 1.0, &masks));
    }
}
