//! Easing curve shared by the sea-level and foam ramps.

/// Below this magnitude the exponent is treated as zero (linear ramp)
pub const LINEAR_EPSILON: f32 = 1e-4;

/// Ease `percent` in `[0, 1]` with shape `k`.
///
/// `k > 0` eases exponentially, `k < 0` logarithmically, `k ≈ 0` linearly.
/// Both ends are fixed: `interp(k, 0) = 0`, `interp(k, 1) = 1`.
pub fn interp(k: f32, percent: f32) -> f32 {
    if k.abs() < LINEAR_EPSILON {
        percent
    } else {
        ((k * percent).exp() - 1.0) / (k.exp() - 1.0)
    }
}
