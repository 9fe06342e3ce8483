//! Per-sample evaluation of a wave bank into displacement and derivatives.
//!
//! With phase `θ = w (D · p) + φ t` each wave contributes
//!
//! ```text
//! P(x, y) = (x + Q A Dx cos θ,  y + Q A Dy cos θ,  A sin θ)
//! ```
//!
//! and the analytic partials of that sum give the bitangent (∂P/∂x), the
//! tangent (∂P/∂y) and the horizontal Jacobian used for fold detection.

use glam::{Vec2, Vec3};

use super::bank::WaveBank;

/// Phase trig values for every wave in a bank, computed for one sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseTerms {
    pub cos: Vec<f32>,
    pub sin: Vec<f32>,
}

impl PhaseTerms {
    pub fn compute(bank: &WaveBank, position: Vec2, time: f32) -> Self {
        let mut terms = Self {
            cos: Vec::with_capacity(bank.len()),
            sin: Vec::with_capacity(bank.len()),
        };
        terms.recompute(bank, position, time);
        terms
    }

    /// Refill in place, reusing the allocation
    pub fn recompute(&mut self, bank: &WaveBank, position: Vec2, time: f32) {
        self.cos.clear();
        self.sin.clear();
        for wave in bank.waves() {
            let (sin, cos) = wave.phase(position.x, position.y, time).sin_cos();
            self.cos.push(cos);
            self.sin.push(sin);
        }
    }

    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }
}

/// Symmetric 2×2 horizontal Jacobian and its eigenvalues
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jacobian {
    pub xx: f32,
    pub xy: f32,
    pub yy: f32,
    /// Smaller eigenvalue
    pub min: f32,
    /// Larger eigenvalue
    pub plus: f32,
    /// `min * plus`; negative where the surface folds over
    pub determinant: f32,
}

impl Jacobian {
    pub fn new(xx: f32, xy: f32, yy: f32) -> Self {
        let mean = 0.5 * (xx + yy);
        let radius = 0.5 * ((xx - yy).powi(2) + 4.0 * xy * xy).sqrt();
        let min = mean - radius;
        let plus = mean + radius;
        Self {
            xx,
            xy,
            yy,
            min,
            plus,
            determinant: min * plus,
        }
    }
}

/// Geometric quantities at one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub displacement: Vec3,
    /// ∂P/∂y
    pub tangent: Vec3,
    /// ∂P/∂x
    pub bitangent: Vec3,
    pub normal: Vec3,
    pub jacobian: Jacobian,
}

impl SurfaceGeometry {
    /// Combine precomputed phase terms into displacement and derivatives
    pub fn from_phase_terms(bank: &WaveBank, terms: &PhaseTerms) -> Self {
        let mut displacement = Vec3::ZERO;
        let mut tangent = Vec3::new(0.0, 1.0, 0.0);
        let mut bitangent = Vec3::new(1.0, 0.0, 0.0);

        for ((wave, &cos), &sin) in bank.waves().iter().zip(&terms.cos).zip(&terms.sin) {
            let d = wave.direction;
            let qa = wave.steepness * wave.amplitude;
            let wa = wave.angular_frequency * wave.amplitude;
            let qwa_sin = wave.steepness * wa * sin;
            let wa_cos = wa * cos;

            displacement.x += qa * cos * d.x;
            displacement.y += qa * cos * d.y;
            displacement.z += wave.amplitude * sin;

            bitangent.x -= qwa_sin * d.x * d.x;
            bitangent.y -= qwa_sin * d.x * d.y;
            bitangent.z += wa_cos * d.x;

            tangent.x -= qwa_sin * d.x * d.y;
            tangent.y -= qwa_sin * d.y * d.y;
            tangent.z += wa_cos * d.y;
        }

        let normal = bitangent.cross(tangent).normalize_or_zero();
        let jacobian = Jacobian::new(bitangent.x, bitangent.y, tangent.y);

        Self {
            displacement,
            tangent,
            bitangent,
            normal,
            jacobian,
        }
    }
}

impl WaveBank {
    /// Displacement and derivatives at `position` and `time`
    pub fn geometry(&self, position: Vec2, time: f32) -> SurfaceGeometry {
        let terms = PhaseTerms::compute(self, position, time);
        SurfaceGeometry::from_phase_terms(self, &terms)
    }

    /// Displacement only
    pub fn displacement(&self, position: Vec2, time: f32) -> Vec3 {
        self.geometry(position, time).displacement
    }
}
