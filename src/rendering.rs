//! CPU raster export: evaluates the ocean over a UV grid and writes images
//! or raw sample buffers.

use std::path::Path;
use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use log::{debug, info};

use crate::error::ExportError;
use crate::ocean::{OceanSystem, PhaseTerms, SurfaceSample};
use crate::params::{Channel, RasterConfig};

/// Packed per-pixel record for raw export (11 native-endian `f32`s)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FieldTexel {
    pub displacement: [f32; 3],
    pub normal: [f32; 3],
    pub jacobian: f32,
    pub sea_level: f32,
    pub break_mask: f32,
    pub foam: f32,
    pub foam_two: f32,
}

impl From<&SurfaceSample> for FieldTexel {
    fn from(s: &SurfaceSample) -> Self {
        Self {
            displacement: s.displacement.to_array(),
            normal: s.normal.to_array(),
            jacobian: s.jacobian.determinant,
            sea_level: s.sea_level_mask,
            break_mask: s.break_mask,
            foam: s.foam_mask,
            foam_two: s.foam_mask_two,
        }
    }
}

/// Evaluated samples for a `width × height` grid, row-major
#[derive(Debug, Clone)]
pub struct FieldRaster {
    width: u32,
    height: u32,
    samples: Vec<SurfaceSample>,
}

impl FieldRaster {
    /// Evaluate the ocean at every pixel centre
    ///
    /// Pixel `(x, y)` samples `uv = ((x + 0.5) / width, (y + 0.5) / height)`.
    /// Rows are split into contiguous bands, one per worker thread.
    pub fn evaluate(ocean: &OceanSystem, config: &RasterConfig) -> Result<Self, ExportError> {
        let (width, height) = (config.width, config.height);
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyRaster { width, height });
        }

        let start = Instant::now();
        let workers = config.worker_count();
        let rows_per_worker = (height as usize).div_ceil(workers);
        let time_s = config.time_s;

        let bands: Vec<Vec<SurfaceSample>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..height as usize)
                .step_by(rows_per_worker)
                .map(|first_row| {
                    let last_row = (first_row + rows_per_worker).min(height as usize);
                    scope.spawn(move || {
                        let mut terms = PhaseTerms::default();
                        let mut band = Vec::with_capacity((last_row - first_row) * width as usize);
                        for y in first_row..last_row {
                            for x in 0..width {
                                let uv = Vec2::new(
                                    (x as f32 + 0.5) / width as f32,
                                    (y as f32 + 0.5) / height as f32,
                                );
                                band.push(ocean.sample_uv_with(&mut terms, uv, time_s));
                            }
                        }
                        band
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(band) => band,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let samples: Vec<SurfaceSample> = bands.into_iter().flatten().collect();
        debug!(
            "evaluated {}x{} samples on {} workers in {:.2}ms",
            width,
            height,
            workers,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[SurfaceSample] {
        &self.samples
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&SurfaceSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get(self.offset(x, y))
    }

    /// Packed records for every pixel
    pub fn texels(&self) -> Vec<FieldTexel> {
        self.samples.iter().map(FieldTexel::from).collect()
    }

    /// Render one channel as an 8-bit RGB image
    pub fn to_image(&self, channel: Channel) -> RgbImage {
        let displacement_range = self.displacement_range();

        RgbImage::from_fn(self.width, self.height, |x, y| {
            let s = &self.samples[self.offset(x, y)];
            let rgb = match channel {
                Channel::Height => {
                    let (lo, hi) = displacement_range;
                    Vec3::splat(normalize(s.displacement.z, lo.z, hi.z))
                }
                Channel::Displacement => {
                    let (lo, hi) = displacement_range;
                    Vec3::new(
                        normalize(s.displacement.x, lo.x, hi.x),
                        normalize(s.displacement.y, lo.y, hi.y),
                        normalize(s.displacement.z, lo.z, hi.z),
                    )
                }
                Channel::Normal => s.normal * 0.5 + Vec3::splat(0.5),
                Channel::SeaLevel => Vec3::splat(s.sea_level_mask),
                Channel::Break => Vec3::splat(s.break_mask),
                Channel::Foam => Vec3::splat(s.foam_mask),
                Channel::FoamTwo => Vec3::splat(s.foam_mask_two),
                Channel::Jacobian => Vec3::splat(0.5 + 0.5 * s.jacobian.determinant),
            };
            Rgb(to_bytes(rgb))
        })
    }

    pub fn save_image(&self, channel: Channel, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.to_image(channel).save(path)?;
        info!("wrote {} channel to {}", channel, path.display());
        Ok(())
    }

    /// Write all texels as a header-less buffer of native-endian `f32`
    pub fn write_raw(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let texels = self.texels();
        std::fs::write(path, bytemuck::cast_slice::<FieldTexel, u8>(&texels))?;
        info!(
            "wrote {} texels ({} bytes) to {}",
            texels.len(),
            std::mem::size_of_val(texels.as_slice()),
            path.display()
        );
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn displacement_range(&self) -> (Vec3, Vec3) {
        self.samples.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), s| (lo.min(s.displacement), hi.max(s.displacement)),
        )
    }
}

fn normalize(value: f32, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.5
    }
}

fn to_bytes(rgb: Vec3) -> [u8; 3] {
    let scaled = (rgb.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [scaled.x as u8, scaled.y as u8, scaled.z as u8]
}
