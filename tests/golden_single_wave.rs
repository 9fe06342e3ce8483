use std::f32::consts::{FRAC_1_SQRT_2, TAU};

use glam::Vec2;
use swellfield::noise::{Randomness, StandardNoise};
use swellfield::ocean::{OceanSystem, WaveBank, GRAVITY};
use swellfield::params::{MaskParams, OceanConfig, Ramp, WaveParams};

fn golden_params() -> WaveParams {
    WaveParams {
        octaves: 1,
        waves_per_octave: 1,
        wavelength: 80.0,
        amplitude: 3.0,
        steepness: 5.0,
        direction_deg: 45.0,
        deviation_deg: 0.0,
        speed: 1.0,
        seed: 0,
        randomness: Randomness::EvenDistribution,
        ..Default::default()
    }
}

fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn golden_single_wave_at_origin() {
    let config = OceanConfig {
        waves: golden_params(),
        masks: MaskParams {
            foam_threshold: 0.3,
            foam_two_brightness: 1.0,
            foam_two_threshold: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let ocean = OceanSystem::new(config, &StandardNoise::default()).unwrap();
    let wave = ocean.bank().waves()[0];

    // rng = 0 → bottom of the 80 / 1.5 .. 80 * 1.5 band
    let wavelength = 80.0 / 1.5;
    let amplitude = wavelength * (3.0 / 80.0);
    let w = 2.0 / wavelength;
    let q = 5.0 / (amplitude * w);
    assert_close(wave.wavelength, wavelength, 1e-4);
    assert_close(wave.amplitude, amplitude, 1e-5);
    assert_close(wave.angular_frequency, w, 1e-7);
    assert_close(wave.steepness, q, 1e-3);
    assert_close(wave.phase_speed, (GRAVITY * TAU / wavelength).sqrt(), 1e-5);

    let sample = ocean.sample(Vec2::ZERO, 0.0);
    assert_close(sample.displacement.x, q * amplitude * FRAC_1_SQRT_2, 1e-2);
    assert_close(sample.displacement.y, q * amplitude * FRAC_1_SQRT_2, 1e-2);
    assert_close(sample.displacement.z, 0.0, 1e-6);

    assert_close(sample.jacobian.xx, 1.0, 1e-6);
    assert_close(sample.jacobian.xy, 0.0, 1e-6);
    assert_close(sample.jacobian.yy, 1.0, 1e-6);
    assert_close(sample.jacobian.determinant, 1.0, 1e-5);

    // height 0 sits exactly on sea level 0
    assert_eq!(sample.sea_level_mask, 1.0);
    assert_eq!(sample.break_mask, 0.0);
    assert_eq!(sample.foam_mask, 0.0);
    assert_eq!(sample.foam_mask_two, 0.0);
}

#[test]
fn golden_single_wave_trough_is_not_foam_crest_is() {
    let masks = MaskParams {
        foam_threshold: 0.0,
        foam_ramp: Some(Ramp {
            size: 1.0,
            exponent: 2.0,
        }),
        ..Default::default()
    };
    let bank = WaveBank::build(&golden_params(), &StandardNoise::default());
    let wave = bank.waves()[0];
    let along = Vec2::new(wave.direction.x, wave.direction.y);

    // θ = π/2: crest, determinant -4
    let crest = bank.sample(along * (TAU / 4.0 / wave.angular_frequency), 0.0, &masks);
    assert_eq!(crest.break_mask, 1.0);
    assert_eq!(crest.foam_mask, 1.0);
    assert_eq!(crest.foam_mask_two, 1.0);

    // θ = 3π/2: trough, Jxx = Jyy = 3.5, Jxy = 2.5 → determinant 6
    let trough = bank.sample(along * (3.0 * TAU / 4.0 / wave.angular_frequency), 0.0, &masks);
    assert_close(trough.jacobian.determinant, 6.0, 1e-2);
    assert_eq!(trough.break_mask, 0.0);
    assert_eq!(trough.foam_mask, 0.0);
    assert_eq!(trough.foam_mask_two, 0.0);
    assert_close(trough.displacement.z, -2.0, 1e-4);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let config = OceanConfig {
        waves: WaveParams {
            octaves: 6,
            waves_per_octave: 12,
            randomness: Randomness::Hash2,
            seed: 1234,
            ..Default::default()
        },
        ..Default::default()
    };

    let first = OceanSystem::new(config.clone(), &StandardNoise::new(1234)).unwrap();
    let second = OceanSystem::new(config, &StandardNoise::new(1234)).unwrap();
    assert_eq!(first.bank(), second.bank());

    for (x, y, t) in [(0.0, 0.0, 0.0), (17.25, -3.5, 2.0), (-120.0, 64.0, 33.3)] {
        let p = Vec2::new(x, y);
        let a = first.sample(p, t);
        let b = second.sample(p, t);
        assert_eq!(
            a.displacement.to_array().map(f32::to_bits),
            b.displacement.to_array().map(f32::to_bits)
        );
        assert_eq!(
            a.jacobian.determinant.to_bits(),
            b.jacobian.determinant.to_bits()
        );
        assert_eq!(a, first.sample(p, t));
    }
}

#[test]
fn single_wave_retraces_after_one_period() {
    let bank = WaveBank::build(&golden_params(), &StandardNoise::default());
    let period = TAU / bank.waves()[0].phase_speed;
    let p = Vec2::new(-9.0, 21.0);

    for step in 0..8 {
        let t = step as f32 * period / 8.0;
        let now = bank.displacement(p, t);
        let later = bank.displacement(p, t + period);
        assert!(
            (now - later).abs().max_element() < 2e-2,
            "t = {t}: {now} vs {later}"
        );
    }
}
