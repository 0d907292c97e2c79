use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::{
    BASE_SIZE_MIN, BASE_SIZE_SPAN, PULSE_AMPLITUDE, PULSE_SPEED_MIN, PULSE_SPEED_SPAN,
};

/// One particle on the sphere surface.
#[derive(Clone, Debug)]
pub struct Point {
    original: Vec3,
    pub base_size: f32,
    /// Pulse angular speed in radians per millisecond.
    pub pulse_speed: f32,
}

impl Point {
    pub fn new(original: Vec3, base_size: f32, pulse_speed: f32) -> Self {
        Self {
            original,
            base_size,
            pulse_speed,
        }
    }

    /// Position assigned at creation. Never changes.
    #[inline]
    pub fn original(&self) -> Vec3 {
        self.original
    }

    #[inline]
    pub fn current_size(&self, now_ms: f64) -> f32 {
        let phase = (now_ms * self.pulse_speed as f64).sin() as f32;
        self.base_size * (1.0 + phase * PULSE_AMPLITUDE)
    }
}

/// Sample `count` points uniformly over a sphere of `radius`.
///
/// `phi = acos(2u - 1)` keeps the density uniform; sampling the polar angle
/// directly would bunch points at the poles.
pub fn sample_sphere<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let (sin_phi, cos_phi) = phi.sin_cos();
            let (sin_theta, cos_theta) = theta.sin_cos();
            let original = Vec3::new(
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                radius * cos_phi,
            );
            let base_size = BASE_SIZE_MIN + rng.gen::<f32>() * BASE_SIZE_SPAN;
            let pulse_speed = PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN;
            Point::new(original, base_size, pulse_speed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_lie_on_the_surface() {
        let mut rng = StdRng::seed_from_u64(1);
        let radius = 320.0;
        for p in sample_sphere(2000, radius, &mut rng) {
            let len = p.original().length();
            assert!((len - radius).abs() < radius * 1e-4, "length {len}");
        }
    }

    #[test]
    fn hemispheres_are_balanced() {
        // Uniform sampling puts about half the points above the equator and
        // about a quarter in each polar cap |z| > r/2.
        let mut rng = StdRng::seed_from_u64(99);
        let pts = sample_sphere(20_000, 1.0, &mut rng);
        let north = pts.iter().filter(|p| p.original().z > 0.0).count();
        let caps = pts.iter().filter(|p| p.original().z.abs() > 0.5).count();
        assert!((north as f32 / 20_000.0 - 0.5).abs() < 0.02);
        assert!((caps as f32 / 20_000.0 - 0.5).abs() < 0.02);
    }

    #[test]
    fn per_point_constants_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for p in sample_sphere(500, 10.0, &mut rng) {
            assert!(p.base_size >= BASE_SIZE_MIN && p.base_size < BASE_SIZE_MIN + BASE_SIZE_SPAN);
            assert!(
                p.pulse_speed >= PULSE_SPEED_MIN
                    && p.pulse_speed < PULSE_SPEED_MIN + PULSE_SPEED_SPAN
            );
        }
    }

    #[test]
    fn pulse_stays_within_amplitude() {
        let p = Point::new(Vec3::X, 1.2, 0.004);
        for t in 0..2000 {
            let s = p.current_size(t as f64 * 7.3);
            assert!(s >= 1.2 * (1.0 - PULSE_AMPLITUDE) - 1e-5);
            assert!(s <= 1.2 * (1.0 + PULSE_AMPLITUDE) + 1e-5);
        }
        assert!((p.current_size(0.0) - 1.2).abs() < 1e-6);
    }
}
