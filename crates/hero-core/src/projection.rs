use glam::{Vec2, Vec3};

/// Rotate about the vertical (y) axis. Only x and z change.
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}

/// Perspective scale for a point at depth `z` with focal constant `focal`.
#[inline]
pub fn perspective_scale(z: f32, focal: f32) -> f32 {
    focal / (focal + z)
}

/// Project to screen space around `center`.
#[inline]
pub fn project(p: Vec3, focal: f32, center: Vec2) -> Vec2 {
    let scale = perspective_scale(p.z, focal);
    Vec2::new(p.x, p.y) * scale + center
}

/// Linear in depth: 0 at `z = -radius`, 1 at `z = radius`.
#[inline]
pub fn depth_opacity(z: f32, radius: f32) -> f32 {
    ((z + radius) / (2.0 * radius)).clamp(0.0, 1.0)
}
