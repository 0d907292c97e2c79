//! Drawing seam between the field and a concrete 2D backend.
//!
//! The operations are the handful the hero animation needs from a Canvas 2D
//! context. Implementations should treat failures as non-fatal: a dropped
//! draw call only costs one frame of one primitive.

use glam::Vec2;

use crate::color::Rgba;

/// One stop of a radial gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

pub trait Surface {
    /// Resize the backing store to a square of `side` pixels.
    fn resize(&mut self, side: u32);
    fn clear(&mut self);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Disc filled with a radial gradient running from `center` to `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
