use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Build from channel values that may fall outside `0..=255`.
    pub fn saturating(r: i32, g: i32, b: i32, a: f32) -> Self {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Self::new(ch(r), ch(g), ch(b), a)
    }
}

/// CSS `rgba()` form, accepted by canvas `fillStyle`/`strokeStyle` and
/// gradient color stops.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Palette
pub const CURSOR_GLOW: Rgba = Rgba::new(125, 158, 141, 0.2);
pub const CURSOR_DOT: Rgba = Rgba::new(214, 239, 134, 0.8);
pub const CURSOR_TRAIL: Rgba = Rgba::new(214, 239, 134, 0.4);
pub const FOCAL_LINK: Rgba = Rgba::new(200, 220, 210, 1.0);

/// Link color for a connection `t` of the way to the max distance:
/// longer links are paler.
pub fn connection_color(t: f32, opacity: f32) -> Rgba {
    let c = (180.0 + t * 75.0).floor() as i32;
    Rgba::saturating(c, c + 20, c + 10, opacity)
}
