use glam::Vec2;

use crate::constants::SCROLL_NORMALIZER;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    /// Position before the last move; drawn as the trail dot.
    pub previous: Vec2,
    pub active: bool,
    /// Distance covered by the last move, in surface pixels.
    pub speed: f32,
}

impl CursorState {
    pub fn centered(size: SurfaceSize) -> Self {
        let c = size.center();
        Self {
            position: c,
            previous: c,
            active: false,
            speed: 0.0,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.speed = pos.distance(self.position);
        self.previous = self.position;
        self.position = pos;
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub normalized: f32,
}

impl ScrollState {
    pub fn set_offset(&mut self, scroll_y_px: f32) {
        self.normalized = scroll_y_px / SCROLL_NORMALIZER;
    }
}

/// Square drawing surface, in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub side: u32,
}

impl SurfaceSize {
    /// Side for a container of `container_width` px, capped at `cap`.
    pub fn fit(container_width: f32, cap: u32) -> Self {
        let w = if container_width.is_finite() {
            container_width.max(1.0)
        } else {
            cap as f32
        };
        Self {
            side: (w as u32).clamp(1, cap.max(1)),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.side as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.side as f32
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.side as f32 * 0.5)
    }
}

/// Ambient events the host forwards into the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position already mapped to surface pixels.
    PointerMove(Vec2),
    PointerLeave,
    Scroll { offset_y: f32 },
    Resize { container_width: f32 },
}

/// Latest ambient state, written by event handlers and read once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldInputs {
    pub cursor: CursorState,
    pub scroll: ScrollState,
    pub size: SurfaceSize,
    pub size_cap: u32,
}

impl FieldInputs {
    pub fn new(size: SurfaceSize, size_cap: u32) -> Self {
        Self {
            cursor: CursorState::centered(size),
            scroll: ScrollState::default(),
            size,
            size_cap,
        }
    }

    /// Returns true when the surface side changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMove(pos) => self.cursor.move_to(pos),
            InputEvent::PointerLeave => self.cursor.leave(),
            InputEvent::Scroll { offset_y } => self.scroll.set_offset(offset_y),
            InputEvent::Resize { container_width } => {
                let next = SurfaceSize::fit(container_width, self.size_cap);
                let changed = next != self.size;
                self.size = next;
                return changed;
            }
        }
        false
    }
}
