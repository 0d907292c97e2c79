use glam::Vec2;

use crate::color::{Rgba, CURSOR_DOT, CURSOR_GLOW, CURSOR_TRAIL};
use crate::connections::{
    collect_connections, collect_focal_links, focal_points, Connection, FocalLink,
};
use crate::constants::{
    CONNECTION_ALPHA, CONNECTION_WIDTH, CURSOR_DOT_RADIUS, CURSOR_GLOW_BASE,
    CURSOR_GLOW_PER_SPEED, CURSOR_TRAIL_RADIUS, FOCAL_ALPHA, FOCAL_LINK_WIDTH, FOCAL_STRIDE,
    POINT_GLOW_ALPHA, POINT_GLOW_SCALE, POINT_OPACITY_SCALE,
};
use crate::field::{ParticleField, ProjectedPoint};
use crate::input::{CursorState, FieldInputs};
use crate::surface::{GradientStop, Surface};

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub points: usize,
    pub connections: usize,
    pub focal_links: usize,
    pub cursor_drawn: bool,
}

/// Scratch buffers reused across frames.
#[derive(Default)]
pub struct FrameScratch {
    screen: Vec<Vec2>,
    connections: Vec<Connection>,
    focal_links: Vec<FocalLink>,
}

impl FrameScratch {
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn focal_links(&self) -> &[FocalLink] {
        &self.focal_links
    }
}

/// Draw the last projection of `field`.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    field: &ParticleField,
    inputs: &FieldInputs,
    focal_count: usize,
    now_ms: f64,
    scratch: &mut FrameScratch,
) -> FrameStats {
    let projected = field.projected();
    surface.clear();

    let cursor_drawn = inputs.cursor.active;
    if cursor_drawn {
        draw_cursor(surface, &inputs.cursor);
    }

    scratch.screen.clear();
    scratch.screen.extend(projected.iter().map(|p| p.position));

    let max_d = field.max_connection_distance();
    collect_connections(&scratch.screen, max_d, &mut scratch.connections);
    surface.set_global_alpha(CONNECTION_ALPHA);
    for c in &scratch.connections {
        surface.stroke_line(
            scratch.screen[c.a],
            scratch.screen[c.b],
            CONNECTION_WIDTH,
            c.style(max_d),
        );
    }

    let focals = focal_points(now_ms, inputs.size.width(), inputs.size.height(), focal_count);
    let reach = field.focal_reach();
    collect_focal_links(
        &scratch.screen,
        &focals,
        FOCAL_STRIDE,
        reach,
        &mut scratch.focal_links,
    );
    surface.set_global_alpha(FOCAL_ALPHA);
    for link in &scratch.focal_links {
        surface.stroke_line(
            scratch.screen[link.point],
            focals[link.focal],
            FOCAL_LINK_WIDTH,
            link.style(reach),
        );
    }

    for p in projected {
        draw_point(surface, p);
    }
    surface.set_global_alpha(1.0);

    FrameStats {
        points: projected.len(),
        connections: scratch.connections.len(),
        focal_links: scratch.focal_links.len(),
        cursor_drawn,
    }
}

fn draw_cursor<S: Surface>(surface: &mut S, cursor: &CursorState) {
    let glow_radius = CURSOR_GLOW_BASE + cursor.speed * CURSOR_GLOW_PER_SPEED;
    let stops = [
        GradientStop::new(0.0, CURSOR_GLOW),
        GradientStop::new(0.5, CURSOR_GLOW.with_alpha(0.1)),
        GradientStop::new(1.0, CURSOR_GLOW.with_alpha(0.0)),
    ];
    surface.fill_glow(cursor.position, glow_radius, &stops);
    surface.fill_circle(cursor.position, CURSOR_DOT_RADIUS, CURSOR_DOT);
    surface.fill_circle(cursor.previous, CURSOR_TRAIL_RADIUS, CURSOR_TRAIL);
}

fn draw_point<S: Surface>(surface: &mut S, p: &ProjectedPoint) {
    let stops = [
        GradientStop::new(0.0, Rgba::WHITE.with_alpha(p.opacity * POINT_OPACITY_SCALE)),
        GradientStop::new(1.0, Rgba::WHITE.with_alpha(0.0)),
    ];
    surface.set_global_alpha(POINT_GLOW_ALPHA);
    surface.fill_glow(p.position, p.size * POINT_GLOW_SCALE, &stops);
    surface.set_global_alpha(p.opacity * POINT_OPACITY_SCALE);
    surface.fill_circle(p.position, p.size, Rgba::WHITE);
}
