//! Per-frame simulation of the particle sphere.
//!
//! The point set is generated once. Every frame re-derives screen positions
//! from the original coordinates, the current rotation and the latest
//! [`FieldInputs`]; nothing computed here is written back into a [`Point`].

use glam::Vec2;
use std::f64::consts::TAU;
use rand::Rng;

use crate::config::FieldConfig;
use crate::constants::{
    CURSOR_RADIUS_BASE, CURSOR_RADIUS_PER_SPEED, FOCAL_REACH, REPEL_STRENGTH_BASE,
    REPEL_STRENGTH_PER_SPEED, SCROLL_DEPTH_FACTOR,
};
use crate::input::{CursorState, FieldInputs, SurfaceSize};
use crate::projection::{depth_opacity, project, rotate_y};
use crate::sphere::{sample_sphere, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
    pub position: Vec2,
    /// Depth after the scroll offset.
    pub z: f32,
    pub opacity: f32,
    pub size: f32,
}

/// Cursor reach and push for the current cursor speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub radius: f32,
    pub strength: f32,
}

impl Repulsion {
    pub fn for_cursor(cursor: &CursorState) -> Self {
        Self {
            radius: CURSOR_RADIUS_BASE + cursor.speed * CURSOR_RADIUS_PER_SPEED,
            strength: REPEL_STRENGTH_BASE + cursor.speed * REPEL_STRENGTH_PER_SPEED,
        }
    }

    /// Displacement for a point whose undistorted screen position is
    /// `screen`. Zero at or beyond `radius`, quadratic falloff inside,
    /// directed away from the cursor.
    pub fn displacement(&self, screen: Vec2, cursor: Vec2) -> Vec2 {
        let offset = screen - cursor;
        let d = offset.length();
        if d >= self.radius {
            return Vec2::ZERO;
        }
        let falloff = 1.0 - d / self.radius;
        let force = falloff * falloff * self.strength;
        // A point exactly under the cursor has no direction; push it right.
        let dir = if d > f32::EPSILON { offset / d } else { Vec2::X };
        dir * force
    }
}

pub struct ParticleField {
    points: Vec<Point>,
    radius: f32,
    /// Accumulated angle; `f64` so a page left open for days keeps turning.
    rotation: f64,
    rotation_step: f64,
    focal_length: f32,
    max_connection_distance: f32,
    projected: Vec<ProjectedPoint>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: &FieldConfig, size: SurfaceSize, rng: &mut R) -> Self {
        let radius = size.width().min(size.height()) * config.radius_fraction;
        let points = sample_sphere(config.num_points, radius, rng);
        Self {
            projected: Vec::with_capacity(points.len()),
            points,
            radius,
            rotation: 0.0,
            rotation_step: config.rotation_step as f64,
            focal_length: config.focal_length,
            max_connection_distance: radius * config.connection_fraction,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn max_connection_distance(&self) -> f32 {
        self.max_connection_distance
    }

    pub fn focal_reach(&self) -> f32 {
        self.max_connection_distance * FOCAL_REACH
    }

    /// Projection of the last [`ParticleField::advance`], same order as
    /// [`ParticleField::points`].
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }

    /// Step the rotation and re-project every point.
    pub fn advance(&mut self, inputs: &FieldInputs, now_ms: f64) -> &[ProjectedPoint] {
        self.rotation += self.rotation_step;
        let angle = self.rotation.rem_euclid(TAU) as f32;
        let center = inputs.size.center();
        let cursor = inputs.cursor;
        let repulsion = Repulsion::for_cursor(&cursor);
        let depth_offset = inputs.scroll.normalized * SCROLL_DEPTH_FACTOR * self.radius;

        self.projected.clear();
        for point in &self.points {
            let rotated = rotate_y(point.original(), angle);
            let mut distorted = rotated;
            if cursor.active {
                let base = project(rotated, self.focal_length, center);
                let push = repulsion.displacement(base, cursor.position);
                distorted.x += push.x;
                distorted.y += push.y;
            }
            distorted.z += depth_offset;

            self.projected.push(ProjectedPoint {
                position: project(distorted, self.focal_length, center),
                z: distorted.z,
                opacity: depth_opacity(distorted.z, self.radius),
                size: point.current_size(now_ms),
            });
        }
        &self.projected
    }
}
