use glam::Vec2;
use smallvec::SmallVec;

use crate::color::{connection_color, Rgba, FOCAL_LINK};
use crate::config::MAX_FOCAL_POINTS;
use crate::constants::{
    CONNECTION_ALPHA, FOCAL_LINK_OPACITY, FOCAL_PERIOD_X_MS, FOCAL_PERIOD_Y_MS,
};

pub type FocalPoints = SmallVec<[Vec2; MAX_FOCAL_POINTS]>;

/// A line between two projected points, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

impl Connection {
    pub fn style(&self, max_distance: f32) -> Rgba {
        let t = self.distance / max_distance;
        connection_color(t, (1.0 - t) * CONNECTION_ALPHA)
    }
}

/// Collect every pair closer than `max_distance` (strictly) into `out`.
pub fn collect_connections(points: &[Vec2], max_distance: f32, out: &mut Vec<Connection>) {
    out.clear();
    let max_sq = max_distance * max_distance;
    for (a, pa) in points.iter().enumerate() {
        for (offset, pb) in points[a + 1..].iter().enumerate() {
            let d_sq = pa.distance_squared(*pb);
            if d_sq < max_sq {
                out.push(Connection {
                    a,
                    b: a + 1 + offset,
                    distance: d_sq.sqrt(),
                });
            }
        }
    }
}

/// Slowly orbiting anchors for the secondary link layer.
pub fn focal_points(now_ms: f64, width: f32, height: f32, count: usize) -> FocalPoints {
    (0..count.min(MAX_FOCAL_POINTS))
        .map(|i| {
            let i = i as f64;
            let u = 0.3 + (now_ms / FOCAL_PERIOD_X_MS + i).sin() * 0.4 + 0.3;
            let v = 0.3 + (now_ms / FOCAL_PERIOD_Y_MS + i).cos() * 0.4 + 0.3;
            Vec2::new(width * u as f32, height * v as f32)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalLink {
    pub point: usize,
    pub focal: usize,
    pub distance: f32,
}

impl FocalLink {
    pub fn style(&self, reach: f32) -> Rgba {
        FOCAL_LINK.with_alpha((1.0 - self.distance / reach) * FOCAL_LINK_OPACITY)
    }
}

/// Link every `stride`-th point to its nearest focal point within `reach`.
pub fn collect_focal_links(
    points: &[Vec2],
    focals: &[Vec2],
    stride: usize,
    reach: f32,
    out: &mut Vec<FocalLink>,
) {
    out.clear();
    for (point, p) in points.iter().enumerate().step_by(stride.max(1)) {
        let mut best: Option<(usize, f32)> = None;
        for (focal, f) in focals.iter().enumerate() {
            let d = p.distance(*f);
            if d < reach && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((focal, d));
            }
        }
        if let Some((focal, distance)) = best {
            out.push(FocalLink {
                point,
                focal,
                distance,
            });
        }
    }
}
