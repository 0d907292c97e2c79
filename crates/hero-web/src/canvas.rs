use glam::Vec2;
use hero_core::{GradientStop, Rgba, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a `CanvasRenderingContext2d`. Failed draw calls are
/// dropped; the next frame redraws everything anyway.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn disc(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, side: u32) {
        self.canvas.set_width(side);
        self.canvas.set_height(side);
    }

    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.disc(center, radius) {
            self.ctx.set_fill_style_str(&color.to_string());
            self.ctx.fill();
        }
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::trace!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        if self.disc(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
