//! The mounted hero animation: field, input ports and drawing surface.

use rand::Rng;

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::input::{FieldInputs, InputEvent, SurfaceSize};
use crate::render::{draw_frame, FrameScratch, FrameStats};
use crate::surface::Surface;

const STATS_LOG_INTERVAL: u64 = 600;

pub struct Hero<S: Surface> {
    config: FieldConfig,
    field: ParticleField,
    inputs: FieldInputs,
    surface: S,
    scratch: FrameScratch,
    frames: u64,
}

impl<S: Surface> Hero<S> {
    /// Validate `config`, size `surface` for the container and generate the
    /// point set.
    pub fn mount<R: Rng + ?Sized>(
        config: FieldConfig,
        container_width: f32,
        mut surface: S,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        config.validate()?;
        let size = SurfaceSize::fit(container_width, config.size_cap);
        surface.resize(size.side);
        let field = ParticleField::new(&config, size, rng);
        log::info!(
            "[hero] mounted {} points, surface {}px, radius {:.1}",
            field.points().len(),
            size.side,
            field.radius()
        );
        Ok(Self {
            inputs: FieldInputs::new(size, config.size_cap),
            config,
            field,
            surface,
            scratch: FrameScratch::default(),
            frames: 0,
        })
    }

    /// Feed one ambient event. A resize that changes the side resizes the
    /// surface right away; the point set is kept.
    pub fn handle(&mut self, event: InputEvent) {
        if self.inputs.apply(event) {
            log::debug!("[hero] surface resized to {}px", self.inputs.size.side);
            self.surface.resize(self.inputs.size.side);
        }
    }

    /// Advance and draw one frame at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> FrameStats {
        self.field.advance(&self.inputs, now_ms);
        let stats = draw_frame(
            &mut self.surface,
            &self.field,
            &self.inputs,
            self.config.focal_points,
            now_ms,
            &mut self.scratch,
        );
        self.frames += 1;
        if self.frames % STATS_LOG_INTERVAL == 0 {
            log::debug!(
                "[hero] frame {} points={} connections={} focal_links={}",
                self.frames,
                stats.points,
                stats.connections,
                stats.focal_links
            );
        }
        stats
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn inputs(&self) -> &FieldInputs {
        &self.inputs
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scratch(&self) -> &FrameScratch {
        &self.scratch
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
