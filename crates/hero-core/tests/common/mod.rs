// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use hero_core::{GradientStop, Host, HostError, HostEvent, Rgba, Surface};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub resizes: Vec<u32>,
    pub clears: usize,
    pub circles: Vec<(Vec2, f32, Rgba)>,
    pub glows: Vec<(Vec2, f32, Vec<GradientStop>)>,
    pub lines: Vec<(Vec2, Vec2, f32, Rgba)>,
    pub alphas: Vec<f32>,
}

impl RecordingSurface {
    pub fn side(&self) -> Option<u32> {
        self.resizes.last().copied()
    }

    pub fn reset_draws(&mut self) {
        self.clears = 0;
        self.circles.clear();
        self.glows.clear();
        self.lines.clear();
        self.alphas.clear();
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, side: u32) {
        self.resizes.push(side);
    }
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.alphas.push(alpha);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push((center, radius, color));
    }
    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.glows.push((center, radius, stops.to_vec()));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.lines.push((from, to, width, color));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Add(HostEvent),
    Remove(HostEvent),
    RequestFrames,
    CancelFrames,
}

/// Shared record of everything a [`MockHost`] was asked to do.
#[derive(Default, Debug)]
pub struct Journal {
    pub calls: Vec<HostCall>,
    pub listening: Vec<HostEvent>,
    pub looping: bool,
    pub frames_fired: usize,
    pub fail_add: Option<HostEvent>,
    pub fail_frames: bool,
}

impl Journal {
    /// Run `n` frame callbacks if, and only if, the loop is live.
    pub fn pump(&mut self, n: usize, mut on_frame: impl FnMut()) {
        for _ in 0..n {
            if !self.looping {
                return;
            }
            self.frames_fired += 1;
            on_frame();
        }
    }
}

#[derive(Clone, Default)]
pub struct MockHost {
    pub journal: Rc<RefCell<Journal>>,
}

impl Host for MockHost {
    fn add_listener(&mut self, event: HostEvent) -> Result<(), HostError> {
        let mut j = self.journal.borrow_mut();
        if j.fail_add == Some(event) {
            return Err(HostError::Listen {
                event,
                reason: "refused by test".into(),
            });
        }
        j.calls.push(HostCall::Add(event));
        j.listening.push(event);
        Ok(())
    }

    fn remove_listener(&mut self, event: HostEvent) {
        let mut j = self.journal.borrow_mut();
        j.calls.push(HostCall::Remove(event));
        j.listening.retain(|e| *e != event);
    }

    fn request_frames(&mut self) -> Result<(), HostError> {
        let mut j = self.journal.borrow_mut();
        if j.fail_frames {
            return Err(HostError::Schedule("refused by test".into()));
        }
        j.calls.push(HostCall::RequestFrames);
        j.looping = true;
        Ok(())
    }

    fn cancel_frames(&mut self) {
        let mut j = self.journal.borrow_mut();
        j.calls.push(HostCall::CancelFrames);
        j.looping = false;
    }
}
