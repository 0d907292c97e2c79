//! Start/stop contract for the animation.
//!
//! A [`Host`] owns the platform side: event listeners and the frame loop.
//! [`AnimationHandle::start`] attaches everything; dropping or stopping the
//! handle detaches everything and cancels the loop. Once `stop` returns, the
//! host must not run another frame.

use smallvec::SmallVec;

use crate::error::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Surface,
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    PointerMove,
    PointerLeave,
    Scroll,
    Resize,
}

impl HostEvent {
    pub const ALL: [HostEvent; 4] = [
        HostEvent::PointerMove,
        HostEvent::PointerLeave,
        HostEvent::Scroll,
        HostEvent::Resize,
    ];

    pub fn target(self) -> EventTarget {
        match self {
            HostEvent::PointerMove | HostEvent::PointerLeave => EventTarget::Surface,
            HostEvent::Scroll | HostEvent::Resize => EventTarget::Window,
        }
    }

    /// DOM event type.
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::PointerMove => "pointermove",
            HostEvent::PointerLeave => "pointerleave",
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
        }
    }
}

pub trait Host {
    fn add_listener(&mut self, event: HostEvent) -> Result<(), HostError>;
    fn remove_listener(&mut self, event: HostEvent);
    /// Start the continuous frame loop; each frame schedules the next.
    fn request_frames(&mut self) -> Result<(), HostError>;
    /// Stop the frame loop. No frame callback may run after this returns.
    fn cancel_frames(&mut self);
}

pub struct AnimationHandle<H: Host> {
    host: H,
    attached: SmallVec<[HostEvent; 4]>,
    running: bool,
}

impl<H: Host> AnimationHandle<H> {
    /// Attach all listeners, then start frames. On failure everything that
    /// was attached is removed again before the error is returned.
    pub fn start(mut host: H) -> Result<Self, HostError> {
        let mut attached: SmallVec<[HostEvent; 4]> = SmallVec::new();
        for event in HostEvent::ALL {
            if let Err(e) = host.add_listener(event) {
                detach_all(&mut host, &mut attached);
                return Err(e);
            }
            attached.push(event);
        }
        if let Err(e) = host.request_frames() {
            detach_all(&mut host, &mut attached);
            return Err(e);
        }
        log::info!("[lifecycle] animation started");
        Ok(Self {
            host,
            attached,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.host.cancel_frames();
        detach_all(&mut self.host, &mut self.attached);
        log::info!("[lifecycle] animation stopped");
    }
}

impl<H: Host> Drop for AnimationHandle<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn detach_all<H: Host>(host: &mut H, attached: &mut SmallVec<[HostEvent; 4]>) {
    while let Some(event) = attached.pop() {
        host.remove_listener(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_split_between_surface_and_window() {
        let on_surface: Vec<_> = HostEvent::ALL
            .iter()
            .filter(|e| e.target() == EventTarget::Surface)
            .map(|e| e.dom_name())
            .collect();
        assert_eq!(on_surface, vec!["pointermove", "pointerleave"]);
        assert_eq!(HostEvent::Scroll.target(), EventTarget::Window);
        assert_eq!(HostEvent::Resize.target(), EventTarget::Window);
    }
}
