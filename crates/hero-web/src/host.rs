use fnv::FnvHashMap;
use hero_core::{Hero, Host, HostError, HostEvent, InputEvent};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::dom;

pub type Scene = Rc<RefCell<Hero<CanvasSurface>>>;
type Listener = Closure<dyn FnMut(web::Event)>;

/// `requestAnimationFrame` chain. The tick closure only holds a weak
/// reference back here, so cancelling drops it cleanly.
struct FrameLoop {
    window: web::Window,
    alive: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn schedule(&self) -> Result<(), HostError> {
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| HostError::Schedule(format!("{:?}", e)))?;
        self.pending.set(Some(id));
        Ok(())
    }
}

/// Browser side of the lifecycle: DOM listeners feeding the scene and a
/// frame loop drawing it.
pub struct WebHost {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    scene: Scene,
    listeners: FnvHashMap<HostEvent, Listener>,
    frames: Rc<FrameLoop>,
}

impl WebHost {
    pub fn new(window: web::Window, canvas: web::HtmlCanvasElement, scene: Scene) -> Self {
        let frames = Rc::new(FrameLoop {
            window: window.clone(),
            alive: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        Self {
            window,
            canvas,
            scene,
            listeners: FnvHashMap::default(),
            frames,
        }
    }

    fn target(&self, event: HostEvent) -> &web::EventTarget {
        match event.target() {
            hero_core::EventTarget::Surface => AsRef::<web::EventTarget>::as_ref(&self.canvas),
            hero_core::EventTarget::Window => AsRef::<web::EventTarget>::as_ref(&self.window),
        }
    }

    fn listener_for(&self, event: HostEvent) -> Listener {
        let scene = self.scene.clone();
        match event {
            HostEvent::PointerMove => {
                let canvas = self.canvas.clone();
                Closure::wrap(Box::new(move |ev: web::Event| {
                    if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                        let pos = dom::pointer_canvas_px(pe, &canvas);
                        scene.borrow_mut().handle(InputEvent::PointerMove(pos));
                    }
                }) as Box<dyn FnMut(_)>)
            }
            HostEvent::PointerLeave => Closure::wrap(Box::new(move |_ev: web::Event| {
                scene.borrow_mut().handle(InputEvent::PointerLeave);
            }) as Box<dyn FnMut(_)>),
            HostEvent::Scroll => {
                let window = self.window.clone();
                Closure::wrap(Box::new(move |_ev: web::Event| {
                    let offset_y = window.scroll_y().unwrap_or(0.0) as f32;
                    scene.borrow_mut().handle(InputEvent::Scroll { offset_y });
                }) as Box<dyn FnMut(_)>)
            }
            HostEvent::Resize => {
                let window = self.window.clone();
                let canvas = self.canvas.clone();
                Closure::wrap(Box::new(move |_ev: web::Event| {
                    let container_width = dom::container_width(&canvas, &window);
                    scene
                        .borrow_mut()
                        .handle(InputEvent::Resize { container_width });
                }) as Box<dyn FnMut(_)>)
            }
        }
    }
}

impl Host for WebHost {
    fn add_listener(&mut self, event: HostEvent) -> Result<(), HostError> {
        let listener = self.listener_for(event);
        self.target(event)
            .add_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listen {
                event,
                reason: format!("{:?}", e),
            })?;
        self.listeners.insert(event, listener);
        Ok(())
    }

    fn remove_listener(&mut self, event: HostEvent) {
        if let Some(listener) = self.listeners.remove(&event) {
            let _ = self.target(event).remove_event_listener_with_callback(
                event.dom_name(),
                listener.as_ref().unchecked_ref(),
            );
        }
    }

    fn request_frames(&mut self) -> Result<(), HostError> {
        let frames = Rc::downgrade(&self.frames);
        let scene = self.scene.clone();
        let started = Instant::now();
        let tick = Closure::wrap(Box::new(move || {
            let Some(frames) = frames.upgrade() else {
                return;
            };
            frames.pending.set(None);
            if !frames.alive.get() {
                return;
            }
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            scene.borrow_mut().frame(now_ms);
            if let Err(e) = frames.schedule() {
                log::error!("[frame] loop halted: {}", e);
                frames.alive.set(false);
            }
        }) as Box<dyn FnMut()>);
        *self.frames.tick.borrow_mut() = Some(tick);
        self.frames.alive.set(true);
        self.frames.schedule()
    }

    fn cancel_frames(&mut self) {
        self.frames.alive.set(false);
        if let Some(id) = self.frames.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.frames.tick.borrow_mut().take();
    }
}
