#![cfg(target_arch = "wasm32")]
use hero_core::{AnimationHandle, Hero};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod host;
mod pointer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web loaded");
    Ok(())
}

/// A mounted hero animation. `unmount()` (or `free()` from JS) detaches
/// every listener and stops the frame loop.
#[wasm_bindgen]
pub struct HeroHandle {
    animation: Option<AnimationHandle<host::WebHost>>,
}

#[wasm_bindgen]
impl HeroHandle {
    pub fn unmount(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation
            .as_ref()
            .map_or(false, |a| a.is_running())
    }
}

/// Start the animation on `<canvas id=canvas_id>`. Resolves to `undefined`
/// when the canvas or its 2D context is unavailable.
#[wasm_bindgen(js_name = mountHero)]
pub fn mount_hero(canvas_id: &str) -> Result<Option<HeroHandle>, JsValue> {
    mount(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount(canvas_id: &str) -> anyhow::Result<Option<HeroHandle>> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let Some(canvas) = dom::canvas_by_id(&document, canvas_id) else {
        log::warn!("[hero] missing #{}; animation skipped", canvas_id);
        return Ok(None);
    };
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[hero] no 2d context on #{}; animation skipped", canvas_id);
        return Ok(None);
    };

    let config = dom::read_config(&canvas);
    let container_width = dom::container_width(&canvas, &window);
    let mut rng = config.rng();
    let surface = canvas::CanvasSurface::new(canvas.clone(), ctx);
    let hero = Hero::mount(config, container_width, surface, &mut rng)?;

    let host = host::WebHost::new(window, canvas, Rc::new(RefCell::new(hero)));
    let animation = AnimationHandle::start(host)?;
    Ok(Some(HeroHandle {
        animation: Some(animation),
    }))
}
