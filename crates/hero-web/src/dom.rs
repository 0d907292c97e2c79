use glam::Vec2;
use hero_core::FieldConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::pointer;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// The canvas' 2D context, or `None` when the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn container_width(canvas: &web::HtmlCanvasElement, window: &web::Window) -> f32 {
    let parent = canvas.parent_element().map(|p| p.client_width() as f64);
    let inner = window.inner_width().ok().and_then(|v| v.as_f64());
    pointer::container_width(parent, inner)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    pointer::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Defaults overridden by any `data-*` attributes present on the canvas.
/// Bad values are logged and skipped.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut config = FieldConfig::default();
    for key in FieldConfig::ATTRIBUTE_KEYS {
        let Some(value) = canvas.get_attribute(&pointer::data_attribute(key)) else {
            continue;
        };
        if let Err(e) = config.apply_attribute(key, &value) {
            log::warn!("[config] ignoring data-{}: {}", key, e);
        }
    }
    config
}
