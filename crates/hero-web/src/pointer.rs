use glam::Vec2;

/// Map a client-space pointer position into canvas backing-store pixels.
///
/// The canvas is usually scaled by CSS, so the bounding rect and the backing
/// store differ in size.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local * backing / rect_size
    } else {
        local
    }
}

/// Width available to the canvas: the parent's client width, or the window
/// width when the parent is missing or has no layout yet.
#[inline]
pub fn container_width(parent_client_width: Option<f64>, window_inner_width: Option<f64>) -> f32 {
    parent_client_width
        .filter(|w| *w > 0.0)
        .or(window_inner_width)
        .unwrap_or(0.0) as f32
}

/// `data-points` style attribute name for a config key.
#[inline]
pub fn data_attribute(key: &str) -> String {
    format!("data-{key}")
}
