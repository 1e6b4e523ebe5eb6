use gloo_timers::callback::Timeout;
use landing_page::config;
use landing_page::error::PageError;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::document;
use super::motion::prefers_reduced_motion;

/// Square ripple centred on the click, in button-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleGeometry {
    pub fn new(width: f64, height: f64, offset_x: f64, offset_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            x: offset_x - size / 2.0,
            y: offset_y - size / 2.0,
        }
    }

    fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

pub fn spawn_ripple(e: &MouseEvent) -> Result<(), PageError> {
    if prefers_reduced_motion() {
        return Ok(());
    }
    let button = e
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PageError::MissingElement(".btn".to_string()))?;

    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::new(
        rect.width(),
        rect.height(),
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
    );

    let ripple = document()?.create_element("span")?;
    ripple.set_attribute("style", &geometry.css())?;

    let style = button.style();
    style.set_property("position", "relative")?;
    style.set_property("overflow", "hidden")?;
    button.append_child(&ripple)?;

    Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_covers_the_longer_side() {
        let g = RippleGeometry::new(120.0, 40.0, 60.0, 20.0);
        assert_eq!(g.size, 120.0);
        assert_eq!(g.x, 0.0);
        assert_eq!(g.y, -40.0);
    }

    #[test]
    fn ripple_style_is_absolute_and_sized() {
        let css = RippleGeometry::new(50.0, 50.0, 10.0, 10.0).css();
        assert!(css.contains("width: 50px"));
        assert!(css.contains("left: -15px"));
        assert!(css.contains("animation: ripple 0.6s linear"));
    }
}
