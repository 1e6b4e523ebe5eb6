use js_sys::{Function, Reflect};
use landing_page::error::PageError;
use log::info;
use wasm_bindgen::{JsCast, JsValue};

use super::window;

/// Swap every `data-lucide` placeholder for its SVG. The icon script is
/// loaded from a CDN in `index.html` and may be blocked.
pub fn activate_icons() -> Result<(), PageError> {
    let window = window()?;
    let lucide = Reflect::get(&window, &JsValue::from_str("lucide"))?;
    if lucide.is_undefined() || lucide.is_null() {
        return Err(PageError::MissingLibrary("Lucide"));
    }
    let create_icons = Reflect::get(&lucide, &JsValue::from_str("createIcons"))?
        .dyn_into::<Function>()
        .map_err(|_| PageError::MissingLibrary("Lucide"))?;
    create_icons.call0(&lucide)?;
    info!("✅ Lucide icons initialized");
    Ok(())
}
