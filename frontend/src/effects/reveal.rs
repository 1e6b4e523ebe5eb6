use js_sys::{Array, Reflect};
use landing_page::config;
use landing_page::error::{report, PageError};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::motion::prefers_reduced_motion;
use super::{document, window};

/// Live observer for fade-in elements. Dropping it stops observing.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal(element: &Element) -> Result<(), PageError> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| PageError::MissingElement(element.tag_name()))?;
    let style = element.style();
    style.set_property("opacity", "1")?;
    style.set_property("transform", "translateY(0)")?;
    style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease")?;
    Ok(())
}

fn reveal_targets() -> Result<Vec<Element>, PageError> {
    let nodes = document()?.query_selector_all(config::REVEAL_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Fade each reveal target in the first time it scrolls into view.
///
/// Without motion (user preference or no observer support) everything is
/// shown straight away and `None` is returned.
pub fn observe_reveals() -> Result<Option<RevealObserver>, PageError> {
    let targets = reveal_targets()?;

    let window = window()?;
    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))?;
    if prefers_reduced_motion() || !supported {
        if !supported {
            warn!("⚠️ IntersectionObserver unavailable, showing content without animation");
        }
        for target in &targets {
            reveal(target)?;
        }
        return Ok(None);
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                report("reveal element", reveal(&target));
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(config::REVEAL_ROOT_MARGIN);
    init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    for target in &targets {
        observer.observe(target);
    }
    info!("✅ Animation observer initialized for {} elements", targets.len());

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}
