use gloo_timers::callback::Timeout;
use landing_page::config;
use landing_page::contact::Field;
use landing_page::error::{report, PageError};
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::document;
use super::motion::prefers_reduced_motion;

/// Id named by an in-page link, `None` for a bare `#` or an external href.
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_id(id: &str) -> Result<(), PageError> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?;

    let behavior = if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Click handler for `<a href="#section">` links. Links whose target is
/// missing keep the browser's default jump.
pub fn handle_anchor_click(e: &MouseEvent) -> Result<(), PageError> {
    let link = e
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .ok_or_else(|| PageError::MissingElement("anchor".to_string()))?;
    let href = match link.get_attribute("href") {
        Some(href) => href,
        None => return Ok(()),
    };
    let id = match target_id(&href) {
        Some(id) => id,
        None => return Ok(()),
    };
    if document()?.get_element_by_id(id).is_none() {
        return Ok(());
    }

    e.prevent_default();
    scroll_to_id(id)?;
    info!("🔗 Smooth scrolled to: {}", href);
    Ok(())
}

pub fn focus_field(id: &str) -> Result<(), PageError> {
    let field = document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?;
    field.focus()?;
    Ok(())
}

/// Hero call to action: bring the contact form into view, then put the
/// cursor in the first field once the scroll has had time to finish.
pub fn jump_to_contact_form() {
    info!("🎯 Primary CTA clicked");
    report("scroll to contact", scroll_to_id("contact"));
    Timeout::new(config::CTA_FOCUS_DELAY_MS, || {
        report("focus name field", focus_field(Field::Name.id()));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_page_links_resolve_to_ids() {
        assert_eq!(target_id("#features"), Some("features"));
        assert_eq!(target_id("#contact"), Some("contact"));
    }

    #[test]
    fn bare_hash_and_external_links_are_skipped() {
        assert_eq!(target_id("#"), None);
        assert_eq!(target_id(""), None);
        assert_eq!(target_id("https://example.com/#top"), None);
        assert_eq!(target_id("/pricing"), None);
    }
}
