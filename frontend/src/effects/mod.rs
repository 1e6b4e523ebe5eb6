pub mod icons;
pub mod motion;
pub mod reveal;
pub mod ripple;
pub mod scroll;

use landing_page::error::PageError;
use web_sys::{Document, Window};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingApi("window"))
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingApi("document"))
}
