//! Page-level failures. None of these ever escapes a handler: they are
//! logged through [`report`] and the affected feature goes inert.

use log::{error, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("{0} library not found")]
    MissingLibrary(&'static str),

    #[error("browser API unavailable: {0}")]
    MissingApi(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

impl PageError {
    /// Environment problems degrade a feature, everything else is a fault.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            PageError::MissingElement(_) | PageError::MissingLibrary(_) | PageError::MissingApi(_)
        )
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(text)
    }
}

/// Log a handler's outcome and swallow the error.
pub fn report<T>(context: &str, result: Result<T, PageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_environment() => {
            warn!("⚠️ {}: {}", context, e);
            None
        }
        Err(e) => {
            error!("❌ {}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_errors_are_warnings() {
        assert!(PageError::MissingLibrary("Lucide").is_environment());
        assert!(PageError::MissingElement("#contact".into()).is_environment());
        assert!(PageError::MissingApi("IntersectionObserver").is_environment());
        assert!(!PageError::Js("boom".into()).is_environment());
    }

    #[test]
    fn report_swallows_errors() {
        assert_eq!(report("icons", Ok::<_, PageError>(3)), Some(3));
        assert_eq!(report::<()>("icons", Err(PageError::MissingLibrary("Lucide"))), None);
        assert_eq!(report::<()>("ripple", Err(PageError::Js("detached".into()))), None);
    }

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            PageError::MissingLibrary("Lucide").to_string(),
            "Lucide library not found"
        );
        assert_eq!(
            PageError::MissingElement("name".into()).to_string(),
            "element not found: name"
        );
    }
}
