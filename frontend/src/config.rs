use log::Level;

/// Simulated network latency for the contact form, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// How much of the submitted message is echoed back in the success notice.
pub const EXCERPT_CHARS: usize = 100;

// Hero CTA scrolls to the form first, focus lands once the scroll settles
pub const CTA_FOCUS_DELAY_MS: u32 = 800;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const REVEAL_SELECTOR: &str = ".feature-card, .section-header";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_delay_matches_simulated_latency() {
        assert_eq!(SUBMIT_DELAY_MS, 1500);
        assert_eq!(EXCERPT_CHARS, 100);
    }
}
