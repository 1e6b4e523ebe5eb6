/// Whether the visitor asked the OS for reduced motion. Defaults to false
/// when the media query API is unavailable.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
