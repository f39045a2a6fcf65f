//! Monotonic milliseconds for toast timelines and throttles.

/// `performance.now()` in the browser; `0.0` elsewhere or when the page has
/// no `Performance` object.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
