#[cfg(target_arch = "wasm32")]
thread_local! {
    static PERFORMANCE: Option<web_sys::Performance> =
        web_sys::window().and_then(|w| w.performance());
}

/// High-resolution milliseconds from the browser, 0 outside wasm
#[cfg(target_arch = "wasm32")]
pub fn performance_now() -> f64 {
    PERFORMANCE.with(|perf| perf.as_ref().map(|p| p.now()).unwrap_or(0.0))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn performance_now() -> f64 {
    0.0
}

/// Elapsed milliseconds, or `None` when the timer is unavailable or went backwards
pub fn elapsed_ms(start: f64, end: f64) -> Option<f64> {
    if start > 0.0 && end >= start {
        Some(end - start)
    } else {
        None
    }
}
