//! Platform abstraction layer
//!
//! Browser/native differences for logging and wall-clock seeding. Storage
//! differences live with the score store in [`crate::highscores`].

/// Route `log` output to the right sink for the target
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Non-deterministic seed for a fresh run
#[cfg(target_arch = "wasm32")]
pub fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
