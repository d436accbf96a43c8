//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Frame delta sanitising
//! - JS bindings (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::MAX_FRAME_DT;

/// Initialise logging for the native binary (`RUST_LOG` controls the filter)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::init();
}

/// Initialise browser console logging and panic reporting
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// Clamp a host frame delta so a stalled tab doesn't teleport creatures
#[inline]
pub fn frame_delta(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}
