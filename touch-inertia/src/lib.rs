//! Touch Inertia - drag deltas and fling physics for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Console logging macro
//! - wasm_bindgen start hook
//!
//! `physics` and `gesture` are plain Rust and run anywhere; `bridge`
//! adapts them to requestAnimationFrame and JS callbacks.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format_args!($($t)*).to_string()))
}

pub mod physics;
pub mod gesture;
mod bridge;

pub use bridge::{BridgeError, PerformanceClock, RafScheduler, TouchInertia};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
