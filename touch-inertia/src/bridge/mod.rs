//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod raf;
mod touch_inertia;

pub use error::BridgeError;
pub use raf::{PerformanceClock, RafScheduler};
pub use touch_inertia::TouchInertia;
