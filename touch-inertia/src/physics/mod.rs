//! Physics module - samples, trend filtering and inertial deceleration
//!
//! Re-exports only. All logic in submodules.

mod sample;
mod trend;
mod step;

pub use sample::{Sample, Delta, track_delta};
pub use trend::{TrendBuffer, MAX_TREND_LENGTH, STALE_GAP_MS, STALE_SPEED};
pub use step::{StepGenerator, ACCUMULATION, FRICTION_GROWTH};
