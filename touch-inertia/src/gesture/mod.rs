//! Gesture module - configuration, scheduling seams and the touch state machine
//!
//! Re-exports only. No JS types in here; the bridge adapts them.

mod config;
mod axis;
mod scheduler;
mod controller;

pub use config::{ConfigError, Direction, InertiaConfig, Mode};
pub use axis::AxisDelta;
pub use scheduler::{Clock, FrameHandle, FrameScheduler};
pub use controller::{Emission, GestureController, Phase};
