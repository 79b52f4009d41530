//! Axis-filtered deltas handed to user callbacks

use super::config::Direction;
use crate::physics::Delta;

/// Delta carrying only the axes allowed by a `Direction`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisDelta {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AxisDelta {
    pub fn new(direction: Direction, x: f64, y: f64) -> Self {
        Self {
            x: direction.includes_x().then_some(x),
            y: direction.includes_y().then_some(y),
        }
    }

    pub fn zero(direction: Direction) -> Self {
        Self::new(direction, 0.0, 0.0)
    }

    pub fn from_delta(direction: Direction, delta: &Delta) -> Self {
        Self::new(direction, delta.x, delta.y)
    }

    /// True when every reported axis is zero
    pub fn is_zero(&self) -> bool {
        self.x.unwrap_or(0.0) == 0.0 && self.y.unwrap_or(0.0) == 0.0
    }
}
