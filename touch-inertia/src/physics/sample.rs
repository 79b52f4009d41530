//! Contact samples and the displacement between two of them

use nalgebra::Vector2;

/// A timestamped contact position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    /// Position in page pixels
    pub x: f64,
    pub y: f64,

    /// Timestamp in milliseconds (monotonic clock)
    pub t: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    /// Displacement from `prev` to `self`
    pub fn delta_from(&self, prev: &Sample) -> Delta {
        Delta {
            x: self.x - prev.x,
            y: self.y - prev.y,
            t: self.t - prev.t,
        }
    }
}

/// Relative displacement between two samples
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Delta {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

impl Delta {
    /// Straight-line distance covered
    pub fn distance(&self) -> f64 {
        Vector2::new(self.x, self.y).norm()
    }

    /// Average speed in pixels per millisecond, `None` over a zero time span
    pub fn speed(&self) -> Option<f64> {
        if self.t > 0.0 {
            Some(self.distance() / self.t)
        } else {
            None
        }
    }
}

/// Delta of `curr` against the previous reference, then moves the reference to `curr`.
///
/// With no previous reference the delta is zero.
pub fn track_delta(prev: &mut Option<Sample>, curr: Sample) -> Delta {
    let base = prev.unwrap_or(curr);
    *prev = Some(curr);
    curr.delta_from(&base)
}
