//! Trend buffer - short history of the current fast motion
//!
//! Keeps the last few samples of one continuous drag. A long, slow gap
//! means the finger paused, so everything before it is dropped and only
//! the motion after the pause can seed inertia.

use std::collections::VecDeque;
use super::sample::Sample;

/// Maximum samples kept
pub const MAX_TREND_LENGTH: usize = 4;

/// Gap (ms) after which a slow sample counts as a pause
pub const STALE_GAP_MS: f64 = 50.0;

/// Speed (px/ms) below which a long gap counts as a pause
pub const STALE_SPEED: f64 = 0.3;

/// Bounded FIFO of recent samples
#[derive(Clone, Debug)]
pub struct TrendBuffer {
    samples: VecDeque<Sample>,
}

impl TrendBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_TREND_LENGTH + 1),
        }
    }

    /// Admit a sample, resetting on a slow pause and evicting the oldest past capacity
    pub fn admit(&mut self, sample: Sample) {
        let Some(last) = self.samples.back() else {
            self.samples.push_back(sample);
            return;
        };

        let gap = sample.delta_from(last);
        if gap.t > STALE_GAP_MS && gap.speed().is_some_and(|speed| speed < STALE_SPEED) {
            self.samples.clear();
        }
        self.samples.push_back(sample);

        while self.samples.len() > MAX_TREND_LENGTH {
            self.samples.pop_front();
        }
    }

    /// At least two samples, enough to estimate a release velocity
    pub fn has_enough_trend(&self) -> bool {
        self.samples.len() > 1
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Average velocity (px/ms per axis) from oldest to newest sample
    pub fn velocity(&self) -> Option<(f64, f64)> {
        if !self.has_enough_trend() {
            return None;
        }
        let (first, last) = (self.first()?, self.last()?);
        let span = last.delta_from(first);
        if span.t <= 0.0 {
            return None;
        }
        Some((span.x / span.t, span.y / span.t))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for TrendBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(samples: &[Sample]) -> TrendBuffer {
        let mut buffer = TrendBuffer::new();
        for s in samples {
            buffer.admit(*s);
        }
        buffer
    }

    fn contents(buffer: &TrendBuffer) -> Vec<Sample> {
        buffer.iter().copied().collect()
    }

    #[test]
    fn test_short_slow_gap_appends() {
        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 0.0), Sample::new(10.0, 0.0, 40.0)]);
        assert_eq!(
            contents(&buffer),
            vec![Sample::new(0.0, 0.0, 0.0), Sample::new(10.0, 0.0, 40.0)]
        );
    }

    #[test]
    fn test_long_slow_gap_resets() {
        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 0.0), Sample::new(10.0, 0.0, 60.0)]);
        assert_eq!(contents(&buffer), vec![Sample::new(10.0, 0.0, 60.0)]);
        assert!(!buffer.has_enough_trend());
    }

    #[test]
    fn test_long_fast_gap_appends() {
        // 30px over 60ms = 0.5 px/ms
        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 0.0), Sample::new(0.0, 30.0, 60.0)]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_long_gap_at_threshold_speed_appends() {
        // 18px over 60ms is exactly 0.3 px/ms, not below it
        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 0.0), Sample::new(18.0, 0.0, 60.0)]);
        assert_eq!(buffer.len(), 2);

        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 0.0), Sample::new(17.0, 0.0, 60.0)]);
        assert_eq!(contents(&buffer), vec![Sample::new(17.0, 0.0, 60.0)]);
    }

    #[test]
    fn test_reset_after_full_buffer() {
        let mut buffer = buffer_of(&[
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(20.0, 0.0, 16.0),
            Sample::new(40.0, 0.0, 32.0),
            Sample::new(60.0, 0.0, 48.0),
        ]);
        assert_eq!(buffer.len(), 4);

        buffer.admit(Sample::new(61.0, 0.0, 200.0));
        assert_eq!(contents(&buffer), vec![Sample::new(61.0, 0.0, 200.0)]);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let mut buffer = TrendBuffer::new();
        for i in 0..10 {
            let t = i as f64 * 16.0;
            buffer.admit(Sample::new(t * 2.0, 0.0, t));
            assert!(buffer.len() <= MAX_TREND_LENGTH);
        }

        let times: Vec<f64> = buffer.iter().map(|s| s.t).collect();
        assert_eq!(times, vec![96.0, 112.0, 128.0, 144.0]);
    }

    #[test]
    fn test_has_enough_trend_tracks_length() {
        let mut buffer = TrendBuffer::new();
        assert!(!buffer.has_enough_trend());
        buffer.admit(Sample::new(0.0, 0.0, 0.0));
        assert!(!buffer.has_enough_trend());
        buffer.admit(Sample::new(5.0, 0.0, 10.0));
        assert!(buffer.has_enough_trend());
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.has_enough_trend());
    }

    #[test]
    fn test_velocity_spans_first_to_last() {
        let buffer = buffer_of(&[
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(10.0, 5.0, 10.0),
            Sample::new(40.0, -20.0, 20.0),
        ]);
        assert_eq!(buffer.velocity(), Some((2.0, -1.0)));
    }

    #[test]
    fn test_velocity_needs_time_span() {
        let buffer = buffer_of(&[Sample::new(0.0, 0.0, 5.0), Sample::new(10.0, 0.0, 5.0)]);
        assert!(buffer.has_enough_trend());
        assert_eq!(buffer.velocity(), None);
    }
}
