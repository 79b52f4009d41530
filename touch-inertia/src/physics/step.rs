//! Step generator - per-axis inertial deceleration
//!
//! Seeded with the displacement and time of the release trend, then
//! advanced once per frame. Each step integrates velocity over a fixed
//! time quantum while the braking term grows linearly, so the fling
//! eases out and stops. Once stopped it stays stopped.

/// Time quantum integrated per frame
pub const ACCUMULATION: f64 = 6.0;

/// Per-frame growth of the deceleration, as a fraction of `a0`
pub const FRICTION_GROWTH: f64 = 0.04;

/// Initial deceleration is `-a0 / INITIAL_FRICTION_DIVISOR`
const INITIAL_FRICTION_DIVISOR: f64 = 15.0;

/// `a0 = v0 / t / A0_DIVISOR`
const A0_DIVISOR: f64 = 10.0;

/// Deceleration state for one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepGenerator {
    /// Current velocity
    v: f64,
    /// Current deceleration
    a: f64,
    /// Reference deceleration fixed at construction
    a0: f64,
}

impl StepGenerator {
    /// Build from total displacement `s` over time `t`.
    ///
    /// Returns `None` when `t` is not a positive span, since the
    /// deceleration would divide by zero.
    pub fn new(s: f64, t: f64) -> Option<Self> {
        if !(t > 0.0) || !s.is_finite() {
            return None;
        }
        let v0 = s / t;
        let a0 = v0 / t / A0_DIVISOR;
        Some(Self {
            v: v0,
            a: -a0 / INITIAL_FRICTION_DIVISOR,
            a0,
        })
    }

    /// Pure transition: next state and the displacement covered by this frame
    pub fn advance(self) -> (Self, f64) {
        let next_a = self.a + FRICTION_GROWTH * self.a0;
        let next_v = self.v - self.a * ACCUMULATION;
        let delta_s = (self.v + next_v) / 2.0 * ACCUMULATION;

        // Zero or sign change ends the fling
        if self.v * next_v <= 0.0 {
            return (Self { v: 0.0, a: 0.0, ..self }, 0.0);
        }

        (Self { v: next_v, a: next_a, ..self }, delta_s)
    }

    /// Advance one frame in place, returning the displacement
    pub fn step(&mut self) -> f64 {
        let (next, delta_s) = self.advance();
        *self = next;
        delta_s
    }

    pub fn velocity(&self) -> f64 {
        self.v
    }

    /// True once velocity has settled to zero
    pub fn is_stopped(&self) -> bool {
        self.v == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_stop(generator: &mut StepGenerator) -> Vec<f64> {
        let mut steps = Vec::new();
        for _ in 0..10_000 {
            let delta = generator.step();
            if delta == 0.0 {
                return steps;
            }
            steps.push(delta);
        }
        panic!("generator never stopped");
    }

    #[test]
    fn test_initial_state() {
        let generator = StepGenerator::new(100.0, 50.0).unwrap();
        assert_eq!(generator.velocity(), 2.0);
        assert!((generator.a0 - 0.004).abs() < 1e-12);
        assert!((generator.a + 0.004 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_step_is_forward_and_bounded() {
        let mut generator = StepGenerator::new(100.0, 50.0).unwrap();
        let first = generator.step();
        assert!(first > 0.0);
        assert!(first < 100.0);
    }

    #[test]
    fn test_first_steps_follow_trapezoid() {
        let a0 = 0.004;
        let mut generator = StepGenerator::new(100.0, 50.0).unwrap();

        // (2 + 2.0016) / 2 * 6
        assert!((generator.step() - 12.0048).abs() < 1e-9);
        assert!((generator.velocity() - 2.0016).abs() < 1e-12);
        assert!((generator.a - (-a0 / 15.0 + 0.04 * a0)).abs() < 1e-12);

        // v: 2.0016 -> 2.00224, (2.0016 + 2.00224) / 2 * 6
        assert!((generator.step() - 12.01152).abs() < 1e-9);
        assert!((generator.velocity() - 2.00224).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_falls_every_tick_after_the_second() {
        let mut generator = StepGenerator::new(100.0, 50.0).unwrap();
        let mut velocities = Vec::new();
        while !generator.is_stopped() {
            generator.step();
            velocities.push(generator.velocity());
            assert!(velocities.len() < 10_000, "generator never stopped");
        }

        assert_eq!(velocities.last(), Some(&0.0));
        for pair in velocities[1..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_decelerates_to_a_stop() {
        let mut generator = StepGenerator::new(100.0, 50.0).unwrap();
        let steps = run_to_stop(&mut generator);
        assert!(steps.len() > 3);
        assert!(steps.iter().all(|d| *d > 0.0));

        // Braking takes over after the first couple of frames
        for pair in steps[2..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(steps.last().unwrap() < steps.first().unwrap());
        assert!(generator.is_stopped());
    }

    #[test]
    fn test_negative_fling_mirrors_positive() {
        let mut forward = StepGenerator::new(80.0, 40.0).unwrap();
        let mut backward = StepGenerator::new(-80.0, 40.0).unwrap();
        let forward_steps = run_to_stop(&mut forward);
        let backward_steps = run_to_stop(&mut backward);

        assert_eq!(forward_steps.len(), backward_steps.len());
        for (f, b) in forward_steps.iter().zip(&backward_steps) {
            assert!((f + b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stopped_generator_stays_quiet() {
        let mut generator = StepGenerator::new(30.0, 60.0).unwrap();
        run_to_stop(&mut generator);
        for _ in 0..5 {
            assert_eq!(generator.step(), 0.0);
            assert!(generator.is_stopped());
        }
    }

    #[test]
    fn test_zero_displacement_never_moves() {
        let mut generator = StepGenerator::new(0.0, 50.0).unwrap();
        assert_eq!(generator.step(), 0.0);
        assert!(generator.is_stopped());
    }

    #[test]
    fn test_zero_time_span_is_rejected() {
        assert!(StepGenerator::new(100.0, 0.0).is_none());
        assert!(StepGenerator::new(100.0, -5.0).is_none());
    }

    #[test]
    fn test_advance_is_pure() {
        let generator = StepGenerator::new(100.0, 50.0).unwrap();
        let (next, delta) = generator.advance();
        let (again, delta_again) = generator.advance();
        assert_eq!(next, again);
        assert_eq!(delta, delta_again);
        assert_ne!(next, generator);
    }
}
