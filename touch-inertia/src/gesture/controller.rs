//! Gesture controller - start / move / end state machine
//!
//! Owns the trend buffer and the previous-sample reference, delivers move
//! deltas (immediately or once per frame), and on release drives one step
//! generator per enabled axis until the fling settles.
//!
//! Lifecycle:
//! - `Idle` -> `Tracking` on `start`
//! - `Tracking` -> `Idle` on `end` without enough trend
//! - `Tracking` -> `Inertia` on `end` with enough trend
//! - `Inertia` -> `Idle` when every axis has stopped
//! - any -> `Tracking` on `start`, any -> `Idle` on `clear_inertia`

use super::axis::AxisDelta;
use super::config::{Direction, InertiaConfig, Mode};
use super::scheduler::{Clock, FrameHandle, FrameScheduler};
use crate::physics::{track_delta, Sample, StepGenerator, TrendBuffer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
    Inertia,
}

/// What a fired frame produced, and which callback should see it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Emission {
    /// Batched drag delta (animation mode)
    Move(AxisDelta),
    /// One inertia step after release
    Inertia(AxisDelta),
}

struct PendingMove {
    handle: FrameHandle,
    delta: AxisDelta,
}

struct InertiaRun {
    handle: FrameHandle,
    x: Option<StepGenerator>,
    y: Option<StepGenerator>,
}

pub struct GestureController<S: FrameScheduler, C: Clock> {
    config: InertiaConfig,
    scheduler: S,
    clock: C,
    trend: TrendBuffer,
    previous: Option<Sample>,
    phase: Phase,
    pending_move: Option<PendingMove>,
    inertia: Option<InertiaRun>,
}

impl<S: FrameScheduler, C: Clock> GestureController<S, C> {
    pub fn new(config: InertiaConfig, scheduler: S, clock: C) -> Self {
        Self {
            config,
            scheduler,
            clock,
            trend: TrendBuffer::new(),
            previous: None,
            phase: Phase::Idle,
            pending_move: None,
            inertia: None,
        }
    }

    /// Contact began. Cancels anything still scheduled from the last gesture.
    pub fn start(&mut self, x: f64, y: f64) {
        let sample = self.sample_at(x, y);
        self.cancel_scheduled();
        self.trend.clear();
        self.previous = Some(sample);
        self.phase = Phase::Tracking;
    }

    /// Contact moved.
    ///
    /// Realtime mode returns the delta right away. Animation mode parks it
    /// until the next frame (see `on_frame`) and returns `None`, unless no
    /// frame can be had, in which case it is returned right away too.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<AxisDelta> {
        let sample = self.sample_at(x, y);
        let delta = track_delta(&mut self.previous, sample);
        self.trend.admit(sample);

        let delta = AxisDelta::from_delta(self.config.direction, &delta);
        match self.config.mode {
            Mode::Realtime => Some(delta),
            Mode::Animation => {
                if let Some(pending) = self.pending_move.as_mut() {
                    pending.delta = delta;
                    return None;
                }
                match self.scheduler.request_frame() {
                    Some(handle) => {
                        self.pending_move = Some(PendingMove { handle, delta });
                        None
                    }
                    None => Some(delta),
                }
            }
        }
    }

    /// Contact lifted.
    ///
    /// Starts inertia and returns `None` when the trend supports a fling,
    /// otherwise returns a single zero delta and goes idle.
    pub fn end(&mut self, x: f64, y: f64) -> Option<AxisDelta> {
        let sample = self.sample_at(x, y);
        self.trend.admit(sample);

        if let Some(run) = self.inertia.take() {
            self.scheduler.cancel_frame(run.handle);
        }

        match self.launch_inertia() {
            Some(run) => {
                self.inertia = Some(run);
                self.phase = Phase::Inertia;
                None
            }
            None => {
                self.phase = Phase::Idle;
                Some(AxisDelta::zero(self.config.direction))
            }
        }
    }

    fn launch_inertia(&mut self) -> Option<InertiaRun> {
        if !self.trend.has_enough_trend() {
            return None;
        }
        let span = self.trend.last()?.delta_from(self.trend.first()?);
        if span.t <= 0.0 {
            return None;
        }

        let direction = self.config.direction;
        let x = direction.includes_x().then(|| StepGenerator::new(span.x, span.t)).flatten();
        let y = direction.includes_y().then(|| StepGenerator::new(span.y, span.t)).flatten();

        Some(InertiaRun {
            handle: self.scheduler.request_frame()?,
            x,
            y,
        })
    }

    /// A requested frame fired. Stale or canceled handles produce nothing.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<Emission> {
        if self.pending_move.as_ref().is_some_and(|p| p.handle == handle) {
            return self.pending_move.take().map(|p| Emission::Move(p.delta));
        }

        let run = self.inertia.as_mut().filter(|run| run.handle == handle)?;
        let dx = run.x.as_mut().map_or(0.0, StepGenerator::step);
        let dy = run.y.as_mut().map_or(0.0, StepGenerator::step);
        let delta = AxisDelta::new(self.config.direction, dx, dy);

        // Keep going while any axis moves and the scheduler still hands out frames
        let next = if delta.is_zero() { None } else { self.scheduler.request_frame() };
        match next {
            Some(next) => run.handle = next,
            None => {
                self.inertia = None;
                self.phase = Phase::Idle;
            }
        }

        Some(Emission::Inertia(delta))
    }

    /// Drop any scheduled move flush or inertia step and go idle
    pub fn clear_inertia(&mut self) {
        self.cancel_scheduled();
        self.phase = Phase::Idle;
    }

    fn cancel_scheduled(&mut self) {
        if let Some(pending) = self.pending_move.take() {
            self.scheduler.cancel_frame(pending.handle);
        }
        if let Some(run) = self.inertia.take() {
            self.scheduler.cancel_frame(run.handle);
        }
    }

    fn sample_at(&self, x: f64, y: f64) -> Sample {
        Sample::new(x, y, self.clock.now())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> InertiaConfig {
        self.config
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    pub fn trend(&self) -> &TrendBuffer {
        &self.trend
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
