//! Frame scheduling and time source seams
//!
//! The controller never runs callbacks itself. It asks for a frame, gets a
//! handle back, and expects the host to call `GestureController::on_frame`
//! with that handle before the next repaint. A scheduler that cannot
//! deliver a frame says so up front by returning `None`.

/// Identifies one requested frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u32);

/// "Run before the next display refresh" with unconditional cancel
pub trait FrameScheduler {
    /// Ask for a frame, `None` if it can never fire
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a pending frame. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Monotonic time in milliseconds
pub trait Clock {
    fn now(&self) -> f64;
}
