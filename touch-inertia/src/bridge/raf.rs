//! Browser frame scheduler and clock
//!
//! `RafScheduler` backs `FrameScheduler` with requestAnimationFrame.
//! Closures stay alive until their frame is canceled or has fired, and a
//! fired closure is only freed on a later request, never while it runs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::gesture::{Clock, FrameHandle, FrameScheduler};
use super::touch_inertia::{frame_fired, BridgeState};

pub struct RafScheduler {
    window: web_sys::Window,
    /// Bridge state the frames tick (weak: the state owns this scheduler)
    owner: Weak<RefCell<BridgeState>>,
    next_id: u32,
    /// Requested frames: our handle -> (browser request id, callback)
    pending: HashMap<FrameHandle, (i32, Closure<dyn FnMut()>)>,
    /// Fired callbacks waiting to be freed
    retired: Vec<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub(crate) fn new(window: web_sys::Window, owner: Weak<RefCell<BridgeState>>) -> Self {
        Self {
            window,
            owner,
            next_id: 0,
            pending: HashMap::new(),
            retired: Vec::new(),
        }
    }

    /// Called once a frame's callback has finished its work
    pub(crate) fn retire(&mut self, handle: FrameHandle) {
        if let Some((_, callback)) = self.pending.remove(&handle) {
            self.retired.push(callback);
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.retired.clear();
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);

        let owner = self.owner.clone();
        let callback = Closure::<dyn FnMut()>::new(move || frame_fired(&owner, handle));
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(request_id) => {
                self.pending.insert(handle, (request_id, callback));
                Some(handle)
            }
            Err(err) => {
                web_sys::console::error_2(&"requestAnimationFrame failed:".into(), &err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some((request_id, _callback)) = self.pending.remove(&handle) {
            if let Err(err) = self.window.cancel_animation_frame(request_id) {
                web_sys::console::warn_2(&"cancelAnimationFrame failed:".into(), &err);
            }
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        for (request_id, _) in self.pending.values() {
            let _ = self.window.cancel_animation_frame(*request_id);
        }
    }
}

/// `performance.now()`, or `Date.now()` where Performance is missing
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

impl PerformanceClock {
    pub fn new(window: &web_sys::Window) -> Self {
        Self {
            performance: window.performance(),
        }
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
