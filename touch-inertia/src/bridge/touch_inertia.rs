//! `TouchInertia` - the JS-facing gesture object
//!
//! Page code binds the element, pulls coordinates out of its touch or
//! pointer events, and forwards them here. Deltas come back through the
//! registered handlers as `({x?, y?}, rawEvent)`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use crate::gesture::{AxisDelta, Direction, Emission, FrameHandle, GestureController, InertiaConfig, Mode, Phase};
use super::error::BridgeError;
use super::raf::{PerformanceClock, RafScheduler};

/// User callbacks registered from JS
#[derive(Default)]
struct Handlers {
    start: Option<Function>,
    moved: Option<Function>,
    end: Option<Function>,
}

pub(crate) struct BridgeState {
    controller: GestureController<RafScheduler, PerformanceClock>,
    handlers: Handlers,
    /// Most recent raw event, handed to frame-driven callbacks
    last_event: JsValue,
    /// Passed through untouched for the page's own binding code
    target: JsValue,
}

/// Constructor options: `{ target?, mode?, direction? }`
struct BridgeOptions {
    config: InertiaConfig,
    target: JsValue,
}

impl BridgeOptions {
    fn read(options: &JsValue) -> Result<Self, BridgeError> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self { config: InertiaConfig::default(), target: JsValue::UNDEFINED });
        }
        if !options.is_object() {
            return Err(BridgeError::InvalidOptions);
        }

        let get = |key: &'static str| {
            Reflect::get(options, &key.into()).map_err(|_| BridgeError::InvalidOption(key))
        };
        let config = config_from(|key| {
            let value = get(key)?;
            if value.is_undefined() || value.is_null() {
                return Ok(None);
            }
            value.as_string().map(Some).ok_or(BridgeError::InvalidOption(key))
        })?;
        let target = get("target")?;

        Ok(Self { config, target })
    }
}

/// Build the config from option fields, each read as an optional string
fn config_from(
    mut field: impl FnMut(&'static str) -> Result<Option<String>, BridgeError>,
) -> Result<InertiaConfig, BridgeError> {
    let mut config = InertiaConfig::default();
    if let Some(mode) = field("mode")? {
        config.mode = mode.parse()?;
    }
    if let Some(direction) = field("direction")? {
        config.direction = direction.parse()?;
    }
    Ok(config)
}

fn delta_to_js(delta: &AxisDelta) -> JsValue {
    let object = Object::new();
    if let Some(x) = delta.x {
        let _ = Reflect::set(&object, &"x".into(), &x.into());
    }
    if let Some(y) = delta.y {
        let _ = Reflect::set(&object, &"y".into(), &y.into());
    }
    object.into()
}

fn report(result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_2(&"touch-inertia handler threw:".into(), &err);
    }
}

fn emit(handler: Option<Function>, delta: &AxisDelta, event: &JsValue) {
    if let Some(handler) = handler {
        report(handler.call2(&JsValue::NULL, &delta_to_js(delta), event));
    }
}

/// Frame callback body. Handlers run after the state borrow is released
/// so they can call back into `TouchInertia`.
pub(crate) fn frame_fired(owner: &Weak<RefCell<BridgeState>>, handle: FrameHandle) {
    let Some(state) = owner.upgrade() else {
        return;
    };

    let dispatch = {
        let mut state = state.borrow_mut();
        state.controller.on_frame(handle).map(|emission| {
            let (handler, delta) = match emission {
                Emission::Move(delta) => (state.handlers.moved.clone(), delta),
                Emission::Inertia(delta) => (state.handlers.end.clone(), delta),
            };
            (handler, delta, state.last_event.clone())
        })
    };
    if let Some((handler, delta, event)) = dispatch {
        emit(handler, &delta, &event);
    }

    state.borrow_mut().controller.scheduler_mut().retire(handle);
}

#[wasm_bindgen]
pub struct TouchInertia {
    state: Rc<RefCell<BridgeState>>,
}

#[wasm_bindgen]
impl TouchInertia {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<TouchInertia, JsValue> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let BridgeOptions { config, target } = BridgeOptions::read(&options)?;
        let clock = PerformanceClock::new(&window);

        let state = Rc::new_cyclic(|owner| {
            RefCell::new(BridgeState {
                controller: GestureController::new(config, RafScheduler::new(window, owner.clone()), clock),
                handlers: Handlers::default(),
                last_event: JsValue::UNDEFINED,
                target,
            })
        });

        console_log!("👆 touch-inertia ready (mode={}, direction={})", config.mode, config.direction);
        Ok(Self { state })
    }

    /// Register the handler called with `(rawEvent)` when a contact starts
    pub fn touchstart(&self, handler: Function) {
        self.state.borrow_mut().handlers.start = Some(handler);
    }

    /// Register the handler called with `(delta, rawEvent)` while dragging
    pub fn touchmove(&self, handler: Function) {
        self.state.borrow_mut().handlers.moved = Some(handler);
    }

    /// Register the handler called with `(delta, rawEvent)` on release and each inertia frame
    pub fn touchend(&self, handler: Function) {
        self.state.borrow_mut().handlers.end = Some(handler);
    }

    #[wasm_bindgen(js_name = onStart)]
    pub fn on_start(&self, x: f64, y: f64, event: JsValue) {
        let handler = {
            let mut state = self.state.borrow_mut();
            state.controller.start(x, y);
            state.last_event = event.clone();
            state.handlers.start.clone()
        };
        if let Some(handler) = handler {
            report(handler.call1(&JsValue::NULL, &event));
        }
    }

    #[wasm_bindgen(js_name = onMove)]
    pub fn on_move(&self, x: f64, y: f64, event: JsValue) {
        let dispatch = {
            let mut state = self.state.borrow_mut();
            state.last_event = event.clone();
            state.controller.move_to(x, y).map(|delta| (state.handlers.moved.clone(), delta))
        };
        if let Some((handler, delta)) = dispatch {
            emit(handler, &delta, &event);
        }
    }

    #[wasm_bindgen(js_name = onEnd)]
    pub fn on_end(&self, x: f64, y: f64, event: JsValue) {
        let dispatch = {
            let mut state = self.state.borrow_mut();
            state.last_event = event.clone();
            state.controller.end(x, y).map(|delta| (state.handlers.end.clone(), delta))
        };
        if let Some((handler, delta)) = dispatch {
            emit(handler, &delta, &event);
        }
    }

    /// Stop any running fling or pending move flush
    #[wasm_bindgen(js_name = clearInertiaScroll)]
    pub fn clear_inertia_scroll(&self) {
        self.state.borrow_mut().controller.clear_inertia();
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode: Mode = mode.parse().map_err(BridgeError::from)?;
        self.state.borrow_mut().controller.set_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setDirection)]
    pub fn set_direction(&self, direction: &str) -> Result<(), JsValue> {
        let direction: Direction = direction.parse().map_err(BridgeError::from)?;
        self.state.borrow_mut().controller.set_direction(direction);
        Ok(())
    }

    /// The `target` option as given
    #[wasm_bindgen(getter)]
    pub fn target(&self) -> JsValue {
        self.state.borrow().target.clone()
    }

    /// "idle", "tracking" or "inertia"
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        match self.state.borrow().controller.phase() {
            Phase::Idle => "idle",
            Phase::Tracking => "tracking",
            Phase::Inertia => "inertia",
        }
        .to_string()
    }

    /// Release velocity (px/ms) estimated from the current trend, `[vx, vy]`
    #[wasm_bindgen(getter, js_name = trendVelocity)]
    pub fn trend_velocity(&self) -> Option<Vec<f64>> {
        let state = self.state.borrow();
        state.controller.trend().velocity().map(|(vx, vy)| vec![vx, vy])
    }
}
