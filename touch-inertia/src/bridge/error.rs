//! Bridge errors surfaced to JavaScript

use thiserror::Error;
use wasm_bindgen::prelude::*;
use crate::gesture::ConfigError;

/// Errors that can occur while constructing or configuring the bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("No window found")]
    NoWindow,
    #[error("Options must be an object")]
    InvalidOptions,
    #[error("Option '{0}' could not be read as a string")]
    InvalidOption(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
