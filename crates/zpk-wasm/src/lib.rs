//! WASM bindings for zpk-core
//!
//! This module exposes zpk-core functionality to JavaScript/WASM.

use wasm_bindgen::prelude::*;

mod frequency;
mod zpk;

pub use frequency::WasmFrequency;
pub use zpk::{WasmFrequencyResponse, WasmZerosAndPoles};

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
