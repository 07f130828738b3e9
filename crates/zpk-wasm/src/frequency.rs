//! WASM bindings for Frequency class

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use zpk_core::frequency::{Frequency, SweepType};

/// Frequency sweep for WASM
#[wasm_bindgen]
pub struct WasmFrequency {
    inner: Frequency,
}

#[wasm_bindgen]
impl WasmFrequency {
    /// Create a new frequency sweep
    ///
    /// @param start - Start frequency in Hz
    /// @param stop - Stop frequency in Hz
    /// @param npoints - Number of frequency points
    /// @param sweep_type - Sweep type ('linear' or 'log')
    #[wasm_bindgen(constructor)]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        sweep_type: Option<String>,
    ) -> Result<WasmFrequency, JsValue> {
        let sweep = match sweep_type.as_deref().unwrap_or("log").to_lowercase().as_str() {
            "linear" | "lin" => SweepType::Linear,
            "log" | "logarithmic" => SweepType::Log,
            s => return Err(JsValue::from_str(&format!("Invalid sweep type: {}", s))),
        };

        Ok(WasmFrequency {
            inner: Frequency::new(start, stop, npoints, sweep),
        })
    }

    /// Get frequency array in Hz as Float64Array
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.f())
    }

    /// Get angular frequency array in rad/s
    #[wasm_bindgen(getter)]
    pub fn w(&self) -> Float64Array {
        Float64Array::from(self.inner.w().as_slice())
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Sweep type as string
    #[wasm_bindgen(getter, js_name = sweepType)]
    pub fn sweep_type(&self) -> String {
        match self.inner.sweep_type() {
            SweepType::Linear => "linear".to_string(),
            SweepType::Log => "log".to_string(),
        }
    }
}

impl WasmFrequency {
    /// Create from existing Frequency
    pub fn from_frequency(freq: Frequency) -> Self {
        Self { inner: freq }
    }
}
