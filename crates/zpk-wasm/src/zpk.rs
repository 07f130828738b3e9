//! WASM bindings for SISO zeros/poles/gain systems

use js_sys::Float64Array;
use num_complex::Complex64;
use wasm_bindgen::prelude::*;
use zpk_core::{FrequencyResponse, ResponseOptions, SweepType, ZerosAndPolesSiso};

use crate::frequency::WasmFrequency;

fn to_js_err(err: zpk_core::ZpkError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Join split real/imaginary parts into complex roots
fn join_complex(re: &[f64], im: &[f64]) -> Result<Vec<Complex64>, JsValue> {
    if re.len() != im.len() {
        return Err(JsValue::from_str(&format!(
            "Real and imaginary parts must have the same length ({} != {})",
            re.len(),
            im.len()
        )));
    }
    Ok(re
        .iter()
        .zip(im)
        .map(|(&r, &i)| Complex64::new(r, i))
        .collect())
}

/// SISO zeros/poles/gain system for WASM
#[wasm_bindgen]
pub struct WasmZerosAndPoles {
    inner: ZerosAndPolesSiso,
}

#[wasm_bindgen]
impl WasmZerosAndPoles {
    /// Create a system from gain, zeros and poles
    ///
    /// Zeros and poles are given as separate real and imaginary parts.
    /// Complex roots must come in adjacent conjugate pairs.
    #[wasm_bindgen(constructor)]
    pub fn new(
        k: f64,
        z_re: Vec<f64>,
        z_im: Vec<f64>,
        p_re: Vec<f64>,
        p_im: Vec<f64>,
    ) -> Result<WasmZerosAndPoles, JsValue> {
        let z = join_complex(&z_re, &z_im)?;
        let p = join_complex(&p_re, &p_im)?;
        let inner = ZerosAndPolesSiso::from_roots(k, &z, &p).map_err(to_js_err)?;
        Ok(WasmZerosAndPoles { inner })
    }

    /// Gain
    #[wasm_bindgen(getter)]
    pub fn k(&self) -> f64 {
        self.inner.gain()
    }

    #[wasm_bindgen(setter)]
    pub fn set_k(&mut self, k: f64) {
        self.inner.set_k(k);
    }

    /// Number of poles
    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Real parts of the poles
    #[wasm_bindgen(getter, js_name = polesRe)]
    pub fn poles_re(&self) -> Float64Array {
        let re: Vec<f64> = self.inner.poles().iter().map(|p| p.re).collect();
        Float64Array::from(re.as_slice())
    }

    /// Imaginary parts of the poles
    #[wasm_bindgen(getter, js_name = polesIm)]
    pub fn poles_im(&self) -> Float64Array {
        let im: Vec<f64> = self.inner.poles().iter().map(|p| p.im).collect();
        Float64Array::from(im.as_slice())
    }

    /// Evaluate at `s = re + j*im`, returned as `[re, im]`
    #[wasm_bindgen(js_name = evaluateAtS)]
    pub fn evaluate_at_s(&self, re: f64, im: f64, den_min: Option<f64>) -> Float64Array {
        let y = self
            .inner
            .evaluate_at_s(Complex64::new(re, im), den_min.unwrap_or(0.0));
        Float64Array::from([y.re, y.im].as_slice())
    }

    /// Frequency response over `n + 1` points
    ///
    /// @param n - Number of frequency intervals (default 200)
    /// @param f_min - Optional lower frequency in Hz, requires f_max
    /// @param f_max - Optional upper frequency in Hz, requires f_min
    /// @param linear - Linear instead of logarithmic spacing
    #[wasm_bindgen(js_name = frequencyResponse)]
    pub fn frequency_response(
        &self,
        n: Option<usize>,
        f_min: Option<f64>,
        f_max: Option<f64>,
        linear: Option<bool>,
    ) -> Result<WasmFrequencyResponse, JsValue> {
        let f_range = match (f_min, f_max) {
            (Some(lo), Some(hi)) => Some((lo, hi)),
            (None, None) => None,
            _ => return Err(JsValue::from_str("f_min and f_max must be given together")),
        };
        let opts = ResponseOptions {
            n: n.unwrap_or(ResponseOptions::default().n),
            f_range,
            sweep_type: if linear.unwrap_or(false) {
                SweepType::Linear
            } else {
                SweepType::Log
            },
        };
        let resp = self.inner.frequency_response(&opts).map_err(to_js_err)?;
        Ok(WasmFrequencyResponse { inner: resp })
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

/// Frequency response of a SISO system for WASM
#[wasm_bindgen]
pub struct WasmFrequencyResponse {
    inner: FrequencyResponse,
}

#[wasm_bindgen]
impl WasmFrequencyResponse {
    /// Frequency sweep of the response
    #[wasm_bindgen(getter)]
    pub fn frequency(&self) -> WasmFrequency {
        WasmFrequency::from_frequency(self.inner.frequency.clone())
    }

    /// Frequencies in Hz
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.f())
    }

    /// Magnitude in dB
    #[wasm_bindgen(getter, js_name = magnitudeDb)]
    pub fn magnitude_db(&self) -> Float64Array {
        Float64Array::from(self.inner.magnitude_db().to_vec().as_slice())
    }

    /// Phase in degrees
    #[wasm_bindgen(getter, js_name = phaseDeg)]
    pub fn phase_deg(&self) -> Float64Array {
        Float64Array::from(self.inner.phase_deg().to_vec().as_slice())
    }

    /// Real parts of the response
    #[wasm_bindgen(getter)]
    pub fn re(&self) -> Float64Array {
        let re: Vec<f64> = self.inner.y.iter().map(|y| y.re).collect();
        Float64Array::from(re.as_slice())
    }

    /// Imaginary parts of the response
    #[wasm_bindgen(getter)]
    pub fn im(&self) -> Float64Array {
        let im: Vec<f64> = self.inner.y.iter().map(|y| y.im).collect();
        Float64Array::from(im.as_slice())
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}
