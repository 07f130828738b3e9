//! zpk-core: zeros/poles/gain representation of LTI systems
//!
//! SISO and MIMO linear time invariant systems described by gain, zeros and
//! poles, stored as real first and second order factors and evaluated over
//! the complex plane.
//!
//! ## Modules
//!
//! - `zpk` - SISO and MIMO zeros/poles/gain systems and their frequency responses
//! - `frequency` - Frequency sweeps and automatic frequency range selection
//! - `math` - Root/polynomial conversions and unit conversions
//! - `error` - Error types
//! - `constants` - Numerical tolerances and defaults

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod zpk;

pub use error::{Result, ZpkError};
pub use frequency::{Frequency, SweepType};
pub use zpk::{
    FrequencyResponse, MimoFrequencyResponse, ResponseOptions, Selection, ZerosAndPoles,
    ZerosAndPolesSiso, ZpkEntry,
};
