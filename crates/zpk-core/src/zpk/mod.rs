//! Zeros/poles/gain representation of LTI systems
//!
//! A SISO system is stored as a gain together with real first and second
//! order factors of its numerator and denominator:
//!
//! ```text
//!            prod(s + n1[i]) * prod(s^2 + n2[i,1]*s + n2[i,0])
//! y(s) = k * ------------------------------------------------- * u(s)
//!            prod(s + d1[i]) * prod(s^2 + d2[i,1]*s + d2[i,0])
//! ```
//!
//! so that all coefficients stay real even for complex conjugate zeros and
//! poles. A MIMO system is a rectangular matrix of SISO systems.

mod mimo;
mod response;
mod selection;
mod siso;

pub use mimo::{ZerosAndPoles, ZpkEntry};
pub use response::{FrequencyResponse, MimoFrequencyResponse, ResponseOptions};
pub use selection::Selection;
pub use siso::ZerosAndPolesSiso;
