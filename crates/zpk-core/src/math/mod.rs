//! Mathematical functions module
//!
//! Provides root/polynomial conversions, eigenvalue based root finding and
//! unit conversions used by the zpk systems.

pub mod conversions;
pub mod linalg;
pub mod polynomial;

pub use conversions::*;
pub use polynomial::{factor_roots, polyroots, transform_roots_to_poly2};
