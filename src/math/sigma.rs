//! Gaussian envelope width from bandwidth.
//!
//! For a Gabor kernel with half-response spatial-frequency bandwidth `β`
//! (octaves) and carrier wavelength `λ`:
//!
//! ```text
//! p = 2^β
//! σ = λ · (1/π) · sqrt(ln 2 / 2) · (p + 1) / (p − 2)
//! ```
//!
//! Numerical notes:
//! - Evaluated in `f64`, narrowed to `f32`.
//! - `β = 1` makes the denominator exactly zero. The result is `±inf` (or NaN
//!   when `λ = 0`) and is returned as-is; rejecting it is the caller's choice
//!   (see `grid::validate`).

use std::f64::consts::{LN_2, PI};

/// Derive `σ` (pixels) from bandwidth `beta` (octaves) and wavelength `lambda` (pixels).
pub fn sigma_from_bandwidth(beta: f32, lambda: f32) -> f32 {
    let p = 2f64.powf(f64::from(beta));
    let scale = (1.0 / PI) * (LN_2 / 2.0).sqrt() * ((p + 1.0) / (p - 2.0));
    (f64::from(lambda) * scale) as f32
}
