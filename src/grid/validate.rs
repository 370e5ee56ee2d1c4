//! Pre-flight parameter checks.
//!
//! Runs before any row work is scheduled or any file is opened.
//!
//! - Dimensions are always checked: a zero-sized grid has no defined output,
//!   and `width * height` must fit in `usize`.
//! - In `ValidationMode::Strict`, real parameters must be finite, `lambda`
//!   must be positive, and the derived sigma must be finite and non-zero.
//! - In `ValidationMode::Permissive`, numeric degeneracies are allowed through
//!   and surface as non-finite or flattened matrix cells.

use crate::domain::{ValidationMode, WaveletParameters};
use crate::error::ParamError;

/// Reject grids with no cells or more cells than can be addressed.
pub fn validate_dimensions(params: &WaveletParameters) -> Result<(), ParamError> {
    if params.width == 0 || params.height == 0 || params.width.checked_mul(params.height).is_none() {
        return Err(ParamError::InvalidDimensions {
            width: params.width,
            height: params.height,
        });
    }
    Ok(())
}

/// Check the raw parameters according to `mode`.
pub fn validate_parameters(params: &WaveletParameters, mode: ValidationMode) -> Result<(), ParamError> {
    validate_dimensions(params)?;
    if mode == ValidationMode::Permissive {
        return Ok(());
    }

    let reals = [
        ("beta", params.beta),
        ("gamma", params.gamma),
        ("theta", params.theta),
        ("lambda", params.lambda),
        ("phi", params.phi),
    ];
    for (name, value) in reals {
        if !value.is_finite() {
            return Err(ParamError::InvalidParameter {
                name,
                value,
                reason: "must be finite",
            });
        }
    }

    if params.lambda <= 0.0 {
        return Err(ParamError::InvalidParameter {
            name: "lambda",
            value: params.lambda,
            reason: "wavelength must be > 0",
        });
    }

    Ok(())
}

/// Check the derived sigma according to `mode`.
pub fn validate_sigma(params: &WaveletParameters, sigma: f32, mode: ValidationMode) -> Result<(), ParamError> {
    if mode == ValidationMode::Strict && (!sigma.is_finite() || sigma == 0.0) {
        return Err(ParamError::DegenerateSigma {
            beta: params.beta,
            lambda: params.lambda,
            sigma,
        });
    }
    Ok(())
}
