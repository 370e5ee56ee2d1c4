//! Mathematical core: envelope width derivation and kernel evaluation.

pub mod gabor;
pub mod sigma;

pub use gabor::*;
pub use sigma::*;
