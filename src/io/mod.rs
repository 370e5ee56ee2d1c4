//! Input/output helpers.
//!
//! - kernel matrix text encoding (`matrix`)
//! - JSON metadata sidecar (`metadata`)

pub mod matrix;
pub mod metadata;

pub use matrix::*;
pub use metadata::*;
