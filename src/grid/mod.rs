//! Kernel grid orchestration.
//!
//! Responsibilities:
//!
//! - pre-flight parameter validation
//! - parallel per-row evaluation into a pre-sized matrix
//! - summary statistics over the result

pub mod generator;
pub mod stats;
pub mod validate;

pub use generator::*;
pub use stats::*;
pub use validate::*;
