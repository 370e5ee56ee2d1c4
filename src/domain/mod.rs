//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - kernel parameters (`WaveletParameters`) and run configuration (`GenerateConfig`)
//! - the dense output buffer (`KernelMatrix`)
//! - derived outputs (`KernelStats`, `KernelMetadata`)

pub mod types;

pub use types::*;
