//! `gabor-wavelet` library crate.
//!
//! The binary (`gabor`) is a thin wrapper around this library so that:
//!
//! - kernel generation is testable without spawning processes
//! - downstream filtering code can build kernels in-process
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod telemetry;
