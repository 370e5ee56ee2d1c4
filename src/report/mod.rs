//! Reporting utilities: parameter and kernel summaries for terminal output.

pub mod format;

pub use format::*;
