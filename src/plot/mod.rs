//! Terminal previews of generated kernels.

pub mod ascii;

pub use ascii::*;
