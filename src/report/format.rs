//! Formatted terminal output for a generation run.
//!
//! We keep formatting code in one place so:
//! - the math/grid code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use std::path::Path;

use crate::domain::{KernelStats, WaveletParameters};

/// Parameter summary printed before generation.
pub fn format_parameter_summary(params: &WaveletParameters) -> String {
    format!(
        "β :\t {:.6}\nγ :\t {:.6}\nθ :\t {:.6}\nλ :\t {:.6}\nφ :\t {:.6}\nw :\t {}\nh :\t {}",
        params.beta, params.gamma, params.theta, params.lambda, params.phi, params.width, params.height
    )
}

/// Derived sigma and summary statistics printed after generation.
pub fn format_kernel_summary(sigma: f32, stats: &KernelStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("σ :\t {sigma:.6}\n"));
    out.push_str(&format!(
        "range :\t [{:.6}, {:.6}] | origin={:.6}\n",
        stats.min, stats.max, stats.origin_value
    ));
    out.push_str(&format!(
        "sum :\t {:.6} | mean={:.6} | l2={:.6}",
        stats.sum, stats.mean, stats.l2_norm
    ));
    if stats.non_finite > 0 {
        out.push_str(&format!("\nwarning: {} non-finite cells", stats.non_finite));
    }
    out
}

/// Output path line printed before saving.
pub fn format_output_path(path: &Path) -> String {
    format!("o :\t{}", path.display())
}
