//! Summary statistics over a generated kernel.

use crate::domain::{KernelMatrix, KernelStats, WaveletParameters};

/// Compute min/max/mean/sum/L2 norm and the origin value of `matrix`.
///
/// Non-finite cells are counted and propagate into the aggregates, so a
/// degenerate kernel is visible in the summary rather than hidden.
pub fn kernel_stats(params: &WaveletParameters, matrix: &KernelMatrix) -> KernelStats {
    let m = matrix.to_dmatrix();
    let non_finite = matrix.values().iter().filter(|v| !v.is_finite()).count();
    let (row, col) = params.origin();

    let (min, max) = if non_finite == 0 {
        (m.min(), m.max())
    } else {
        (f32::NAN, f32::NAN)
    };

    KernelStats {
        min,
        max,
        mean: if m.is_empty() { 0.0 } else { m.mean() },
        sum: m.sum(),
        l2_norm: m.norm(),
        non_finite,
        origin_value: matrix.get(row, col).unwrap_or(f32::NAN),
    }
}
