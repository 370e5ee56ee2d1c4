//! ASCII heatmap for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a kernel's orientation and extent
//! - deterministic output (helpful for golden tests)
//!
//! Cells are sampled nearest-neighbour onto the character grid and shaded
//! over the finite value range with `RAMP` (darkest first). Non-finite cells
//! render as `?`.

use crate::domain::KernelMatrix;

const RAMP: &[u8] = b" .:-=+*#%@";
const NON_FINITE: char = '?';

/// Render `matrix` as a `cols × rows` character heatmap with a one-line header.
///
/// The preview never upsamples: it is clamped to the matrix size.
pub fn render_ascii_heatmap(matrix: &KernelMatrix, cols: usize, rows: usize) -> String {
    let cols = cols.clamp(1, matrix.width().max(1));
    let rows = rows.clamp(1, matrix.height().max(1));

    let (v_min, v_max) = finite_range(matrix).unwrap_or((0.0, 0.0));

    let mut out = String::new();
    out.push_str(&format!(
        "Preview: {}x{} -> {}x{} | value=[{v_min:.4}, {v_max:.4}]\n",
        matrix.width(),
        matrix.height(),
        cols,
        rows
    ));

    if matrix.width() == 0 || matrix.height() == 0 {
        return out;
    }

    for r in 0..rows {
        let src_row = sample_index(r, rows, matrix.height());
        for c in 0..cols {
            let src_col = sample_index(c, cols, matrix.width());
            let v = matrix.get(src_row, src_col).unwrap_or(f32::NAN);
            out.push(shade(v, v_min, v_max));
        }
        out.push('\n');
    }

    out
}

fn finite_range(matrix: &KernelMatrix) -> Option<(f32, f32)> {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in matrix.values().iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo <= hi).then_some((lo, hi))
}

/// Centre of output cell `i` mapped back to a source index.
fn sample_index(i: usize, out_len: usize, src_len: usize) -> usize {
    let pos = ((i as f64 + 0.5) * src_len as f64 / out_len as f64).floor() as usize;
    pos.min(src_len - 1)
}

fn shade(v: f32, lo: f32, hi: f32) -> char {
    if !v.is_finite() {
        return NON_FINITE;
    }
    let span = hi - lo;
    if span <= 0.0 {
        return RAMP[RAMP.len() / 2] as char;
    }
    let u = ((v - lo) / span).clamp(0.0, 1.0);
    let idx = (u * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[idx] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WaveletParameters;
    use crate::grid::generate_matrix;
    use crate::math::sigma_from_bandwidth;

    #[test]
    fn heatmap_has_requested_size() {
        let p = WaveletParameters {
            width: 100,
            height: 80,
            ..WaveletParameters::default()
        };
        let m = generate_matrix(&p, sigma_from_bandwidth(p.beta, p.lambda)).unwrap();
        let text = render_ascii_heatmap(&m, 40, 20);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Preview: 100x80 -> 40x20"));
        assert_eq!(lines.len(), 21);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn extremes_use_ramp_ends() {
        let m = KernelMatrix::from_row_major(2, 1, vec![-1.0, 1.0]).unwrap();
        let text = render_ascii_heatmap(&m, 2, 1);
        assert_eq!(text.lines().nth(1), Some(" @"));
    }

    #[test]
    fn non_finite_cells_marked() {
        let m = KernelMatrix::from_row_major(3, 1, vec![0.0, f32::NAN, 1.0]).unwrap();
        let text = render_ascii_heatmap(&m, 3, 1);
        assert_eq!(text.lines().nth(1), Some(" ?@"));
    }

    #[test]
    fn never_upsamples() {
        let m = KernelMatrix::zeros(4, 2).unwrap();
        let text = render_ascii_heatmap(&m, 64, 32);
        assert!(text.starts_with("Preview: 4x2 -> 4x2"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn output_is_deterministic() {
        let p = WaveletParameters {
            theta: 0.8,
            width: 64,
            height: 64,
            lambda: 16.0,
            ..WaveletParameters::default()
        };
        let m = generate_matrix(&p, sigma_from_bandwidth(p.beta, p.lambda)).unwrap();
        assert_eq!(render_ascii_heatmap(&m, 32, 16), render_ascii_heatmap(&m, 32, 16));
    }
}
