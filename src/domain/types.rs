//! Core data types: wavelet parameters, run configuration, and the kernel matrix.

use std::path::PathBuf;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Parameters of a single Gabor kernel.
///
/// Real-valued parameters are held in single precision; evaluation widens them
/// to `f64` internally and narrows the result back to `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveletParameters {
    /// Bandwidth (octaves).
    pub beta: f32,
    /// Aspect ratio of the Gaussian envelope.
    pub gamma: f32,
    /// Orientation to the horizontal (radians).
    pub theta: f32,
    /// Carrier wavelength (pixels).
    pub lambda: f32,
    /// Carrier phase (radians).
    pub phi: f32,
    /// Grid width (columns).
    pub width: usize,
    /// Grid height (rows).
    pub height: usize,
}

impl Default for WaveletParameters {
    fn default() -> Self {
        Self {
            beta: 2.0,
            gamma: 1.0,
            theta: 0.0,
            lambda: 50.0,
            phi: 0.0,
            width: 500,
            height: 500,
        }
    }
}

impl WaveletParameters {
    /// Plane coordinate of column `col`, relative to the grid origin.
    ///
    /// Integer division: for even widths the origin sits one half-pixel left of
    /// the true centre.
    pub fn x_offset(&self, col: usize) -> i64 {
        col as i64 - (self.width / 2) as i64
    }

    /// Plane coordinate of row `row`, relative to the grid origin.
    pub fn y_offset(&self, row: usize) -> i64 {
        row as i64 - (self.height / 2) as i64
    }

    /// Row/column index of the grid origin, `(height/2, width/2)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }
}

/// How strictly parameters are checked before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Only reject zero-sized grids; numeric degeneracies propagate into the matrix.
    #[default]
    Permissive,
    /// Also reject non-finite parameters, non-positive wavelength, and unusable sigma.
    Strict,
}

/// Everything a `generate` run needs, resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub params: WaveletParameters,
    pub output: PathBuf,
    pub validation: ValidationMode,
    /// Worker threads for the row fan-out; `None` uses rayon's global pool.
    pub threads: Option<usize>,
    pub metadata: Option<PathBuf>,
    pub preview: bool,
    pub preview_width: usize,
    pub preview_height: usize,
    pub quiet: bool,
}

/// Dense `height × width` kernel values stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelMatrix {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl KernelMatrix {
    /// Zero-filled matrix, allocated up front so rows can be handed out as disjoint slices.
    ///
    /// Returns `None` if `width * height` overflows `usize`.
    pub fn zeros(width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?;
        Some(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Build from row-major values. Returns `None` if `data.len() != width * height`.
    pub fn from_row_major(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // `chunks` panics on a zero chunk size; a zero-width matrix has no cells to yield.
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Copy into a `nalgebra` matrix (`height` rows × `width` columns).
    pub fn to_dmatrix(&self) -> DMatrix<f32> {
        DMatrix::from_row_slice(self.height, self.width, &self.data)
    }
}

/// Summary statistics of a generated kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub sum: f32,
    /// Frobenius norm.
    pub l2_norm: f32,
    pub non_finite: usize,
    /// Value at the grid origin `(height/2, width/2)`.
    pub origin_value: f32,
}

/// JSON sidecar describing how a matrix file was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelMetadata {
    pub tool: String,
    pub generated_at: String,
    pub parameters: WaveletParameters,
    pub sigma: f32,
    pub validation: ValidationMode,
    pub output: PathBuf,
    pub stats: KernelStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_truncate_toward_origin() {
        let params = WaveletParameters {
            width: 4,
            height: 5,
            ..WaveletParameters::default()
        };
        assert_eq!(params.x_offset(0), -2);
        assert_eq!(params.x_offset(2), 0);
        assert_eq!(params.x_offset(3), 1);
        assert_eq!(params.y_offset(0), -2);
        assert_eq!(params.y_offset(4), 2);
        assert_eq!(params.origin(), (2, 2));
    }

    #[test]
    fn from_row_major_rejects_wrong_length() {
        assert!(KernelMatrix::from_row_major(3, 2, vec![0.0; 5]).is_none());
        let m = KernelMatrix::from_row_major(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(m.get(0, 2), Some(3.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn dmatrix_keeps_row_col_orientation() {
        let m = KernelMatrix::from_row_major(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let d = m.to_dmatrix();
        assert_eq!(d.nrows(), 2);
        assert_eq!(d.ncols(), 3);
        assert_eq!(d[(1, 0)], 4.0);
        assert_eq!(d[(0, 2)], 3.0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn zeros_rejects_overflowing_size() {
        assert!(KernelMatrix::zeros(1 << 33, 1 << 31).is_none());
        assert!(KernelMatrix::from_row_major(1 << 33, 1 << 31, Vec::new()).is_none());
    }

    #[test]
    fn rows_yields_height_slices() {
        let m = KernelMatrix::zeros(4, 3).unwrap();
        let rows: Vec<&[f32]> = m.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
    }
}
