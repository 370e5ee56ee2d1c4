//! Fill a kernel matrix in parallel.
//!
//! Given:
//! - the wavelet parameters
//! - the derived sigma
//!
//! we allocate the full `height × width` buffer once, split it into disjoint
//! row slices, and let each rayon task fill exactly one row. The parallel
//! iterator returning is the join barrier: no row is observed before every
//! row has been written.

use std::time::Instant;

use rayon::prelude::*;

use crate::domain::{KernelMatrix, WaveletParameters};
use crate::error::{AppError, EXIT_RUNTIME, ParamError};
use crate::grid::validate_dimensions;
use crate::math::gabor;

/// Evaluate every cell of the grid on rayon's current pool.
///
/// Cell `(row, col)` is the kernel at `(col − width/2, row − height/2)`.
/// Empty or unaddressable grids are rejected before anything is allocated.
pub fn generate_matrix(params: &WaveletParameters, sigma: f32) -> Result<KernelMatrix, ParamError> {
    validate_dimensions(params)?;

    let started = Instant::now();
    let mut matrix = KernelMatrix::zeros(params.width, params.height).ok_or(ParamError::InvalidDimensions {
        width: params.width,
        height: params.height,
    })?;

    matrix
        .values_mut()
        .par_chunks_mut(params.width)
        .enumerate()
        .for_each(|(row, cells)| fill_row(params, sigma, row, cells));

    tracing::debug!(
        width = params.width,
        height = params.height,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "kernel grid filled"
    );
    Ok(matrix)
}

/// Like [`generate_matrix`], optionally on a dedicated pool of `threads` workers.
pub fn generate_matrix_with_threads(
    params: &WaveletParameters,
    sigma: f32,
    threads: Option<usize>,
) -> Result<KernelMatrix, AppError> {
    let Some(threads) = threads else {
        return generate_matrix(params, sigma).map_err(AppError::from);
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("gabor-row-{i}"))
        .build()
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to start {threads} worker threads: {e}")))?;

    pool.install(|| generate_matrix(params, sigma)).map_err(AppError::from)
}

fn fill_row(params: &WaveletParameters, sigma: f32, row: usize, cells: &mut [f32]) {
    let y = params.y_offset(row);
    for (col, cell) in cells.iter_mut().enumerate() {
        *cell = gabor(params, sigma, params.x_offset(col), y);
    }
}
