//! Shared "generate pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> sigma -> validate sigma -> grid -> stats
//!
//! Front-ends (the CLI, tests, embedding code) then only decide what to print
//! and where to write.

use crate::domain::{GenerateConfig, KernelMatrix, KernelStats};
use crate::error::AppError;
use crate::grid::{generate_matrix_with_threads, kernel_stats, validate_parameters, validate_sigma};
use crate::math::sigma_from_bandwidth;

/// All computed outputs of a single `gabor generate` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sigma: f32,
    pub matrix: KernelMatrix,
    pub stats: KernelStats,
}

/// Execute validation and generation. Performs no file I/O.
pub fn run_generate(config: &GenerateConfig) -> Result<RunOutput, AppError> {
    let params = &config.params;

    // 1) Pre-flight checks on the raw parameters.
    validate_parameters(params, config.validation)?;

    // 2) Envelope width, derived fresh for this run.
    let sigma = sigma_from_bandwidth(params.beta, params.lambda);
    tracing::debug!(beta = params.beta, lambda = params.lambda, sigma, "derived sigma");
    validate_sigma(params, sigma, config.validation)?;
    if !sigma.is_finite() {
        tracing::warn!(sigma, beta = params.beta, "sigma is not finite; the envelope degenerates");
    }

    // 3) Fan out one task per row and wait for all of them.
    let matrix = generate_matrix_with_threads(params, sigma, config.threads)?;

    // 4) Summarize.
    let stats = kernel_stats(params, &matrix);
    if stats.non_finite > 0 {
        tracing::warn!(cells = stats.non_finite, "kernel contains non-finite values");
    }

    Ok(RunOutput { sigma, matrix, stats })
}
