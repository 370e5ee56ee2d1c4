//! JSON sidecar describing a generated matrix.
//!
//! The sidecar records the parameters, derived sigma and summary statistics
//! next to the matrix file, so consumers can tell how a kernel was produced
//! without re-parsing the CSV. Non-finite floats are encoded as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::domain::{GenerateConfig, KernelMetadata, KernelStats};
use crate::error::AppError;

/// Assemble the metadata record for a finished run.
pub fn build_metadata(config: &GenerateConfig, sigma: f32, stats: &KernelStats) -> KernelMetadata {
    KernelMetadata {
        tool: "gabor".to_string(),
        generated_at: Local::now().to_rfc3339(),
        parameters: config.params,
        sigma,
        validation: config.validation,
        output: config.output.clone(),
        stats: *stats,
    }
}

/// Write a metadata JSON file.
pub fn write_metadata_json(path: &Path, metadata: &KernelMetadata) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create metadata JSON '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, metadata)
        .map_err(|e| AppError::io(format!("Failed to write metadata JSON: {e}")))?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .map_err(|e| AppError::io(format!("Failed to write metadata JSON: {e}")))?;

    tracing::info!(path = %path.display(), "metadata written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ValidationMode, WaveletParameters};

    fn config() -> GenerateConfig {
        GenerateConfig {
            params: WaveletParameters::default(),
            output: "wavelet.csv".into(),
            validation: ValidationMode::Permissive,
            threads: None,
            metadata: None,
            preview: false,
            preview_width: 64,
            preview_height: 32,
            quiet: true,
        }
    }

    fn stats() -> KernelStats {
        KernelStats {
            min: -0.5,
            max: 1.0,
            mean: 0.25,
            sum: 1.0,
            l2_norm: 2.0,
            non_finite: 0,
            origin_value: 1.0,
        }
    }

    #[test]
    fn metadata_json_contains_parameters_and_sigma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wavelet.json");
        let meta = build_metadata(&config(), 23.5, &stats());
        write_metadata_json(&path, &meta).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tool"], "gabor");
        assert_eq!(value["parameters"]["width"], 500);
        assert_eq!(value["parameters"]["lambda"], 50.0);
        assert_eq!(value["sigma"], 23.5);
        assert_eq!(value["validation"], "permissive");
        assert_eq!(value["output"], "wavelet.csv");
        assert_eq!(value["stats"]["max"], 1.0);
    }

    #[test]
    fn infinite_sigma_is_written_as_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wavelet.json");
        let meta = build_metadata(&config(), f32::INFINITY, &stats());
        write_metadata_json(&path, &meta).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["sigma"].is_null());
    }
}
