//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` configuration and installs logging
//! - parses CLI arguments
//! - runs the generate pipeline
//! - prints summaries/previews
//! - writes the matrix (and optional metadata sidecar)

use clap::Parser;

use crate::cli::{Command, GenerateArgs, PreviewArgs};
use crate::domain::{GenerateConfig, KernelMatrix, ValidationMode, WaveletParameters};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `gabor` binary.
pub fn run() -> Result<(), AppError> {
    // Missing `.env` is the common case.
    dotenvy::dotenv().ok();
    crate::telemetry::init_tracing();

    // `gabor` and `gabor --beta 3` behave like `gabor generate ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(&generate_config_from_args(&args)),
        Command::Preview(args) => handle_preview(&args),
    }
}

/// Generate, report, and write one kernel.
pub fn handle_generate(config: &GenerateConfig) -> Result<(), AppError> {
    let say = |line: &str| {
        if !config.quiet {
            println!("{line}");
        }
    };

    say("\nGenerating wavelet...");
    say(crate::report::format_parameter_summary(&config.params).as_str());
    let run = pipeline::run_generate(config)?;
    say("Done.");
    say(crate::report::format_kernel_summary(run.sigma, &run.stats).as_str());

    if let Some(preview) = preview_text(config, &run.matrix) {
        println!("\n{preview}");
    }

    say("\nSaving to file...");
    say(crate::report::format_output_path(&config.output).as_str());
    crate::io::write_matrix_csv(&config.output, &run.matrix)?;

    if let Some(path) = &config.metadata {
        let metadata = crate::io::build_metadata(config, run.sigma, &run.stats);
        crate::io::write_metadata_json(path, &metadata)?;
    }
    say("Done.");

    Ok(())
}

/// Heatmap for `--preview`. An explicit preview request is honoured under `--quiet`.
fn preview_text(config: &GenerateConfig, matrix: &KernelMatrix) -> Option<String> {
    config
        .preview
        .then(|| crate::plot::render_ascii_heatmap(matrix, config.preview_width, config.preview_height))
}

fn handle_preview(args: &PreviewArgs) -> Result<(), AppError> {
    let matrix = crate::io::read_matrix_csv(&args.input)?;

    // A saved file carries no parameters; the origin convention only needs dimensions.
    let params = WaveletParameters {
        width: matrix.width(),
        height: matrix.height(),
        ..WaveletParameters::default()
    };
    let stats = crate::grid::kernel_stats(&params, &matrix);

    println!("{}", crate::plot::render_ascii_heatmap(&matrix, args.width, args.height));
    println!(
        "range :\t [{:.6}, {:.6}] | origin={:.6} | non-finite={}",
        stats.min, stats.max, stats.origin_value, stats.non_finite
    );
    Ok(())
}

pub fn generate_config_from_args(args: &GenerateArgs) -> GenerateConfig {
    GenerateConfig {
        params: WaveletParameters {
            beta: args.beta,
            gamma: args.gamma,
            theta: args.theta,
            lambda: args.lambda,
            phi: args.phi,
            width: args.width,
            height: args.height,
        },
        output: args.output.clone(),
        validation: if args.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        },
        threads: args.threads,
        metadata: args.metadata.clone(),
        preview: args.preview,
        preview_width: args.preview_width,
        preview_height: args.preview_height,
        quiet: args.quiet,
    }
}

/// Rewrite argv so `gabor` defaults to `gabor generate`.
///
/// Rules:
/// - `gabor`                        -> `gabor generate`
/// - `gabor --beta 3 ...`           -> `gabor generate --beta 3 ...`
/// - `gabor --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("generate".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "preview");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "generate".to_string());
        return argv;
    }

    argv
}
