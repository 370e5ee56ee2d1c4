//! Command-line parsing for the Gabor wavelet generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the kernel math. Every `generate` option can also be supplied
//! through a `GABOR_*` environment variable (or a `.env` file); explicit flags win.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gabor", version, about = "2-D Gabor wavelet kernel generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a kernel and write it as comma-terminated text (default).
    Generate(GenerateArgs),
    /// Render a heatmap and summary of a previously written matrix file.
    Preview(PreviewArgs),
}

/// Options for kernel generation.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// The bandwidth of the wavelet (octaves).
    #[arg(long, env = "GABOR_BETA", default_value_t = 2.0, allow_negative_numbers = true)]
    pub beta: f32,

    /// The aspect ratio of the wavelet.
    #[arg(long, env = "GABOR_GAMMA", default_value_t = 1.0, allow_negative_numbers = true)]
    pub gamma: f32,

    /// The orientation of the wavelet to the horizontal (radians).
    #[arg(long, env = "GABOR_THETA", default_value_t = 0.0, allow_negative_numbers = true)]
    pub theta: f32,

    /// The wavelength of the wavelet (pixels).
    #[arg(long, env = "GABOR_LAMBDA", default_value_t = 50.0, allow_negative_numbers = true)]
    pub lambda: f32,

    /// The phase angle of the wavelet (radians).
    #[arg(long, env = "GABOR_PHI", default_value_t = 0.0, allow_negative_numbers = true)]
    pub phi: f32,

    /// The width of the image (pixels).
    #[arg(long, env = "GABOR_WIDTH", default_value_t = 500)]
    pub width: usize,

    /// The height of the image (pixels).
    #[arg(long, env = "GABOR_HEIGHT", default_value_t = 500)]
    pub height: usize,

    /// The path of the output file.
    #[arg(short = 'o', long, env = "GABOR_OUTPUT", default_value = "wavelet.csv")]
    pub output: PathBuf,

    /// Reject non-finite parameters, non-positive wavelength and degenerate sigma
    /// instead of writing non-finite or flattened values.
    ///
    /// `GABOR_STRICT` accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`.
    #[arg(long, env = "GABOR_STRICT", value_parser = BoolishValueParser::new())]
    pub strict: bool,

    /// Worker threads for row generation (default: one per CPU).
    #[arg(long, env = "GABOR_THREADS")]
    pub threads: Option<usize>,

    /// Also write a JSON sidecar with parameters, sigma and statistics.
    #[arg(long, value_name = "JSON")]
    pub metadata: Option<PathBuf>,

    /// Print an ASCII heatmap of the kernel after generation (printed even with `--quiet`).
    #[arg(long)]
    pub preview: bool,

    /// Preview width (columns).
    #[arg(long, default_value_t = 64)]
    pub preview_width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 32)]
    pub preview_height: usize,

    /// Suppress the parameter summary and progress output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for previewing a saved matrix.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Matrix file produced by `gabor generate`.
    #[arg(long, short = 'i', value_name = "CSV")]
    pub input: PathBuf,

    /// Preview width (columns).
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 32)]
    pub height: usize,
}
