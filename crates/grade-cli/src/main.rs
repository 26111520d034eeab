//! grade - brand photo treatment CLI
//!
//! Analyzes a photograph's palette, picks a treatment preset and renders
//! the branded image for preview or print export.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "grade")]
#[command(author, version, about = "Brand photo treatment pipeline")]
#[command(long_about = "
Analyzes a photograph's palette, selects a treatment preset and renders
the branded image.

Examples:
  grade analyze photo.jpg               # Show palette statistics and preset
  grade analyze photo.jpg --json        # Machine-readable output
  grade treat photo.jpg -o out.png      # Treated image at source resolution
  grade treat photo.jpg -o out.png --max-dim 1600
  grade export photo.jpg -o out.png --scale 4
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze palette statistics and show the selected preset
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Render the treated image (preview path)
    #[command(visible_alias = "t")]
    Treat(TreatArgs),

    /// Render the sharpened 2x/4x print export
    #[command(visible_alias = "x")]
    Export(ExportArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Input image (png/jpg)
    input: PathBuf,

    /// Pixel sampling stride (1 inspects every pixel)
    #[arg(long, default_value = "8")]
    stride: usize,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TreatArgs {
    /// Input image (png/jpg)
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Bound the longer output dimension (never upscales)
    #[arg(short, long)]
    max_dim: Option<u32>,
}

#[derive(Args)]
struct ExportArgs {
    /// Input image (png/jpg)
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Linear upscale factor
    #[arg(short, long, value_parser = ["2", "4"], default_value = "2")]
    scale: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, cli.verbose),
        Commands::Treat(args) => commands::treat::run(args, cli.verbose),
        Commands::Export(args) => commands::export::run(args, cli.verbose),
    }
}
