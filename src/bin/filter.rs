//! Apply one filter to a 24-bit BMP image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rasterfx::bmp;
use rasterfx::filters::{blur, edges, grayscale, reflect};

#[derive(Parser)]
#[command(version, about = "Apply a filter to a 24-bit BMP image")]
struct Args {
    /// Filter to apply.
    #[arg(value_enum)]
    filter: FilterKind,
    /// Input bitmap.
    infile: PathBuf,
    /// Output bitmap.
    outfile: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterKind {
    /// Average each pixel's channels into gray.
    #[value(alias = "g")]
    Grayscale,
    /// Mirror every row horizontally.
    #[value(alias = "r")]
    Reflect,
    /// 3x3 box blur.
    #[value(alias = "b")]
    Blur,
    /// Directional gradient edge detection.
    #[value(alias = "e")]
    Edges,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut image = bmp::read_bmp(&args.infile)
        .with_context(|| format!("failed to read {}", args.infile.display()))?;
    info!(
        height = image.height(),
        width = image.width(),
        filter = ?args.filter,
        "filtering image"
    );

    match args.filter {
        FilterKind::Grayscale => grayscale(&mut image),
        FilterKind::Reflect => reflect(&mut image),
        FilterKind::Blur => blur(&mut image),
        FilterKind::Edges => edges(&mut image),
    }

    bmp::write_bmp(&args.outfile, &image)
        .with_context(|| format!("failed to write {}", args.outfile.display()))?;

    Ok(())
}
