//! Recover JPEGs embedded in a raw byte stream (e.g. a memory card dump).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rasterfx::carve;

#[derive(Parser)]
#[command(version, about = "Carve JPEGs out of a raw byte stream")]
struct Args {
    /// Raw input file to scan.
    image: PathBuf,
    /// Directory for the recovered files.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let input = File::open(&args.image)
        .with_context(|| format!("failed to open {}", args.image.display()))?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let recovered = carve::carve(BufReader::new(input), &args.out_dir)
        .with_context(|| format!("recovery from {} failed", args.image.display()))?;

    info!(recovered, "recovery finished");
    println!("recovered {recovered} file(s)");

    Ok(())
}
