//! Render the edges of a mesh document as magenta lines on a transparent PNG
//!
//! Run with: cargo run --bin meshraster -- mesh.json out.png

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use meshraster::{render_file, RasterConfig};

#[derive(Parser)]
#[command(name = "meshraster", version, about)]
struct Cli {
    /// Mesh document (JSON with `vs` and `dcs`)
    input: PathBuf,

    /// Destination PNG, overwritten if present
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    render_file(&cli.input, &cli.output, &RasterConfig::default()).with_context(|| {
        format!(
            "failed to render {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    Ok(())
}
