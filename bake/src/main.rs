// Embeds the font atlas into the library sources. Run from the p6 repo root:
//
// $ cargo run --manifest-path <this repo>/bake/Cargo.toml
//
// which reads font_atlas.png and writes src/details/font_atlas.

use anyhow::Context as _;
use clap::Parser;
use p6_codegen::atlas::{self, BakeOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Embed a PNG font atlas as a C++ byte array", version)]
struct Args {
    /// PNG image to embed.
    #[arg(long, default_value = "font_atlas.png")]
    input: PathBuf,
    /// Header to generate.
    #[arg(long, default_value = "src/details/font_atlas")]
    output: PathBuf,
    /// Name of the generated array.
    #[arg(long, default_value = "font_atlas")]
    symbol: String,
    /// Embed the file even if it does not decode as a PNG.
    #[arg(long)]
    no_verify: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = BakeOptions {
        input: args.input,
        output: args.output,
        symbol: args.symbol,
        verify: !args.no_verify,
    };
    let summary = atlas::bake(&options)
        .with_context(|| format!("baking {}", options.input.display()))?;
    tracing::info!(bytes = summary.bytes, "font atlas baked");
    Ok(())
}
