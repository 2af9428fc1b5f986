// To regenerate src/NamedColor.h, run the following in the p6 repo root:
//
// $ cargo run --manifest-path <this repo>/generate/Cargo.toml
//
// Pass --input colors.json to use a local copy of the dataset instead of
// downloading it.

mod fetch;

use anyhow::Context as _;
use clap::Parser;
use p6_codegen::color;
use p6_codegen::output::write_atomic;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Generate p6::NamedColor constants from a color-name dataset", version)]
struct Args {
    /// Dataset to download: a JSON object of { "name", "hex" } records.
    #[arg(long, default_value = fetch::COLORS_URL)]
    url: String,
    /// Read the dataset from this file instead of downloading it.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,
    #[arg(long, default_value = "src/NamedColor.h")]
    output: PathBuf,
    /// Give up on the download after this many seconds. No limit by default.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let json = match &args.input {
        Some(path) => fetch::read_colors(path)?,
        None => fetch::fetch_colors(&args.url, args.timeout.map(Duration::from_secs))?,
    };

    let count = write_named_colors(&json, &args.output)?;
    tracing::info!(colors = count, "wrote {}", args.output.display());
    Ok(())
}

/// Normalizes the dataset and replaces `output` with the generated header.
/// Returns the number of constants written.
fn write_named_colors(json: &str, output: &Path) -> anyhow::Result<usize> {
    let colors = color::parse_colors(json).context("normalizing color records")?;
    let out = color::render_named_colors(&colors);
    write_atomic(output, &out)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::debug!(width = color::name_width(&colors), "aligned declarations");
    Ok(colors.len())
}

#[cfg(test)]
mod tests {
    use super::{fetch, write_named_colors};
    use std::fs;

    const EXPECTED: &str = "\
// This file was auto-generated by generate-named-colors
// Please don't edit the file directly, go to the generator!

#pragma once
#include \"Color.h\"

namespace p6::NamedColor {

static constexpr Color AliceBlue    = hex(0xF0F8FF);
static constexpr Color Red          = hex(0xFF0000);
static constexpr Color CafeauLait   = hex(0xA67B5B);
static constexpr Color BlackCoralPt = hex(0x54626F);

} // namespace p6::NamedColor
";

    #[test]
    fn local_dataset_to_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let output = dir.path().join("NamedColor.h");
        fs::write(
            &input,
            r##"{
                "f0f8ff": {"name": "Alice Blue", "hex": "#f0f8ff"},
                "f00": {"name": "Red", "hex": "#f00"},
                "a67b5b": {"name": "Café au Lait", "hex": "#a67b5b"},
                "54626f": {"name": "Black Coral (Pt.)", "hex": "54626F"}
            }"##,
        )
        .unwrap();
        fs::write(&output, "stale").unwrap();

        let json = fetch::read_colors(&input).unwrap();
        assert_eq!(write_named_colors(&json, &output).unwrap(), 4);
        assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
    }

    #[test]
    fn bad_dataset_leaves_header_alone() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("NamedColor.h");
        fs::write(&output, "previous").unwrap();

        let json = r##"{"x": {"name": "Broken", "hex": "#12"}}"##;
        let err = write_named_colors(json, &output).unwrap_err();
        assert!(format!("{err:#}").contains("\"x\""), "{err:#}");
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn missing_local_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetch::read_colors(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"), "{err}");
    }
}
