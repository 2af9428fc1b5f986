use anyhow::{bail, Context as _};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const COLORS_URL: &str =
    "https://raw.githubusercontent.com/mralexgray/color-names/json/output/colors.json";

/// Downloads the color dataset. A single attempt; without `timeout` the
/// request waits as long as the server does.
pub fn fetch_colors(url: &str, timeout: Option<Duration>) -> anyhow::Result<String> {
    tracing::info!("downloading {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request to {url} failed"))?;
    if !response.status().is_success() {
        bail!("download of {url} failed: HTTP {}", response.status());
    }

    let body = response.text().context("reading response body")?;
    tracing::info!(bytes = body.len(), "downloaded color data");
    Ok(body)
}

pub fn read_colors(path: &Path) -> anyhow::Result<String> {
    tracing::info!("reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
