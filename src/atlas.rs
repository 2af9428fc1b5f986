use crate::output::{write_atomic, Output};
use crate::Error;
use image::ImageFormat;
use std::fs;
use std::path::PathBuf;

pub const BYTES_PER_LINE: usize = 16;

pub struct BakeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Name of the generated array.
    pub symbol: String,
    /// Decode the input as PNG before embedding it.
    pub verify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakeSummary {
    pub bytes: usize,
    pub dimensions: Option<(u32, u32)>,
}

/// Renders `bytes` as a C++ header declaring `static constexpr unsigned char
/// symbol[]`, one `0xNN` literal per byte in file order.
pub fn render_atlas(symbol: &str, bytes: &[u8]) -> Output {
    let mut out = Output::new();
    writeln!(out, "#pragma once");
    writeln!(out, "static constexpr unsigned char {}[] = {{", symbol);
    for line in bytes.chunks(BYTES_PER_LINE) {
        write!(out, "   ");
        for byte in line {
            write!(out, " 0x{:02X},", byte);
        }
        writeln!(out);
    }
    writeln!(out, "}};");
    out
}

/// Recovers the embedded bytes from a header produced by [`render_atlas`].
pub fn parse_atlas(source: &str) -> Option<Vec<u8>> {
    let (_, rest) = source.split_once('{')?;
    let (body, _) = rest.split_once('}')?;
    body.split(',')
        .map(str::trim)
        .filter(|literal| !literal.is_empty())
        .map(|literal| {
            let digits = literal.strip_prefix("0x")?;
            if digits.len() != 2 {
                return None;
            }
            u8::from_str_radix(digits, 16).ok()
        })
        .collect()
}

/// Decodes `bytes` as a PNG and returns its width and height.
pub fn verify_png(bytes: &[u8]) -> Result<(u32, u32), image::ImageError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    Ok((image.width(), image.height()))
}

/// Whether `symbol` can name the generated array: ASCII letters, digits and
/// `_`, not starting with a digit.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

pub fn bake(options: &BakeOptions) -> Result<BakeSummary, Error> {
    if !is_valid_symbol(&options.symbol) {
        return Err(Error::InvalidSymbol(options.symbol.clone()));
    }
    let bytes = fs::read(&options.input).map_err(|source| Error::Read {
        path: options.input.clone(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(Error::EmptyAtlas(options.input.clone()));
    }

    let dimensions = if options.verify {
        let (width, height) = verify_png(&bytes).map_err(|source| Error::InvalidPng {
            path: options.input.clone(),
            source,
        })?;
        tracing::info!(width, height, "decoded {}", options.input.display());
        Some((width, height))
    } else {
        None
    };

    let out = render_atlas(&options.symbol, &bytes);
    write_atomic(&options.output, &out).map_err(|source| Error::Write {
        path: options.output.clone(),
        source,
    })?;
    tracing::info!(
        bytes = bytes.len(),
        "wrote {} to {}",
        options.symbol,
        options.output.display()
    );

    Ok(BakeSummary {
        bytes: bytes.len(),
        dimensions,
    })
}
