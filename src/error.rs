use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating the atlas or named-color sources.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0:?} is not a valid C++ identifier")]
    InvalidSymbol(String),

    #[error("{} is empty; a font atlas needs at least one byte", .0.display())]
    EmptyAtlas(PathBuf),

    #[error("{} is not a decodable PNG image", .path.display())]
    InvalidPng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("color data is not valid JSON")]
    Json(#[source] serde_json::Error),

    #[error("color data must be a JSON object of color records")]
    NotAnObject,

    #[error("color record {key:?} is malformed")]
    Record {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("color record {key:?} has hex value {hex:?}, expected 3 or 6 hex digits")]
    InvalidHex { key: String, hex: String },
}
