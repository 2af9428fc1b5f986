use crate::output::Output;
use crate::Error;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Characters dropped from a color name before decomposition.
const NAME_PUNCTUATION: &[char] = &[' ', '(', ')', '-', '/', '\'', '#', '&', '.'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    /// Identifier made only of ASCII letters and digits.
    pub name: String,
    /// Exactly six uppercase hex digits, without `#`.
    pub hex: String,
}

#[derive(Deserialize)]
struct ColorRecord {
    name: String,
    hex: String,
}

/// Normalizes a CSS-style hex color: drops `#`, uppercases, and expands the
/// three-digit shorthand. Returns `None` unless six hex digits remain.
pub fn format_hex(s: &str) -> Option<String> {
    let digits: String = s
        .chars()
        .filter(|&ch| ch != '#')
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    let hex = match digits.len() {
        3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
        _ => digits,
    };
    if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(hex)
    } else {
        None
    }
}

/// Turns a human-readable color name into an identifier: punctuation and
/// spaces are removed and accented letters decay to their ASCII base letter.
pub fn format_name(s: &str) -> String {
    s.chars()
        .filter(|ch| !NAME_PUNCTUATION.contains(ch))
        .nfkd()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Parses a JSON object of `{ "name": .., "hex": .. }` records, keeping the
/// order in which the document lists them.
pub fn parse_colors(json: &str) -> Result<Vec<NamedColor>, Error> {
    let document: Value = serde_json::from_str(json).map_err(Error::Json)?;
    let Value::Object(records) = document else {
        return Err(Error::NotAnObject);
    };
    let colors = normalize_records(records)?;
    for issue in name_issues(&colors) {
        tracing::warn!("{issue}");
    }
    Ok(colors)
}

fn normalize_records(records: Map<String, Value>) -> Result<Vec<NamedColor>, Error> {
    let mut colors = Vec::with_capacity(records.len());
    for (key, value) in records {
        let record = match ColorRecord::deserialize(value) {
            Ok(record) => record,
            Err(source) => return Err(Error::Record { key, source }),
        };
        let Some(hex) = format_hex(&record.hex) else {
            return Err(Error::InvalidHex {
                key,
                hex: record.hex,
            });
        };
        colors.push(NamedColor {
            name: format_name(&record.name),
            hex,
        });
    }
    Ok(colors)
}

/// A normalized name that cannot be used as a C++ identifier. These are
/// reported, not rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameIssue {
    Empty { hex: String },
    LeadingDigit { name: String },
    Duplicate { name: String },
}

impl fmt::Display for NameIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NameIssue::Empty { hex } => {
                write!(f, "color #{hex} has an empty name after normalization")
            }
            NameIssue::LeadingDigit { name } => write!(f, "color name {name} starts with a digit"),
            NameIssue::Duplicate { name } => write!(f, "duplicate color name {name}"),
        }
    }
}

pub fn name_issues(colors: &[NamedColor]) -> Vec<NameIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for color in colors {
        let name = color.name.as_str();
        if name.is_empty() {
            issues.push(NameIssue::Empty {
                hex: color.hex.clone(),
            });
        } else if name.starts_with(|ch: char| ch.is_ascii_digit()) {
            issues.push(NameIssue::LeadingDigit {
                name: name.to_owned(),
            });
        }
        if !seen.insert(name) {
            issues.push(NameIssue::Duplicate {
                name: name.to_owned(),
            });
        }
    }
    issues
}

/// Column width that aligns every declaration: the longest name.
pub fn name_width(colors: &[NamedColor]) -> usize {
    colors.iter().map(|color| color.name.len()).max().unwrap_or(0)
}

pub fn render_named_colors(colors: &[NamedColor]) -> Output {
    let width = name_width(colors);

    let mut out = Output::new();
    writeln!(out, "// This file was auto-generated by generate-named-colors");
    writeln!(out, "// Please don't edit the file directly, go to the generator!");
    writeln!(out);
    writeln!(out, "#pragma once");
    writeln!(out, "#include \"Color.h\"");
    writeln!(out);
    writeln!(out, "namespace p6::NamedColor {{");
    writeln!(out);
    for color in colors {
        writeln!(
            out,
            "static constexpr Color {:<width$} = hex(0x{});",
            color.name,
            color.hex,
            width = width,
        );
    }
    writeln!(out);
    writeln!(out, "}} // namespace p6::NamedColor");
    out
}
