use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub mod reader;
pub mod split;

use reader::{read_stdin, read_text_maybe_gz};
use split::{split_pages, split_paragraphs};

/// One independently scored piece of a document (a page or a paragraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub id: String,
    pub text: String,
}

impl TextUnit {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnitMode {
    #[default]
    Page,
    Paragraph,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as a JSON unit list: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} contains no text units")]
    EmptyDocument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonUnit {
    Text(String),
    Object {
        #[serde(default)]
        id: Option<String>,
        text: String,
    },
}

/// Load the ordered text units of a document. `-` reads plain text from stdin.
pub fn load_units(path: &Path, mode: UnitMode) -> Result<Vec<TextUnit>, InputError> {
    let origin = path.display().to_string();
    let pages = if path == Path::new("-") {
        split_pages(&read_stdin()?)
    } else {
        let raw = read_text_maybe_gz(path)?;
        match detect_format(path) {
            InputFormat::Text => split_pages(&raw),
            InputFormat::Json => parse_json_units(&raw, &origin)?,
        }
    };
    let units = apply_mode(pages, mode);
    if units.is_empty() {
        return Err(InputError::EmptyDocument(origin));
    }
    tracing::info!(source = %origin, units = units.len(), mode = ?mode, "loaded text units");
    Ok(units)
}

pub fn parse_json_units(raw: &str, origin: &str) -> Result<Vec<TextUnit>, InputError> {
    let items: Vec<JsonUnit> = serde_json::from_str(raw).map_err(|source| InputError::Json {
        path: origin.to_string(),
        source,
    })?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            JsonUnit::Text(text) => TextUnit::new(format!("unit-{}", idx + 1), text),
            JsonUnit::Object { id, text } => {
                let id = id
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| format!("unit-{}", idx + 1));
                TextUnit::new(id, text)
            }
        })
        .collect())
}

fn apply_mode(units: Vec<TextUnit>, mode: UnitMode) -> Vec<TextUnit> {
    match mode {
        UnitMode::Page => units,
        UnitMode::Paragraph => split_paragraphs(units),
    }
}

fn detect_format(path: &Path) -> InputFormat {
    let stem_path = if reader::is_gz(path) {
        Path::new(path.file_stem().unwrap_or_default())
    } else {
        path
    };
    match stem_path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
        _ => InputFormat::Text,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
