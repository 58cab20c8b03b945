//! Human-facing renderings of a canonical glossary.

pub mod csv_export;
pub mod list;
pub mod markdown;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glossary_core::errors::SinkError;
use glossary_core::models::GlossaryDocument;

pub use csv_export::render_csv;
pub use list::render_list;
pub use markdown::{document_title, render_markdown};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Csv,
    List,
}

impl ExportFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::List => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "list" | "txt" => Ok(Self::List),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

/// Render `document` in `format`. `title` heads the Markdown rendering.
pub fn render(document: &GlossaryDocument, format: ExportFormat, title: &str) -> Result<String, SinkError> {
    match format {
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(document).map_err(|e| SinkError::Serialize {
                message: e.to_string(),
            })?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Markdown => Ok(render_markdown(document, title)),
        ExportFormat::Csv => render_csv(document),
        ExportFormat::List => Ok(render_list(document)),
    }
}

/// Where an export lands. A directory target gets `glossary.<ext>` inside it.
pub fn output_path(target: &Path, format: ExportFormat) -> PathBuf {
    if target.is_dir() {
        target.join(format!("glossary.{}", format.extension()))
    } else {
        target.to_path_buf()
    }
}

/// Only the terms of `category`, compared case-insensitively.
pub fn filter_category(document: &GlossaryDocument, category: &str) -> GlossaryDocument {
    let wanted = category.to_lowercase();
    GlossaryDocument {
        schema: document.schema.clone(),
        terms: document
            .terms
            .iter()
            .filter(|term| term.category.to_lowercase() == wanted)
            .cloned()
            .collect(),
    }
}
