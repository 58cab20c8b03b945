use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_SCHEMA_MARKER;

/// Where raw source files are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory scanned for source files.
    pub dir: String,
    /// File extension (without the dot) of source files.
    pub extension: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: defaults::DEFAULT_SOURCES_DIR.to_string(),
            extension: defaults::DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
}

/// The previously published glossary used to seed incremental merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub path: String,
    /// When false the baseline is ignored even if the file exists.
    pub enabled: bool,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_BASELINE_PATH.to_string(),
            enabled: defaults::DEFAULT_BASELINE_ENABLED,
        }
    }
}

/// Where and how the canonical glossary is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    /// `$schema` marker written into the document.
    pub schema: String,
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Pretty-print with two-space indentation.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_OUTPUT_PATH.to_string(),
            schema: DEFAULT_SCHEMA_MARKER.to_string(),
            overwrite: defaults::DEFAULT_OUTPUT_OVERWRITE,
            pretty: defaults::DEFAULT_OUTPUT_PRETTY,
        }
    }
}
