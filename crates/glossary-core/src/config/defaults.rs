// Single source of truth for all default values.

use std::collections::BTreeMap;

// --- Sources ---
pub const DEFAULT_SOURCES_DIR: &str = "data/sources";
pub const DEFAULT_SOURCE_EXTENSION: &str = "json";

// --- Baseline ---
pub const DEFAULT_BASELINE_PATH: &str = "data/glossary.original.json";
pub const DEFAULT_BASELINE_ENABLED: bool = true;

// --- Output ---
pub const DEFAULT_OUTPUT_PATH: &str = "data/glossary.json";
pub const DEFAULT_OUTPUT_OVERWRITE: bool = true;
pub const DEFAULT_OUTPUT_PRETTY: bool = true;

// --- Consolidation ---
pub const DEFAULT_CATEGORY: &str = "Engineering";
pub const DEFAULT_SPECIFICITY_WEIGHT: u32 = 3;
pub const DEFAULT_SENTENCE_OVERLAP_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MIN_SENTENCE_LEN: usize = 10;
pub const DEFAULT_ORGANIZATION: &str = "";
pub const DEFAULT_STOP_WORDS: &[&str] = &["the", "and", "for", "with", "from", "that", "this", "are", "was"];
pub const DEFAULT_INCOMPATIBLE_CATEGORIES: &[[&str; 2]] = &[
    ["Sales", "Engineering"],
    ["Sales", "GitHub Repos"],
    ["Finance", "Engineering"],
    ["Sales", "Security"],
];

// --- Validation ---
pub const DEFAULT_MAX_ACRONYM_LEN: usize = 50;
pub const DEFAULT_MAX_NAME_LEN: usize = 200;
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 2_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

/// Category specificity weights. "GitHub Repos" only says where a term was
/// found, so it ranks below every business domain.
pub fn default_specificity_weights() -> BTreeMap<String, u32> {
    [
        ("GitHub Repos", 1),
        ("Engineering", 5),
        ("Product", 5),
        ("Sales", 5),
        ("Finance", 5),
        ("Security", 5),
        ("Marketing", 5),
        ("Customer Success", 5),
        ("Partners", 5),
        ("Organization", 5),
        ("Industry", 5),
        ("Retail", 5),
        ("Amazon", 6),
    ]
    .into_iter()
    .map(|(category, weight)| (category.to_string(), weight))
    .collect()
}
