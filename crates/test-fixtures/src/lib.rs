//! Test fixture loader for glossary sources, baselines, and published glossaries.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use std::path::PathBuf;

use glossary_core::models::{GlossaryDocument, RawTermRecord, SourceBatch};
use serde::de::DeserializeOwned;

/// Source files in `glossary/sources/` that parse, in name order.
pub const SOURCE_FILES: &[&str] = &["engineering.json", "sales.json"];
/// A source file that is not valid JSON.
pub const BROKEN_SOURCE: &str = "broken.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Directory holding the glossary source files.
pub fn sources_dir() -> PathBuf {
    fixture_path("glossary/sources")
}

/// One parseable source file as a batch tagged with its file name.
pub fn load_source_batch(file_name: &str) -> SourceBatch {
    let records: Vec<RawTermRecord> = load_fixture(&format!("glossary/sources/{file_name}"));
    SourceBatch::new(file_name, records)
}

/// Every parseable source file, in name order.
pub fn load_source_batches() -> Vec<SourceBatch> {
    SOURCE_FILES.iter().map(|f| load_source_batch(f)).collect()
}

/// The baseline glossary the fixture sources are merged onto.
pub fn load_baseline() -> GlossaryDocument {
    load_fixture("glossary/glossary.original.json")
}

/// The glossary produced by merging the fixture sources onto the baseline.
pub fn load_published() -> GlossaryDocument {
    load_fixture("glossary/published/glossary.json")
}
