use std::path::{Path, PathBuf};

use glossary_core::errors::SourceReadError;
use glossary_core::models::GlossaryDocument;
use glossary_core::traits::IBaselineLoader;
use tracing::info;

use super::directory_loader::source_id;

/// Reads a previously published glossary document from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonBaselineLoader {
    path: PathBuf,
}

impl JsonBaselineLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IBaselineLoader for JsonBaselineLoader {
    fn load_baseline(&self) -> Result<Option<GlossaryDocument>, SourceReadError> {
        read_document(&self.path)
    }
}

/// Read a glossary document. `Ok(None)` when the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<GlossaryDocument>, SourceReadError> {
    if !path.exists() {
        info!(path = %path.display(), "no glossary document found");
        return Ok(None);
    }
    let source_id = source_id(path);
    let content = std::fs::read_to_string(path).map_err(|e| SourceReadError::Io {
        source_id: source_id.clone(),
        message: e.to_string(),
    })?;
    let document: GlossaryDocument =
        serde_json::from_str(&content).map_err(|e| SourceReadError::Parse {
            source_id,
            message: e.to_string(),
        })?;
    Ok(Some(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_baseline_is_none() {
        let loader = JsonBaselineLoader::new("/nonexistent/glossary.original.json");
        assert_eq!(loader.load_baseline(), Ok(None));
    }

    #[test]
    fn reads_document_with_schema_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glossary.original.json");
        std::fs::write(
            &path,
            r#"{"$schema": "./glossary.schema.json", "terms": [{"acronym": "OKR", "name": "Objectives and Key Results", "category": "Product"}]}"#,
        )
        .unwrap();
        let document = JsonBaselineLoader::new(&path).load_baseline().unwrap().unwrap();
        assert_eq!(document.schema.as_deref(), Some("./glossary.schema.json"));
        assert_eq!(document.terms[0].acronym, "OKR");
    }

    #[test]
    fn corrupt_baseline_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glossary.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonBaselineLoader::new(&path).load_baseline().unwrap_err();
        assert!(matches!(
            err,
            SourceReadError::Parse { ref source_id, .. } if source_id == "glossary.json"
        ));
    }
}
