use serde::{Deserialize, Serialize};

use super::CanonicalTerm;
use crate::constants::DEFAULT_SCHEMA_MARKER;

/// A persisted glossary: a `$schema` marker plus the canonical terms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlossaryDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub terms: Vec<CanonicalTerm>,
}

impl GlossaryDocument {
    pub fn new(schema: impl Into<String>, terms: Vec<CanonicalTerm>) -> Self {
        Self {
            schema: Some(schema.into()),
            terms,
        }
    }

    /// Document with the default `$schema` marker.
    pub fn with_default_schema(terms: Vec<CanonicalTerm>) -> Self {
        Self::new(DEFAULT_SCHEMA_MARKER, terms)
    }

    /// blake3 digest over the serialized terms, independent of the schema marker.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for term in &self.terms {
            // Serializing plain structs of strings cannot fail.
            if let Ok(bytes) = serde_json::to_vec(term) {
                hasher.update(&bytes);
                hasher.update(b"\n");
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}
