use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{CanonicalTerm, Link};

/// One term record as authored in a source file, before any merging.
///
/// Deserialized leniently: every field except `acronym` may be absent, and keys
/// outside the canonical schema land in `extra` rather than failing the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTermRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub acronym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<String>>,
    /// Legacy spelling of `related_terms`, folded by the aggregator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    /// Originating source. Diagnostics only, never a merge input.
    #[serde(skip)]
    pub provenance: String,
    /// Keys outside the canonical schema.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawTermRecord {
    /// Minimal record with an acronym and a name.
    pub fn new(acronym: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            acronym: acronym.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Re-enter a published canonical term as a raw record.
    pub fn from_canonical(term: &CanonicalTerm, provenance: impl Into<String>) -> Self {
        Self {
            acronym: term.acronym.clone(),
            name: non_empty(&term.name),
            description: term.description.clone(),
            category: non_empty(&term.category),
            owner: term.owner.clone(),
            related_terms: term.related_terms.clone(),
            related: None,
            links: term.links.clone(),
            provenance: provenance.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_related_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_terms = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }

    /// Name as a non-empty string slice, if the record supplies one.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Category as a non-empty string slice, if the record supplies one.
    pub fn category_str(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
