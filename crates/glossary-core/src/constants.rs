/// Provenance tag attached to every term coming from the baseline glossary.
pub const BASELINE_PROVENANCE: &str = "glossary.json";

/// `$schema` marker written at the top of every canonical glossary document.
pub const DEFAULT_SCHEMA_MARKER: &str = "./glossary.schema.json";

/// Fields a canonical term may carry, in their serialized spelling.
pub const ALLOWED_TERM_FIELDS: &[&str] = &[
    "acronym",
    "name",
    "description",
    "category",
    "owner",
    "relatedTerms",
    "links",
];

/// Suffix appended to a truncated description.
pub const ELLIPSIS: &str = "...";
