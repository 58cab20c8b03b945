//! Phase 6: Validation. Enforce the canonical schema limits on merged terms.
//!
//! Missing required fields and over-long acronyms or names drop the term.
//! Over-long descriptions are truncated with an ellipsis.

use std::collections::HashMap;

use glossary_core::config::ValidationConfig;
use glossary_core::constants::ELLIPSIS;
use glossary_core::errors::ValidationError;
use glossary_core::models::{CanonicalTerm, GlossaryDocument};

/// A term that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTerm {
    pub term: CanonicalTerm,
    /// Original description length when it was truncated.
    pub truncated_from: Option<usize>,
}

/// Cut `text` to the configured length plus an ellipsis when it is too long.
/// Returns the original length when truncation happened.
pub fn truncate_description(text: &mut String, config: &ValidationConfig) -> Option<usize> {
    let length = text.chars().count();
    if length <= config.max_description_len {
        return None;
    }
    let mut truncated: String = text.chars().take(config.truncated_description_len()).collect();
    truncated.push_str(ELLIPSIS);
    *text = truncated;
    Some(length)
}

/// First schema problem of a term. Over-long descriptions are fixable and are
/// not reported here.
fn field_error(term: &CanonicalTerm, config: &ValidationConfig) -> Option<ValidationError> {
    let missing = [
        ("acronym", term.acronym.as_str()),
        ("name", term.name.as_str()),
        ("category", term.category.as_str()),
    ]
    .into_iter()
    .find(|(_, value)| value.is_empty());
    if let Some((field, _)) = missing {
        return Some(ValidationError::MissingField {
            acronym: term.acronym.clone(),
            field,
        });
    }

    [
        ("acronym", term.acronym.chars().count(), config.max_acronym_len),
        ("name", term.name.chars().count(), config.max_name_len),
    ]
    .into_iter()
    .find(|(_, length, max)| length > max)
    .map(|(field, length, max)| ValidationError::FieldTooLong {
        acronym: term.acronym.clone(),
        field,
        length,
        max,
    })
}

/// Validate one merged term, truncating its description when needed.
pub fn validate_term(
    mut term: CanonicalTerm,
    config: &ValidationConfig,
) -> Result<ValidatedTerm, ValidationError> {
    if let Some(err) = field_error(&term, config) {
        return Err(err);
    }
    let truncated_from = term
        .description
        .as_mut()
        .and_then(|d| truncate_description(d, config));
    Ok(ValidatedTerm {
        term,
        truncated_from,
    })
}

/// Check an existing glossary against the schema without modifying it.
///
/// Reports invalid terms, over-long descriptions, and repeated acronyms.
pub fn check_document(document: &GlossaryDocument, config: &ValidationConfig) -> Vec<ValidationError> {
    let mut problems = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for term in &document.terms {
        if let Some(err) = field_error(term, config) {
            problems.push(err);
        }
        if let Some(description) = &term.description {
            let length = description.chars().count();
            if length > config.max_description_len {
                problems.push(ValidationError::FieldTooLong {
                    acronym: term.acronym.clone(),
                    field: "description",
                    length,
                    max: config.max_description_len,
                });
            }
        }
        let count = counts.entry(term.acronym.as_str()).or_insert(0);
        if *count == 0 {
            order.push(term.acronym.as_str());
        }
        *count += 1;
    }

    for acronym in order {
        let count = counts.get(acronym).copied().unwrap_or(0);
        if count > 1 && !acronym.is_empty() {
            problems.push(ValidationError::DuplicateAcronym {
                acronym: acronym.to_string(),
                count,
            });
        }
    }

    problems
}
