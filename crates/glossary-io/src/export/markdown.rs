use std::collections::HashMap;

use glossary_consolidation::monitoring::category_breakdown;
use glossary_core::models::{CanonicalTerm, GlossaryDocument};

/// Heading of a rendered glossary, e.g. "Acme Glossary".
pub fn document_title(organization: &str) -> String {
    let organization = organization.trim();
    if organization.is_empty() {
        "Glossary".to_string()
    } else {
        format!("{organization} Glossary")
    }
}

/// Markdown document: title, counts, a table of contents by category, then
/// one section per category. Categories with more terms come first.
pub fn render_markdown(document: &GlossaryDocument, title: &str) -> String {
    let categories = category_breakdown(&document.terms);
    let mut lines: Vec<String> = vec![
        format!("# {title}"),
        String::new(),
        format!(
            "*{} terms across {} categories*",
            document.terms.len(),
            categories.len()
        ),
        String::new(),
        "## Table of Contents".to_string(),
        String::new(),
    ];
    for cat in &categories {
        lines.push(format!("- [{}](#{}) ({})", cat.category, anchor(&cat.category), cat.count));
    }
    lines.push(String::new());

    let mut by_category: HashMap<&str, Vec<&CanonicalTerm>> = HashMap::new();
    for term in &document.terms {
        by_category.entry(term.category.as_str()).or_default().push(term);
    }

    for cat in &categories {
        lines.push(format!("## {}", cat.category));
        lines.push(String::new());
        for term in by_category.get(cat.category.as_str()).into_iter().flatten() {
            push_term(&mut lines, term);
        }
    }

    lines.join("\n")
}

fn push_term(lines: &mut Vec<String>, term: &CanonicalTerm) {
    lines.push(format!("### {}", term.acronym));
    lines.push(String::new());
    lines.push(format!("**{}**", term.name));
    lines.push(String::new());

    if let Some(description) = term.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
        lines.push(String::new());
    }

    let mut metadata = Vec::new();
    if let Some(owner) = term.owner.as_deref().filter(|o| !o.is_empty()) {
        metadata.push(format!("| Owner | {owner} |"));
    }
    if let Some(related) = term.related_terms.as_ref().filter(|r| !r.is_empty()) {
        metadata.push(format!("| Related | {} |", related.join(", ")));
    }
    if !metadata.is_empty() {
        lines.push("| | |".to_string());
        lines.push("|---|---|".to_string());
        lines.extend(metadata);
        lines.push(String::new());
    }

    if let Some(links) = term.links.as_ref().filter(|l| !l.is_empty()) {
        lines.push("**Links:**".to_string());
        for link in links {
            lines.push(format!("- [{}]({})", link.description, link.url));
        }
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
}

/// GitHub-style heading anchor: lowercase, whitespace runs become `-`.
fn anchor(heading: &str) -> String {
    heading
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use glossary_core::models::Link;

    use super::*;

    #[test]
    fn title_uses_organization() {
        assert_eq!(document_title(""), "Glossary");
        assert_eq!(document_title(" Acme "), "Acme Glossary");
    }

    #[test]
    fn anchors_are_hyphenated() {
        assert_eq!(anchor("GitHub Repos"), "github-repos");
        assert_eq!(anchor("Customer  Success"), "customer-success");
    }

    #[test]
    fn renders_metadata_table_and_links() {
        let doc = GlossaryDocument::with_default_schema(vec![CanonicalTerm::new(
            "ADR",
            "Architecture Decision Records",
            "Engineering",
        )
        .with_description("Design decisions.")
        .with_owner("platform")
        .with_related_terms(["RFC"])
        .with_links(vec![Link::new("https://adr.github.io", "ADR home")])]);

        let md = render_markdown(&doc, "Glossary");
        assert!(md.starts_with("# Glossary\n\n*1 terms across 1 categories*\n"));
        assert!(md.contains("- [Engineering](#engineering) (1)"));
        assert!(md.contains("### ADR\n\n**Architecture Decision Records**\n\nDesign decisions.\n"));
        assert!(md.contains("| | |\n|---|---|\n| Owner | platform |\n| Related | RFC |\n"));
        assert!(md.contains("**Links:**\n- [ADR home](https://adr.github.io)\n"));
        assert!(md.ends_with("---\n"));
    }

    #[test]
    fn bare_term_has_no_metadata_table() {
        let doc = GlossaryDocument::with_default_schema(vec![CanonicalTerm::new(
            "QBR",
            "Quarterly Business Review",
            "Sales",
        )]);
        let md = render_markdown(&doc, "Glossary");
        assert!(!md.contains("| | |"));
        assert!(!md.contains("**Links:**"));
    }
}
