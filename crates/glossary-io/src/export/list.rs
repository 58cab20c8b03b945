use glossary_core::models::GlossaryDocument;

/// `ACRONYM: Name`, one term per line.
pub fn render_list(document: &GlossaryDocument) -> String {
    document
        .terms
        .iter()
        .map(|t| format!("{}: {}", t.acronym, t.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use glossary_core::models::CanonicalTerm;

    use super::*;

    #[test]
    fn one_line_per_term() {
        let doc = GlossaryDocument::with_default_schema(vec![
            CanonicalTerm::new("AE (Account)", "Account Executive", "Sales"),
            CanonicalTerm::new("API", "Application Programming Interface", "Engineering"),
        ]);
        assert_eq!(
            render_list(&doc),
            "AE (Account): Account Executive\nAPI: Application Programming Interface"
        );
    }
}
