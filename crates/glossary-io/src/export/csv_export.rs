use glossary_core::errors::SinkError;
use glossary_core::models::GlossaryDocument;

pub const CSV_HEADER: [&str; 7] = [
    "Acronym",
    "Name",
    "Description",
    "Category",
    "Owner",
    "Related Terms",
    "Links",
];

/// One row per term. Related terms and link URLs are joined with `; `.
pub fn render_csv(document: &GlossaryDocument) -> Result<String, SinkError> {
    let serialize_err = |e: csv::Error| SinkError::Serialize {
        message: e.to_string(),
    };
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(serialize_err)?;

    for term in &document.terms {
        let related = term
            .related_terms
            .as_deref()
            .map(|r| r.join("; "))
            .unwrap_or_default();
        let links = term
            .links
            .as_deref()
            .map(|links| {
                links
                    .iter()
                    .map(|l| l.url.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default();
        writer
            .write_record([
                term.acronym.as_str(),
                term.name.as_str(),
                term.description.as_deref().unwrap_or(""),
                term.category.as_str(),
                term.owner.as_deref().unwrap_or(""),
                related.as_str(),
                links.as_str(),
            ])
            .map_err(serialize_err)?;
    }

    let bytes = writer.into_inner().map_err(|e| SinkError::Serialize {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| SinkError::Serialize {
        message: e.to_string(),
    })
}
