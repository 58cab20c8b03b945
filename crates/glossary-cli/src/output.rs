use std::path::Path;

use glossary_core::models::{CategoryCount, ConsolidationReport};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable summary of a consolidation run.
/// `verbose` adds the record count of every source.
pub fn print_report(report: &ConsolidationReport, written_to: Option<&Path>, verbose: bool) {
    println!(
        "Loaded {} records from {} sources ({} from the baseline)",
        report.total_input_records,
        report.sources.len(),
        report.baseline_terms
    );
    if verbose {
        for source in &report.sources {
            println!("  {}: {}", source.source_id, source.records);
        }
    }
    println!("Found {} unique acronyms", report.unique_keys);
    println!("Acronyms with multiple entries: {}", report.multi_record_keys);

    if !report.disambiguations.is_empty() {
        println!();
        println!("Disambiguated acronyms:");
        for d in &report.disambiguations {
            println!("  {}: {}", d.key, d.names.join(" | "));
        }
    }

    println!();
    println!("Merge complete!");
    println!("Total unique terms: {}", report.output_terms);
    if let Some(path) = written_to {
        println!("Output written to: {}", path.display());
    }

    if let Some(changes) = &report.changes {
        println!(
            "Changes: {} added, {} updated, {} removed, {} unchanged",
            changes.added.len(),
            changes.updated.len(),
            changes.removed.len(),
            changes.unchanged
        );
    }

    println!();
    println!("Category breakdown:");
    print_categories(&report.category_breakdown);

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }
}

pub fn print_categories(categories: &[CategoryCount]) {
    for cat in categories {
        println!("  {}: {}", cat.category, cat.count);
    }
}
