use glossary_consolidation::monitoring::category_breakdown;
use glossary_io::GlossaryContext;
use serde_json::json;

use crate::cli::root_commands::StatsArgs;
use crate::cli::GlobalFlags;
use crate::output;

/// Handle `glossary stats`.
pub fn handle(args: &StatsArgs, ctx: &GlossaryContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args.input.as_deref().unwrap_or_else(|| ctx.output_path());
    let document = super::load_glossary(ctx, Some(path))?;
    let categories = category_breakdown(&document.terms);

    if args.json {
        return output::print_json(&json!({
            "path": path.display().to_string(),
            "terms": document.terms.len(),
            "fingerprint": document.fingerprint(),
            "categories": categories,
        }));
    }

    println!("Glossary file: {}", path.display());
    println!("Total terms: {}", document.terms.len());
    println!("Categories: {}", categories.len());
    if !categories.is_empty() {
        println!();
        println!("Terms by category:");
        output::print_categories(&categories);
    }
    Ok(())
}
