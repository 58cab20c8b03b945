use anyhow::Context;
use glossary_io::export::{filter_category, output_path, ExportFormat};
use glossary_io::sink::write_atomic;
use glossary_io::GlossaryContext;

use crate::cli::root_commands::ExportArgs;
use crate::cli::GlobalFlags;

/// Handle `glossary export`.
pub fn handle(args: &ExportArgs, ctx: &GlossaryContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut document = super::load_glossary(ctx, args.input.as_deref())?;
    if let Some(category) = &args.category {
        document = filter_category(&document, category);
    }
    let format: ExportFormat = args.format.into();
    let rendered = ctx.export(&document, format).context("failed to render glossary")?;

    match &args.output {
        Some(target) => {
            let path = output_path(target, format);
            write_atomic(&path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !flags.quiet {
                println!("Exported {} terms to {}", document.terms.len(), path.display());
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
