use std::path::Path;

use anyhow::Context;
use glossary_core::models::GlossaryDocument;
use glossary_io::source::baseline_loader::read_document;
use glossary_io::GlossaryContext;

use crate::cli::{Commands, GlobalFlags};

pub mod check;
pub mod export;
pub mod merge;
pub mod stats;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, ctx: &GlossaryContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Merge(args) => merge::handle(args, ctx, flags),
        Commands::Check(args) => check::handle(args, ctx, flags),
        Commands::Export(args) => export::handle(args, ctx, flags),
        Commands::Stats(args) => stats::handle(args, ctx, flags),
    }
}

/// The glossary at `input`, or at the configured output path.
fn load_glossary(ctx: &GlossaryContext, input: Option<&Path>) -> anyhow::Result<GlossaryDocument> {
    let path = input.unwrap_or_else(|| ctx.output_path());
    read_document(path)
        .with_context(|| format!("failed to load glossary {}", path.display()))?
        .with_context(|| format!("no glossary at {}; run `glossary merge` first", path.display()))
}
