use glossary_io::GlossaryContext;

use crate::cli::root_commands::CheckArgs;
use crate::cli::GlobalFlags;

/// Handle `glossary check`. Fails when the glossary has problems.
pub fn handle(args: &CheckArgs, ctx: &GlossaryContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = super::load_glossary(ctx, args.file.as_deref())?;
    let problems = ctx.check(&document);
    if problems.is_empty() {
        if !flags.quiet {
            println!("Glossary is valid!");
            println!("{} terms found", document.terms.len());
        }
        return Ok(());
    }

    println!("Validation errors:");
    for problem in &problems {
        println!("  - {problem}");
    }
    anyhow::bail!("{} validation problems found", problems.len())
}
