use anyhow::Context;
use glossary_io::sink::write_json_atomic;
use glossary_io::GlossaryContext;
use tracing::info;

use crate::cli::root_commands::MergeArgs;
use crate::cli::GlobalFlags;
use crate::output;

/// Handle `glossary merge`.
pub fn handle(args: &MergeArgs, ctx: &GlossaryContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let output = if args.dry_run {
        info!("dry run, glossary not written");
        ctx.consolidate()
    } else {
        ctx.merge()
            .with_context(|| format!("failed to write {}", ctx.output_path().display()))?
    };

    if let Some(path) = &args.report {
        write_json_atomic(path, &output.report, true)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    if args.json {
        output::print_json(&output.report)?;
    } else if !flags.quiet {
        let written_to = (!args.dry_run).then(|| ctx.output_path());
        output::print_report(&output.report, written_to, flags.verbose);
    }
    Ok(())
}
