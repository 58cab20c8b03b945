use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use glossary_core::config::GlossaryConfig;
use glossary_core::tracing::init_tracing;
use glossary_io::GlossaryContext;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("glossary error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let root = resolve_project_root(cli.root.as_deref())?;

    let overrides = cli.overrides();
    let mut config = GlossaryConfig::load(&root, cli.config.as_deref(), Some(&overrides))
        .context("failed to load glossary configuration")?;
    if cli.quiet {
        config.observability.log_level = "error".to_string();
    } else if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    init_tracing(&config.observability);

    let flags = cli.global_flags();
    let ctx = GlossaryContext::open(root, config).context("failed to open glossary context")?;
    let result = commands::dispatch(&cli.command, &ctx, &flags);
    ctx.close();
    result
}

fn resolve_project_root(root_override: Option<&Path>) -> anyhow::Result<PathBuf> {
    match root_override {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        Some(path) => anyhow::bail!("invalid --root '{}': directory does not exist", path.display()),
        None => std::env::current_dir().context("failed to read current directory"),
    }
}
