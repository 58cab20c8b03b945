use std::path::PathBuf;

use clap::Parser;
use glossary_core::config::CliOverrides;

pub mod root_commands;

pub use root_commands::{Commands, ExportFormatArg};

/// Top-level CLI parser for the `glossary` binary.
#[derive(Debug, Parser)]
#[command(
    name = "glossary",
    version,
    about = "Consolidate acronym sources into one canonical glossary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to glossary.toml in the project root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root that configured paths are resolved against
    #[arg(short = 'C', long, global = true)]
    pub root: Option<PathBuf>,

    /// Quiet mode (errors only, no summary)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Global flags handed to command handlers.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
}

impl Cli {
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Config overrides carried by the chosen subcommand.
    pub fn overrides(&self) -> CliOverrides {
        match &self.command {
            Commands::Merge(args) => CliOverrides {
                sources_dir: args.sources.clone(),
                baseline_path: args.baseline.clone(),
                no_baseline: args.no_baseline,
                output_path: args.output.clone(),
                overwrite: args.no_overwrite.then_some(false),
                organization: args.organization.clone(),
                log_level: None,
            },
            Commands::Export(args) => CliOverrides {
                organization: args.organization.clone(),
                ..CliOverrides::default()
            },
            Commands::Check(_) | Commands::Stats(_) => CliOverrides::default(),
        }
    }
}
