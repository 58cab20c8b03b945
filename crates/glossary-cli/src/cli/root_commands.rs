use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use glossary_io::ExportFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Merge every source onto the baseline and write the canonical glossary.
    Merge(MergeArgs),
    /// Validate an existing glossary without writing anything.
    Check(CheckArgs),
    /// Render the glossary as Markdown, JSON, CSV, or an acronym list.
    Export(ExportArgs),
    /// Show term counts per category.
    Stats(StatsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MergeArgs {
    /// Directory of source files
    #[arg(long)]
    pub sources: Option<String>,
    /// Previously published glossary to merge onto
    #[arg(long, conflicts_with = "no_baseline")]
    pub baseline: Option<String>,
    /// Ignore the baseline
    #[arg(long)]
    pub no_baseline: bool,
    /// Output glossary path
    #[arg(short, long)]
    pub output: Option<String>,
    /// Fail instead of replacing an existing output
    #[arg(long)]
    pub no_overwrite: bool,
    /// Organization name, excluded from disambiguation suffixes
    #[arg(long)]
    pub organization: Option<String>,
    /// Consolidate and report without writing the glossary
    #[arg(long)]
    pub dry_run: bool,
    /// Also write the consolidation report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Print the report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Glossary file (defaults to the configured output path)
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormatArg::Markdown)]
    pub format: ExportFormatArg,
    /// Write to this file (or `glossary.<ext>` inside this directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Glossary file (defaults to the configured output path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Only terms of this category
    #[arg(long)]
    pub category: Option<String>,
    /// Organization name used in the Markdown title
    #[arg(long)]
    pub organization: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Glossary file (defaults to the configured output path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormatArg {
    #[value(alias = "md")]
    Markdown,
    Json,
    Csv,
    List,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Markdown => ExportFormat::Markdown,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::List => ExportFormat::List,
        }
    }
}
