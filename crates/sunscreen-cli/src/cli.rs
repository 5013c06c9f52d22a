//! CLI argument definitions for the sunscreen sanitizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sunscreen",
    version,
    about = "Sanitize sunscreen submissions and infer their UV filters",
    long_about = "Sanitize sunscreen product submissions.\n\n\
                  Strips brand and SPF/PA annotations from product names, normalizes\n\
                  ingredient lists and infers UV filters from a reference catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// UV filter catalog: a standards directory (CSV) or a JSON file.
    ///
    /// Defaults to $SUNSCREEN_STANDARDS_DIR, then the bundled standards/ directory.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sanitize one submission or an array of submissions from a JSON file.
    Sanitize(SanitizeArgs),

    /// Show the UV filter catalog and its health report.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct SanitizeArgs {
    /// JSON file holding a submission object or an array of them.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the sanitized JSON document here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format on stdout.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,

    /// Order sanitized records by brand, then product (case-insensitive).
    #[arg(long = "sort")]
    pub sort: bool,

    /// Exit with a failure status when any warning is emitted.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
