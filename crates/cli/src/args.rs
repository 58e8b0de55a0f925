// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "linetally",
    version = crate::VERSION,
    about = "Count files, empty lines and non-empty lines per file extension"
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

/// Traversal options
#[derive(ClapArgs, Debug, Default)]
pub struct ScanOptions {
    /// gitignore-style pattern file; patterns are anchored at its directory
    #[arg(
        long = "ignore-file",
        visible_alias = "gitcount",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help_heading = "Scan"
    )]
    pub ignore_file: Option<PathBuf>,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// Maximum directory depth (1 = only direct children of DIR)
    #[arg(long, value_name = "N", help_heading = "Scan")]
    pub max_depth: Option<usize>,
}

/// Output options
#[derive(ClapArgs, Debug, Default)]
pub struct OutputOptions {
    /// Report format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// List the zero-based indices of empty lines per file instead of the report
    #[arg(long, conflicts_with = "format", help_heading = "Output")]
    pub empty_lines: bool,
}

/// Diagnostics on stderr
#[derive(ClapArgs, Debug, Default)]
pub struct LoggingOptions {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
