//! CLI argument definitions for the phone-list scrubber.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Phone-list scrubber - remove excluded phone numbers from a base list",
    long_about = "Remove rows from a base spreadsheet whose phone number appears in an\n\
                  exclusion spreadsheet.\n\n\
                  Both files are semicolon-delimited CSV. Numbers are compared on their\n\
                  last 9 digits, so country and area code prefixes do not matter."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a base list against an exclusion list.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// The base spreadsheet to be cleaned (structure is preserved).
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// The exclusion spreadsheet; its FIRST column holds the numbers to
    /// remove, whatever that column is called.
    #[arg(value_name = "EXCLUSION")]
    pub exclusion: PathBuf,

    /// Output file (default: <BASE stem>_cleaned.csv next to BASE).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the phone column in the base spreadsheet.
    #[arg(long = "key-column", value_name = "NAME", default_value = "FONE1_NR")]
    pub key_column: String,

    /// Field delimiter for inputs and output (single ASCII character).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,

    /// Filter and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the summary as JSON on stdout instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
