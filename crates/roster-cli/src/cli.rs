//! CLI argument definitions for the roster cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster feed cleaner - normalize loosely-structured employee records",
    long_about = "Normalize a raw employee feed into strictly-typed records.\n\n\
                  Every parsing anomaly is kept as a per-field warning or error, and\n\
                  the original value of every field travels with its cleaned record."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw feed and emit the normalized records.
    ///
    /// Exits non-zero when any record carries an error-flagged field.
    Clean(CleanArgs),

    /// List the fields of the employee schema.
    Fields,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the raw feed (a JSON array of records).
    #[arg(value_name = "FEED")]
    pub input: PathBuf,

    /// Write cleaned records here instead of stdout; also prints a summary.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
