//! CLI argument definitions for the IDS studio binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ids-studio",
    version,
    about = "IDS compiler and validator - export and check Information Delivery Specifications",
    long_about = "Compile draft specification documents into IDS XML and check\n\
                  candidate documents for structural conformance.\n\n\
                  The validator applies a fixed structural checklist; it is not\n\
                  a full XSD type checker."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Compile a draft specification document (JSON) into an IDS XML file.
    Export(ExportArgs),

    /// Check an IDS document against the structural checklist.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the draft document (JSON).
    #[arg(value_name = "DRAFT_JSON")]
    pub draft: PathBuf,

    /// Output path (default: a filename derived from the document title).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip self-validation of the rendered document.
    ///
    /// The generator always writes the document; self-validation only reports
    /// structural defects it would contain.
    #[arg(long = "no-validate")]
    pub no_validate: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the IDS document to check.
    #[arg(value_name = "IDS_FILE")]
    pub document: PathBuf,

    /// Optional ids.xsd for a parse-sanity check (never used for type checks).
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Write the validation report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
