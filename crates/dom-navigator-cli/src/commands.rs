//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// domnav: resolve element identifiers against HTML documents
#[derive(Parser, Debug)]
#[command(name = "domnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(long, global = true, env = "DOMNAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true)]
    pub format: Option<FormatArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every element the identifier resolves to
    Find(QueryArgs),

    /// Print the single element the identifier resolves to
    FindOne(QueryArgs),

    /// Exit 0 if the identifier resolves to at least one element, 1 otherwise
    Has(QueryArgs),

    /// Exit 0 if the identifier resolves to exactly one element, 1 otherwise
    HasOne(QueryArgs),
}

impl Commands {
    /// Arguments shared by every subcommand
    #[must_use]
    pub const fn args(&self) -> &QueryArgs {
        match self {
            Self::Find(args) | Self::FindOne(args) | Self::Has(args) | Self::HasOne(args) => args,
        }
    }

    /// Subcommand name as typed on the command line
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Find(_) => "find",
            Self::FindOne(_) => "find-one",
            Self::Has(_) => "has",
            Self::HasOne(_) => "has-one",
        }
    }
}

/// Document and identifier for a query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// HTML document to query (`-` reads stdin)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Identifier as JSON, e.g. '{"locator":"input","parent":{"locator":"form"}}'
    #[arg(conflicts_with_all = ["locator", "position"])]
    pub identifier: Option<String>,

    /// Locator shorthand; XPath when it starts with `/`, `./`, `..` or `(`
    #[arg(short, long)]
    pub locator: Option<String>,

    /// Ordinal position for --locator (1-based, negative counts from the end)
    #[arg(short, long, requires = "locator", allow_negative_numbers = true)]
    pub position: Option<i64>,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON objects
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
