//! domnav CLI library
//!
//! Command-line front end for `dom-navigator`: resolves an element identifier
//! against an HTML document and prints the result.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, Commands, FormatArg, QueryArgs};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    render_bool, render_collection, render_element, CollectionSummary, ElementSummary,
    OutputFormat,
};
pub use runner::{build_identifier, execute, read_document, QueryOutput, EXIT_ERROR, EXIT_FALSE};
