//! Query execution: load the document, build the identifier, run the command

use dom_navigator::{ElementIdentifier, HtmlDocument, NavigatorConfig};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::commands::{Commands, QueryArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{
    render_bool, render_collection, render_element, CollectionSummary, ElementSummary,
};

/// Exit code for `has` / `has-one` when the answer is no
pub const EXIT_FALSE: u8 = 1;

/// Exit code for any error
pub const EXIT_ERROR: u8 = 2;

/// Rendered result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    /// Text to print on stdout
    pub rendered: String,
    /// Answer of an existence probe; `None` for `find` / `find-one`
    pub verdict: Option<bool>,
}

impl QueryOutput {
    /// Process exit code for this output
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.verdict {
            Some(false) => EXIT_FALSE,
            Some(true) | None => 0,
        }
    }
}

/// Read the HTML source, `-` meaning stdin
pub fn read_document(path: &Path) -> CliResult<String> {
    let document_error = |source| CliError::Document {
        path: path.display().to_string(),
        source,
    };
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(document_error)?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(document_error)
}

/// Build the identifier from the JSON argument or the `--locator` shorthand
pub fn build_identifier(
    args: &QueryArgs,
    limits: &NavigatorConfig,
) -> CliResult<ElementIdentifier> {
    if let Some(json) = &args.identifier {
        return Ok(limits.decode(json)?);
    }
    let Some(locator) = &args.locator else {
        return Err(CliError::invalid_argument(
            "an identifier (JSON) or --locator is required",
        ));
    };
    if locator.trim().is_empty() {
        return Err(CliError::invalid_argument("--locator cannot be empty"));
    }
    let mut identifier = ElementIdentifier::new(locator.as_str());
    if let Some(position) = args.position {
        identifier = identifier.at_position(position);
    }
    limits.check(&identifier)?;
    Ok(identifier)
}

/// Run `command` against the HTML `source`
pub fn execute(command: &Commands, source: &str, config: &CliConfig) -> CliResult<QueryOutput> {
    let identifier = build_identifier(command.args(), &config.navigator)?;
    debug!(command = command.name(), identifier = %identifier, "executing query");

    let document = HtmlDocument::parse(source);
    let navigator = document.navigator().with_config(config.navigator.clone());
    let format = config.format;

    let output = match command {
        Commands::Find(_) => {
            let collection = navigator.find(&identifier)?;
            let summary = CollectionSummary::from_collection(&collection);
            QueryOutput {
                rendered: render_collection(&summary, format)?,
                verdict: None,
            }
        }
        Commands::FindOne(_) => {
            let element = navigator.find_one(&identifier)?;
            QueryOutput {
                rendered: render_element(&ElementSummary::from_node(&element), format)?,
                verdict: None,
            }
        }
        Commands::Has(_) => probe(navigator.has(&identifier)?, config)?,
        Commands::HasOne(_) => probe(navigator.has_one(&identifier)?, config)?,
    };

    info!(command = command.name(), locator = identifier.locator(), "query complete");
    Ok(output)
}

fn probe(verdict: bool, config: &CliConfig) -> CliResult<QueryOutput> {
    Ok(QueryOutput {
        rendered: render_bool(verdict, config.format)?,
        verdict: Some(verdict),
    })
}
