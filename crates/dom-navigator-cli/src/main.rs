//! domnav: resolve element identifiers against HTML documents
//!
//! ## Usage
//!
//! ```bash
//! domnav find -d page.html --locator h1                       # every h1
//! domnav find-one -d page.html '{"locator":"input","parent":{"locator":"form","position":2}}'
//! curl -s https://example.org | domnav has -d - -l '//form'   # exit 0 / 1
//! ```

use clap::Parser;
use domnav::{execute, logging, read_document, Cli, CliConfig, CliResult, Verbosity, EXIT_ERROR};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> CliResult<u8> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(config.verbosity);

    let source = read_document(&cli.command.args().document)?;
    let output = execute(&cli.command, &source, &config)?;

    println!("{}", output.rendered);
    Ok(output.exit_code())
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };
    if let Some(format) = cli.format {
        config = config.with_format(format.into());
    }
    Ok(config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose)))
}
