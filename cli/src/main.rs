#![deny(missing_docs)]

//! # routedoc CLI
//!
//! Command Line Interface for resolving route manifests into OpenAPI
//! operation fragments.
//!
//! Supported Commands:
//! - `resolve`: Manifest -> resolved operation fragments (YAML/JSON).

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod resolve;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Route metadata -> OpenAPI essentials")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a route manifest into OpenAPI operation fragments.
    Resolve(resolve::ResolveArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Resolve(args) => resolve::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
