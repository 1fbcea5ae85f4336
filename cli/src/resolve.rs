#![deny(missing_docs)]

//! # Resolve Command
//!
//! Reads a route manifest, runs the resolver over every route, and emits
//! one OpenAPI operation fragment per route.

use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use routedoc_core::{parse_route_manifest, resolve_operation, OperationFragment};
use std::fs;
use std::path::PathBuf;

/// Output serialization format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML output.
    Yaml,
    /// JSON output.
    Json,
}

/// Arguments for the resolve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Path to the route manifest (YAML or JSON).
    #[clap(long)]
    pub manifest: PathBuf,

    /// Output path for the fragment document.
    /// If not provided, prints to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Output format. Defaults to the output extension, else YAML.
    #[clap(long, value_enum)]
    pub format: Option<Format>,
}

impl ResolveArgs {
    /// Effective output format: explicit flag first, then the output file
    /// extension, then YAML.
    fn effective_format(&self) -> Format {
        if let Some(format) = self.format {
            return format;
        }

        let ext = self
            .output
            .as_ref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str());
        match ext {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Executes the resolve command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ResolveArgs) -> CliResult<()> {
    if !args.manifest.exists() {
        return Err(CliError::General(format!(
            "Manifest not found: {:?}",
            args.manifest
        )));
    }

    let content = fs::read_to_string(&args.manifest)
        .map_err(|e| CliError::General(format!("Failed to read manifest: {}", e)))?;

    // 1. Parse the manifest using the core parser
    let manifest = parse_route_manifest(&content)?;

    // 2. Resolve every route and build serializable fragments
    let fragments: Vec<OperationFragment> = manifest
        .routes
        .iter()
        .map(|spec| {
            OperationFragment::from_essentials(&resolve_operation(
                &spec.route,
                &spec.params,
                &spec.doc,
                &manifest.config,
            ))
        })
        .collect();

    // 3. Output formatting
    let output_str = match args.effective_format() {
        Format::Yaml => serde_yaml::to_string(&fragments)
            .map_err(|e| CliError::General(format!("YAML serialization failed: {}", e)))?,
        Format::Json => serde_json::to_string_pretty(&fragments)
            .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e)))?,
    };

    // 4. Write result
    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::General(format!("Failed to create output directory: {}", e))
                })?;
            }
        }
        fs::write(out_path, output_str)
            .map_err(|e| CliError::General(format!("Failed to write output file: {}", e)))?;
        println!(
            "Resolved {} route(s) into {:?}",
            manifest.routes.len(),
            out_path
        );
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
