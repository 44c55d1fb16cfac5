//! Command-line interface implementation for resque-k8s.
//! Provides argument parsing and the top-level run logic.

use crate::builder::Builder;
use crate::config::KeyPolicy;
use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_TEMPLATE_FILE};
use crate::error::{Error, Result};
use crate::source::{read_source, sources_from_args};
use crate::template::placeholders;
use clap::Parser;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Command-line arguments structure for resque-k8s.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Builds a Kubernetes deployment for every configured resque worker",
    long_about = None
)]
pub struct Args {
    /// Deployment template with ${VARIABLE} placeholders, `-` for stdin
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: String,

    /// Worker configuration with `defaults` and `workers` sections, `-` for stdin
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Write the deployments to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fold configuration keys to lower case instead of requiring them to be
    /// lower case already
    #[arg(long)]
    pub normalize_keys: bool,

    /// Print the placeholders used by the template and exit
    #[arg(long)]
    pub list_placeholders: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn key_policy(&self) -> KeyPolicy {
        if self.normalize_keys {
            KeyPolicy::Lowercase
        } else {
            KeyPolicy::Preserve
        }
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Builds the deployments described by `args` and writes them out.
///
/// # Flow
/// 1. Resolves both inputs to sources
/// 2. Reads them and parses the configuration; with `--list-placeholders`
///    only the template is read
/// 3. Expands the template for every worker
/// 4. Writes the joined result to the output file or stdout
pub fn run(args: Args) -> Result<()> {
    let (template, config) = sources_from_args(&args.template, &args.config)?;

    let output = if args.list_placeholders {
        let template = read_source("template", template)?;
        placeholders(&template).into_iter().map(|key| key + "\n").collect::<String>()
    } else {
        Builder::new(template, config, args.key_policy())?.build()
    };

    match args.output {
        Some(path) => {
            debug!("Writing deployments to '{}'.", path.display());
            std::fs::write(&path, output).map_err(|source| Error::OutputError {
                destination: path.display().to_string(),
                source,
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::OutputError {
                    destination: "stdout".to_string(),
                    source,
                })
        }
    }
}
