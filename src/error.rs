//! Error handling for kube-templates.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading inputs, parsing the worker
/// configuration or writing the generated deployments.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input failed
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// One of the inputs names something that cannot be read as text
    #[error("Don't know how to read the {argument}: {kind}.")]
    UnsupportedSourceError { argument: String, kind: String },

    /// The configuration is not YAML or does not match the expected layout
    #[error("Malformed configuration: {0}.")]
    MalformedConfigError(#[from] serde_yaml::Error),

    /// The configuration has no `workers` collection
    #[error("Malformed configuration: the 'workers' collection is missing.")]
    MissingWorkersError,

    /// A `workers` entry is null instead of a mapping
    #[error("Malformed configuration: worker #{index} is empty.")]
    InvalidWorkerError { index: usize },

    /// Writing the generated deployments failed
    #[error("Failed to write output to '{destination}': {source}.")]
    OutputError { destination: String, source: io::Error },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
