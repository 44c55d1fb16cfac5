//! Input acquisition for the template and the worker configuration.
//! Either input may be a path, which is opened, read and closed here, or an
//! already-open reader, which is read but left to its owner.
use crate::constants::STDIN_ARG;
use crate::error::{Error, Result};
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text of an input comes from.
pub enum Source<'a> {
    /// File on disk, opened and closed by [`read_source`]
    Path(PathBuf),
    /// Standard input of the current process
    Stdin,
    /// Reader owned by the caller
    Reader(&'a mut dyn Read),
}

impl std::fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(path) => write!(f, "local path: '{}'", path.display()),
            Source::Stdin => write!(f, "standard input"),
            Source::Reader(_) => write!(f, "reader"),
        }
    }
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Source({self})")
    }
}

impl Source<'static> {
    /// Creates a source from a command-line argument, `-` meaning stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

/// Resolves the template and configuration arguments into sources.
///
/// # Errors
/// * `Error::UnsupportedSourceError` if both arguments ask for standard input
pub fn sources_from_args(
    template: &str,
    config: &str,
) -> Result<(Source<'static>, Source<'static>)> {
    let template = Source::from_arg(template);
    let config = Source::from_arg(config);
    if matches!((&template, &config), (Source::Stdin, Source::Stdin)) {
        return Err(Error::UnsupportedSourceError {
            argument: "config".to_string(),
            kind: "standard input is already used for the template".to_string(),
        });
    }
    Ok((template, config))
}

/// Reads the whole text of a source.
///
/// # Arguments
/// * `argument` - Which input is being read, used in error messages
/// * `source` - Where to read from
///
/// Any path that can be opened and read is accepted, including FIFOs and
/// `/dev/stdin`.
///
/// # Errors
/// * `Error::IoError` if the path cannot be opened or reading fails
pub fn read_source(argument: &str, source: Source<'_>) -> Result<String> {
    debug!("Reading {argument} from {source}.");
    let mut text = String::new();
    match source {
        Source::Path(path) => {
            // Closed when dropped at the end of this arm, on success or error.
            let mut file = File::open(&path)?;
            file.read_to_string(&mut text)?;
        }
        Source::Stdin => {
            io::stdin().lock().read_to_string(&mut text)?;
        }
        Source::Reader(reader) => {
            reader.read_to_string(&mut text)?;
        }
    }
    Ok(text)
}
