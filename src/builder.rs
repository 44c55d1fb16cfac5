//! Deployment builder.
//! Reads the template and worker configuration once, then expands the
//! template for every worker.
//!
//! # Example
//!
//! ```
//! use kube_templates::builder::Builder;
//!
//! let template = "name: resque-${NAME}\nreplicas: ${REPLICAS}\n";
//! let config = "defaults:\n  replicas: 2\nworkers:\n  - queues: reports\n";
//! let builder = Builder::from_strs(template, config).unwrap();
//! assert_eq!(builder.build(), "name: resque-reports\nreplicas: 2\n");
//! ```

use crate::config::{parse_config, Config, KeyPolicy};
use crate::error::Result;
use crate::source::{read_source, Source};
use crate::template::{expand, join_documents};

/// Holds a template and the parsed worker configuration.
#[derive(Debug, Clone)]
pub struct Builder {
    template: String,
    config: Config,
}

impl Builder {
    /// Reads both inputs and parses the configuration.
    ///
    /// Paths are opened and closed here; readers are read to the end and
    /// left to the caller.
    ///
    /// # Errors
    /// * `Error::UnsupportedSourceError` if an input cannot be read as text
    /// * `Error::IoError` if reading fails
    /// * `Error::MalformedConfigError` / `Error::MissingWorkersError` for a bad configuration
    pub fn new(template: Source<'_>, config: Source<'_>, policy: KeyPolicy) -> Result<Self> {
        let template = read_source("template", template)?;
        let config = read_source("config", config)?;
        Self::with_policy(template, &config, policy)
    }

    /// Creates a builder from in-memory text, keeping keys as declared.
    pub fn from_strs<T: Into<String>>(template: T, config: &str) -> Result<Self> {
        Self::with_policy(template, config, KeyPolicy::default())
    }

    /// Creates a builder from in-memory text with the given key policy.
    pub fn with_policy<T: Into<String>>(
        template: T,
        config: &str,
        policy: KeyPolicy,
    ) -> Result<Self> {
        let config = parse_config(config, policy)?;
        Ok(Self { template: template.into(), config })
    }

    /// Template text as read.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parsed worker configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Expanded deployments, one per worker, in declaration order.
    pub fn documents(&self) -> Vec<String> {
        expand(&self.template, &self.config.defaults, &self.config.workers)
    }

    /// All deployments joined with `---` lines.
    pub fn build(&self) -> String {
        join_documents(&self.documents())
    }
}
