//! kube-templates builds Kubernetes deployments for resque workers.
//! A single template with `${VARIABLE}` placeholders is expanded once per
//! worker declared in a YAML configuration, with shared defaults and a
//! synthesized name for workers that do not declare one.

/// Reads inputs, parses the configuration and expands the template
pub mod builder;

/// Command-line interface for the `resque-k8s` binary
pub mod cli;

/// Worker configuration parsing and default merging
pub mod config;

/// Shared constants: separator, reserved keys and default file names
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger setup for the binary
pub mod logger;

/// Fallback names derived from a worker's values
pub mod name;

/// Template and configuration input sources
pub mod source;

/// Placeholder expansion
pub mod template;
