//! Common constants used throughout kube-templates.

/// Line placed between two generated deployments
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// Template variable that is synthesized when a worker does not declare it
pub const NAME_KEY: &str = "name";

/// Command-line argument that stands for standard input
pub const STDIN_ARG: &str = "-";

/// Template read when none is given on the command line
pub const DEFAULT_TEMPLATE_FILE: &str = "resque-template.yml";

/// Worker configuration read when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "resque-workers.yml";
