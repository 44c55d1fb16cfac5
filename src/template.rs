//! Placeholder expansion.
//! Replaces every `${TOKEN}` in a template with the worker's value for the
//! lower-cased token, falling back to the defaults and, for `name`, to a
//! synthesized name. Unknown placeholders are left untouched.

use crate::config::{merge, VariableMap};
use crate::constants::{DOCUMENT_SEPARATOR, NAME_KEY};
use crate::name::synthesize_name;
use indexmap::IndexSet;
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Expands the template for a single worker.
///
/// # Arguments
/// * `template` - Template text with `${TOKEN}` placeholders
/// * `defaults` - Values shared by every worker
/// * `worker` - Values declared by this worker
///
/// # Returns
/// * `String` - The template with every resolvable placeholder substituted
pub fn expand_document(template: &str, defaults: &VariableMap, worker: &VariableMap) -> String {
    let variables = merge(defaults, worker);

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = caps[1].to_lowercase();
            if let Some(value) = variables.get(&key) {
                value.to_string()
            } else if key == NAME_KEY {
                synthesize_name(worker.values())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Expands the template once per worker, keeping the workers' order.
pub fn expand(template: &str, defaults: &VariableMap, workers: &[VariableMap]) -> Vec<String> {
    workers
        .iter()
        .enumerate()
        .map(|(i, worker)| {
            debug!("Expanding template for worker #{}.", i + 1);
            expand_document(template, defaults, worker)
        })
        .collect()
}

/// Joins expanded documents with a `---` line.
pub fn join_documents<S: AsRef<str>>(documents: &[S]) -> String {
    documents.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(DOCUMENT_SEPARATOR)
}

/// Lists the distinct lower-cased placeholder keys, in order of first use.
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_lowercase())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
