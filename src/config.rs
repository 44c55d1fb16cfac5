//! Worker configuration handling.
//! Parses the YAML configuration into shared defaults and the ordered list
//! of workers, and merges each worker over the defaults.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use std::fmt;

/// A configuration value: a YAML scalar or a list of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl fmt::Display for Value {
    /// Renders the value the way it is substituted into a template.
    /// Null renders empty, lists join their items with `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            // Whole floats keep their fractional digit, `2.0` stays `2.0`.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

/// Variables available to one expansion, in declaration order.
pub type VariableMap = IndexMap<String, Value>;

/// How configuration keys are treated at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Keys are used exactly as declared and must already be lower case.
    /// Keys that are not are reported with a warning and can never match
    /// a template placeholder.
    #[default]
    Preserve,
    /// Keys are folded to lower case; a later key wins over an earlier one
    /// that folds to the same name.
    Lowercase,
}

/// Parsed worker configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Values applied to every worker that does not declare its own
    pub defaults: VariableMap,
    /// Workers in the order they are declared
    pub workers: Vec<VariableMap>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    defaults: Option<VariableMap>,
    #[serde(default)]
    workers: Option<Vec<Option<VariableMap>>>,
}

/// Parses the configuration text.
///
/// # Arguments
/// * `content` - Raw YAML text with optional `defaults` and required `workers`
/// * `policy` - How keys that are not lower case are handled
///
/// # Errors
/// * `Error::MalformedConfigError` if the text is not YAML of the expected shape
/// * `Error::MissingWorkersError` if there is no `workers` collection
/// * `Error::InvalidWorkerError` if a worker entry is null
pub fn parse_config(content: &str, policy: KeyPolicy) -> Result<Config> {
    if content.trim().is_empty() {
        return Err(Error::MissingWorkersError);
    }

    let raw: Option<RawConfig> = serde_yaml::from_str(content)?;
    let raw = raw.ok_or(Error::MissingWorkersError)?;
    let workers = raw.workers.ok_or(Error::MissingWorkersError)?;

    let defaults = apply_key_policy(raw.defaults.unwrap_or_default(), policy, "defaults");
    let workers = workers
        .into_iter()
        .enumerate()
        .map(|(i, worker)| {
            let worker = worker.ok_or(Error::InvalidWorkerError { index: i + 1 })?;
            Ok(apply_key_policy(worker, policy, &format!("worker #{}", i + 1)))
        })
        .collect::<Result<Vec<VariableMap>>>()?;

    debug!("Loaded {} default value(s) and {} worker(s).", defaults.len(), workers.len());
    Ok(Config { defaults, workers })
}

fn apply_key_policy(map: VariableMap, policy: KeyPolicy, section: &str) -> VariableMap {
    match policy {
        KeyPolicy::Preserve => {
            for key in map.keys().filter(|k| k.chars().any(char::is_uppercase)) {
                warn!(
                    "Key '{key}' in {section} is not lower case and will never match a placeholder."
                );
            }
            map
        }
        KeyPolicy::Lowercase => {
            let mut folded = VariableMap::with_capacity(map.len());
            for (key, value) in map {
                folded.insert(key.to_lowercase(), value);
            }
            folded
        }
    }
}

/// Merges one worker over the defaults into a new map.
///
/// Keys keep the defaults' order; worker values replace defaults in place
/// and keys only the worker declares are appended in its order.
pub fn merge(defaults: &VariableMap, worker: &VariableMap) -> VariableMap {
    let mut variables = defaults.clone();
    for (key, value) in worker {
        variables.insert(key.clone(), value.clone());
    }
    variables
}
