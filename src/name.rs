//! Fallback worker names.
//! When a worker does not declare a `name`, one is derived from the values
//! it does declare, e.g. `process_priority,process` becomes
//! `process-priority-process`.

use crate::config::Value;
use regex::Regex;
use std::sync::LazyLock;

static INVALID_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-a-zA-Z0-9]").unwrap());

static DASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--+").unwrap());

/// Builds a slug from the rendered values joined with `-`.
///
/// Anything outside `[A-Za-z0-9-]` becomes `-`, runs of dashes collapse to
/// one and a single leading and trailing dash is dropped. Non-ASCII
/// characters are treated like any other invalid character.
pub fn synthesize_name<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let joined = values.into_iter().map(Value::to_string).collect::<Vec<_>>().join("-");
    let replaced = INVALID_CHARS.replace_all(&joined, "-");
    let collapsed = DASH_RUNS.replace_all(&replaced, "-");

    let collapsed: &str = &collapsed;
    let trimmed = collapsed.strip_prefix('-').unwrap_or(collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_from_queue_list() {
        let values = [Value::from("process_priority,process")];
        assert_eq!(synthesize_name(&values), "process-priority-process");
    }

    #[test]
    fn test_synthesize_empty() {
        assert_eq!(synthesize_name(std::iter::empty::<&Value>()), "");
    }
}
