//! Line-level helpers shared by the extractor and the reindenter.
//!
//! None of these understand quoted strings: a `#` or a brace inside quotes
//! is treated like any other.

use std::sync::LazyLock;

use regex::Regex;

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+([A-Za-z0-9_]+)\s*=").expect("valid regex"));
static NUMERIC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"));

/// The part of a line before its first `#`.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Net brace count of a piece of code: `{` adds one, `}` removes one.
pub fn brace_delta(code: &str) -> i64 {
    code.chars().fold(0, |delta, c| match c {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}

/// The key of an indented `key = ...` line, as written.
///
/// The line must start with at least one whitespace character; unindented
/// assignments are entity names, not fields.
pub fn assignment_key(line: &str) -> Option<&str> {
    ASSIGNMENT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Ordinal keys such as `50 = { ... }` in list-like blocks.
pub fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEY.is_match(key)
}

pub fn is_field_name(key: &str) -> bool {
    FIELD_NAME.is_match(key)
}
