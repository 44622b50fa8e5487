pub mod compose;
pub mod reindent;

use std::fmt;

pub use compose::AiModifier;
pub use reindent::{Reindented, reindent};

/// The value side of a `key = value` line.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Only free text with spaces needs quotes; keys, paths and
            // references are written bare. Empty text still needs a token.
            PropertyValue::Text(s) if s.is_empty() || s.contains(' ') => {
                write!(f, "\"{}\"", s)
            }
            PropertyValue::Text(s) => write!(f, "{}", s),
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Float(n) => {
                if n.is_finite() && *n == n.floor() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            PropertyValue::Boolean(true) => write!(f, "yes"),
            PropertyValue::Boolean(false) => write!(f, "no"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<&String> for PropertyValue {
    fn from(s: &String) -> Self {
        PropertyValue::Text(s.clone())
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Integer(n.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Integer(n)
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        PropertyValue::Integer(n.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

/// Builds script text line by line, one tab of indentation per open block.
///
/// Nesting is not validated: unmatched `open_block` calls simply leave the
/// output unclosed, and `close_block` at the top level stays at indent zero.
#[derive(Debug, Clone, Default)]
pub struct BlockFormatter {
    indent: usize,
    lines: Vec<String>,
}

impl BlockFormatter {
    pub fn new() -> Self {
        BlockFormatter::default()
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Emit `name = {` and enter the block.
    pub fn open_block(&mut self, name: &str) -> &mut Self {
        self.push(format!("{} = {{", name));
        self.indent += 1;
        self
    }

    /// Emit `name = value {` and enter the block.
    pub fn open_block_with(&mut self, name: &str, value: &str) -> &mut Self {
        self.push(format!("{} = {} {{", name, value));
        self.indent += 1;
        self
    }

    /// Leave the current block and emit its `}`.
    pub fn close_block(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.push("}".to_string());
        self
    }

    pub fn write_property(&mut self, key: &str, value: impl Into<PropertyValue>) -> &mut Self {
        self.push(format!("{} = {}", key, value.into()));
        self
    }

    pub fn write_comment(&mut self, text: &str) -> &mut Self {
        self.push(format!("# {}", text));
        self
    }

    /// Emit `text` verbatim at the current indent. Empty lines carry no indent.
    pub fn write_raw_line(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.push(text.to_string());
        }
        self
    }

    /// All emitted lines, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Forget everything written so far.
    pub fn reset(&mut self) -> &mut Self {
        self.indent = 0;
        self.lines.clear();
        self
    }

    pub(crate) fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    fn push(&mut self, text: String) {
        let mut line = "\t".repeat(self.indent);
        line.push_str(&text);
        self.lines.push(line);
    }
}
