//! Pretty-printing JSON writer
//!
//! Output is deterministic: the same tree always serializes to the same
//! bytes. Non-ASCII characters are emitted literally, never as `\u` escapes;
//! only the characters JSON requires escaping are escaped.

use crate::value::Value;

/// Configuration for the JSON writer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// JSON writer with configurable indentation
#[derive(Clone, Copy, Debug, Default)]
pub struct Writer {
    config: Config,
}

impl Writer {
    /// Create a writer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a custom configuration
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Serialize a value to JSON text
    pub fn write(&self, value: &Value) -> String {
        let mut output = String::new();
        self.write_value(value, 0, &mut output);
        output
    }

    fn write_value(&self, value: &Value, depth: usize, output: &mut String) {
        match value {
            Value::Null => output.push_str("null"),
            Value::String(s) => self.write_string(s, output),
            Value::Array(arr) => {
                if arr.is_empty() {
                    output.push_str("[]");
                    return;
                }
                output.push('[');
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        output.push(',');
                    }
                    output.push('\n');
                    self.write_indent(depth + 1, output);
                    self.write_value(item, depth + 1, output);
                }
                output.push('\n');
                self.write_indent(depth, output);
                output.push(']');
            }
            Value::Object(obj) => {
                if obj.is_empty() {
                    output.push_str("{}");
                    return;
                }
                output.push('{');
                for (i, (key, item)) in obj.iter().enumerate() {
                    if i > 0 {
                        output.push(',');
                    }
                    output.push('\n');
                    self.write_indent(depth + 1, output);
                    self.write_string(key, output);
                    output.push_str(": ");
                    self.write_value(item, depth + 1, output);
                }
                output.push('\n');
                self.write_indent(depth, output);
                output.push('}');
            }
        }
    }

    fn write_indent(&self, depth: usize, output: &mut String) {
        for _ in 0..depth.saturating_mul(self.config.indent) {
            output.push(' ');
        }
    }

    fn write_string(&self, s: &str, output: &mut String) {
        output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\x08' => output.push_str("\\b"),
                '\x0c' => output.push_str("\\f"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                ch if (ch as u32) < 0x20 => {
                    output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => output.push(ch),
            }
        }
        output.push('"');
    }
}
