//! Helper functions for template rendering

use crate::value::Value;

/// Turns a resolved value into output text
///
/// `token` is the placeholder's binding name (`${name}`) or member path
/// (`${root.a.b}` passes `a.b`). Override to customise output per token or
/// per value; any `Fn(&str, &Value, &str) -> String` closure works.
pub trait ValueFormatter: Send + Sync {
    fn format_value(&self, token: &str, value: &Value, null_string: &str) -> String;
}

/// Default conversion: `Display` text, the null string for `Value::Null`
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter;

impl ValueFormatter for DisplayFormatter {
    fn format_value(&self, _token: &str, value: &Value, null_string: &str) -> String {
        stringify_value(value, null_string)
    }
}

impl<F> ValueFormatter for F
where
    F: Fn(&str, &Value, &str) -> String + Send + Sync,
{
    fn format_value(&self, token: &str, value: &Value, null_string: &str) -> String {
        self(token, value, null_string)
    }
}

/// Stringify a value for template output
pub(crate) fn stringify_value(value: &Value, null_string: &str) -> String {
    match value {
        Value::Null => null_string.to_string(),
        other => other.to_string(),
    }
}

/// Upper-case the first character: `width` → `Width`
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
