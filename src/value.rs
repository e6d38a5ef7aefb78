//! Comparison values and the XPath 1.0 string-literal escaping rule.

use itertools::Itertools;

/// A value usable on the right-hand side of a predicate comparison.
///
/// Numbers render as their plain decimal form, unquoted. Text renders as an
/// XPath string literal, with embedded apostrophes handled by
/// [`escape_text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Renders the value as it must appear inside a predicate expression.
    pub(crate) fn to_literal(&self) -> String {
        match self {
            Value::Text(s) => escape_text(s),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

/// Quotes a string for use as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escape sequence for the quote character that delimits a
/// literal. Strings without apostrophes are wrapped in single quotes.
/// Strings with apostrophes are rebuilt with `concat()`: the input is split
/// on every apostrophe, each piece is single-quoted, and the pieces are
/// joined with a double-quoted apostrophe. A leading or trailing apostrophe
/// produces an empty `''` piece, which is kept so the `concat()` call stays
/// well-formed.
pub(crate) fn escape_text(input: &str) -> String {
    if !input.contains('\'') {
        return format!("'{input}'");
    }
    let pieces = input
        .split('\'')
        .map(|piece| format!("'{piece}'"))
        .join(",\"'\",");
    format!("concat({pieces})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_single_quoted() {
        assert_eq!(escape_text("nginx"), "'nginx'");
        assert_eq!(escape_text(""), "''");
    }

    #[test]
    fn test_embedded_apostrophe_uses_concat() {
        assert_eq!(
            escape_text("it's a test"),
            "concat('it',\"'\",'s a test')"
        );
    }

    #[test]
    fn test_leading_and_trailing_apostrophes_keep_empty_pieces() {
        assert_eq!(escape_text("'start"), "concat('',\"'\",'start')");
        assert_eq!(escape_text("end'"), "concat('end',\"'\",'')");
        assert_eq!(
            escape_text("a''b"),
            "concat('a',\"'\",'',\"'\",'b')"
        );
    }

    #[test]
    fn test_only_apostrophe() {
        assert_eq!(escape_text("'"), "concat('',\"'\",'')");
    }

    #[test]
    fn test_numeric_literals_are_unquoted() {
        assert_eq!(Value::from(20).to_literal(), "20");
        assert_eq!(Value::from(-3i64).to_literal(), "-3");
        assert_eq!(Value::from(2.5).to_literal(), "2.5");
    }

    #[test]
    fn test_text_literal_goes_through_escaping() {
        assert_eq!(Value::from("8.884.0").to_literal(), "'8.884.0'");
        assert_eq!(
            Value::from(String::from("he's")).to_literal(),
            "concat('he',\"'\",'s')"
        );
    }
}
