//! Chainable, decomposable builder for XPath predicate expressions.
//!
//! Predicate content is created through the free functions in this module,
//! which always start from an empty filter (call style:
//! `filter::value_contains("nginx")`). An existing filter is extended only
//! through [`Filter::and`] and [`Filter::or`], which insert the operator
//! between the existing content and the new group.

use crate::value::Value;
use itertools::Itertools;
use std::fmt;

/// Matches any attribute name, e.g. `has_attribute(ANY_ATTRIBUTE)`.
pub const ANY_ATTRIBUTE: &str = "*";

/// The context-node test (`.`).
pub const ANY_CHILD_NODE: &str = ".";

/// An XPath predicate under construction.
///
/// A filter is an ordered list of pre-rendered tokens; rendering is their
/// concatenation. An empty filter renders as `""` and contributes no
/// predicate when handed to a path step. All combinators return a new
/// instance; only [`Filter::clear`] mutates in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    tokens: Vec<String>,
}

impl Filter {
    /// True while no predicate content has been produced.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Empties the filter in place, back to the state where it contributes
    /// no predicate.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Joins one or more filters onto this one with the `and` operator.
    ///
    /// Empty operands are elided and never produce a stray separator. The
    /// group is wrapped in a single parenthesis pair; when this filter
    /// already has content, the group is connected to it with a leading
    /// ` and `.
    pub fn and<I>(&self, operands: I) -> Filter
    where
        I: IntoIterator<Item = Filter>,
    {
        self.combine("and", operands)
    }

    /// Joins one or more filters onto this one with the `or` operator.
    ///
    /// Same elision and grouping rules as [`Filter::and`].
    pub fn or<I>(&self, operands: I) -> Filter
    where
        I: IntoIterator<Item = Filter>,
    {
        self.combine("or", operands)
    }

    fn combine<I>(&self, operator: &str, operands: I) -> Filter
    where
        I: IntoIterator<Item = Filter>,
    {
        let separator = format!(" {operator} ");
        let group = operands
            .into_iter()
            .filter(|operand| !operand.is_empty())
            .map(|operand| operand.to_string())
            .join(&separator);
        let mut token = String::new();
        if !self.tokens.is_empty() {
            token.push_str(&separator);
        }
        token.push('(');
        token.push_str(&group);
        token.push(')');
        self.with_token(token)
    }

    fn with_token(&self, token: String) -> Filter {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Filter { tokens }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

fn from_token(token: String) -> Filter {
    Filter {
        tokens: vec![token],
    }
}

/// Selects the nodes that carry the attribute `attribute`.
pub fn has_attribute(attribute: &str) -> Filter {
    from_token(format!("@{attribute}"))
}

/// Selects the nodes whose attribute `attribute` contains `value`.
pub fn attribute_contains(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!(
        "contains(@{attribute}, {})",
        value.into().to_literal()
    ))
}

/// Selects the nodes whose attribute `attribute` equals `value`.
pub fn attribute_equals(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}={}", value.into().to_literal()))
}

/// Selects the nodes whose attribute `attribute` does not equal `value`.
pub fn attribute_not_equals(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}!={}", value.into().to_literal()))
}

/// Selects the nodes whose attribute `attribute` is less than `value`.
pub fn attribute_less_than(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}<{}", value.into().to_literal()))
}

/// Selects the nodes whose attribute `attribute` is less than or equal to
/// `value`.
pub fn attribute_less_than_or_equal_to(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}<={}", value.into().to_literal()))
}

/// Selects the nodes whose attribute `attribute` is greater than `value`.
pub fn attribute_greater_than(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}>{}", value.into().to_literal()))
}

/// Selects the nodes whose attribute `attribute` is greater than or equal
/// to `value`.
pub fn attribute_greater_than_or_equal_to(attribute: &str, value: impl Into<Value>) -> Filter {
    from_token(format!("@{attribute}>={}", value.into().to_literal()))
}

/// Selects the nodes whose text content contains `value`.
pub fn value_contains(value: impl Into<Value>) -> Filter {
    from_token(format!("text()[contains(., {})]", value.into().to_literal()))
}

/// Selects the nodes whose text content equals `value`.
pub fn value_equals(value: impl Into<Value>) -> Filter {
    from_token(format!("text() = {}", value.into().to_literal()))
}

/// Selects the nodes whose text content does not equal `value`.
pub fn value_not_equals(value: impl Into<Value>) -> Filter {
    from_token(format!("text() !={}", value.into().to_literal()))
}

/// Selects the nodes whose text content is less than `value`.
pub fn value_less_than(value: impl Into<Value>) -> Filter {
    from_token(format!("text() <{}", value.into().to_literal()))
}

/// Selects the nodes whose text content is less than or equal to `value`.
pub fn value_less_than_or_equal_to(value: impl Into<Value>) -> Filter {
    from_token(format!("text() <={}", value.into().to_literal()))
}

/// Selects the nodes whose text content is greater than `value`.
pub fn value_greater_than(value: impl Into<Value>) -> Filter {
    from_token(format!("text() >{}", value.into().to_literal()))
}

/// Selects the nodes whose text content is greater than or equal to
/// `value`.
pub fn value_greater_than_or_equal_to(value: impl Into<Value>) -> Filter {
    from_token(format!("text() >={}", value.into().to_literal()))
}

/// Selects the node at position `index` (XPath positions are 1-based; the
/// index is passed through untouched and never bounds-checked, so an
/// out-of-range position simply matches nothing at evaluation time).
pub fn get(index: usize) -> Filter {
    from_token(index.to_string())
}

/// Selects the node positioned first in its parent's children list.
pub fn get_first() -> Filter {
    from_token("1".to_string())
}

/// Selects the node positioned last in its parent's children list.
pub fn get_last() -> Filter {
    from_token("last()".to_string())
}

/// Reverses `inner`: matches when `inner` does not.
///
/// An empty `inner` still emits `not(  )`, a degenerate predicate that
/// matches nothing at evaluation time.
pub fn not(inner: &Filter) -> Filter {
    from_token(format!("not( {inner} )"))
}

/// Joins one or more filters with the `and` operator, starting from an
/// empty filter.
pub fn and<I>(operands: I) -> Filter
where
    I: IntoIterator<Item = Filter>,
{
    Filter::default().and(operands)
}

/// Joins one or more filters with the `or` operator, starting from an empty
/// filter.
pub fn or<I>(operands: I) -> Filter
where
    I: IntoIterator<Item = Filter>,
{
    Filter::default().or(operands)
}
