//! Axis and node-test vocabulary for rendering location-path steps.

use crate::filter::Filter;

/// The axis of movement from the context node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Descendant,
    DescendantOrSelf,
    Child,
    Ancestor,
    AncestorOrSelf,
    Following,
    FollowingSibling,
    Preceding,
    PrecedingSibling,
}

impl Axis {
    /// The literal that introduces a step along this axis. `descendant` and
    /// `child` use the abbreviated syntax (`//`, `/`); the rest use the
    /// explicit `axis::` form.
    fn prefix(self) -> &'static str {
        match self {
            Axis::Descendant => "//",
            Axis::DescendantOrSelf => "/descendant-or-self::",
            Axis::Child => "/",
            Axis::Ancestor => "/ancestor::",
            Axis::AncestorOrSelf => "/ancestor-or-self::",
            Axis::Following => "/following::",
            Axis::FollowingSibling => "/following-sibling::",
            Axis::Preceding => "/preceding::",
            Axis::PrecedingSibling => "/preceding-sibling::",
        }
    }
}

/// A test to apply to nodes on a given axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeTest<'a> {
    /// Wildcard test (`*`).
    Any,
    /// A name test (e.g. `li`).
    Tag(&'a str),
    /// A namespace-agnostic name test via `local-name()`, so SVG elements
    /// match regardless of the document's namespace handling.
    SvgTag(&'a str),
}

/// Renders one complete step token: axis prefix, node test and, when the
/// filter is present and non-empty, its bracketed predicate.
pub(crate) fn render_step(axis: Axis, test: NodeTest<'_>, filter: Option<&Filter>) -> String {
    let mut token = String::from(axis.prefix());
    match test {
        NodeTest::Any => token.push('*'),
        NodeTest::Tag(tag) => token.push_str(tag),
        NodeTest::SvgTag(tag) => token.push_str(&format!("*[local-name()='{tag}']")),
    }
    if let Some(filter) = filter
        && !filter.is_empty()
    {
        token.push_str(&format!("[{filter}]"));
    }
    token
}
