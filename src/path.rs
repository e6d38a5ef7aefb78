//! Chainable builder for XPath location paths.

use crate::filter::Filter;
use crate::step::{Axis, NodeTest, render_step};
use std::fmt;
use std::sync::LazyLock;

/// A pre-instantiated default builder, for the no-construction entry style:
/// `XH.get_element_by_tag("h1", None)`. Every chaining method takes `&self`
/// and returns a fresh [`XPathHelper`], so the shared static is never
/// modified.
pub static XH: LazyLock<XPathHelper> = LazyLock::new(XPathHelper::new);

/// An XPath location path under construction.
///
/// The builder accumulates pre-rendered step tokens; rendering is their
/// concatenation, so any intermediate builder is a complete, valid XPath
/// expression. Each navigation method returns a new instance, which makes a
/// partial path reusable as the base of several longer ones. Only
/// [`XPathHelper::clear`] mutates in place.
///
/// A fresh builder stands for the context node and renders as `.`; the
/// first appended step supersedes that placeholder, so
/// `XPathHelper::new().get_element_by_tag("h1", None)` renders as `//h1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XPathHelper {
    tokens: Vec<String>,
}

impl XPathHelper {
    /// Creates a builder positioned at the context node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the path in place, back to the bare context node.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Selects the parent of the current node.
    pub fn get_parent(&self) -> Self {
        self.with_token("/..".to_string())
    }

    /// Appends a raw XPath fragment verbatim.
    ///
    /// Escape hatch for constructs the builder does not model. The fragment
    /// is not validated; the caller is responsible for its well-formedness.
    pub fn get_element_by_xpath(&self, xpath: &str) -> Self {
        self.with_token(xpath.to_string())
    }

    // --- Descendant axis: everything below the node, any depth ---

    /// Selects the nodes below the current node, no matter the depth.
    pub fn get_descendant<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::Descendant, NodeTest::Any, filter)
    }

    /// Selects the nodes with tag `tag` below the current node, no matter
    /// the depth.
    pub fn get_descendant_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Descendant, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG nodes with tag `svg_tag` below the current node, no
    /// matter the depth.
    pub fn get_descendant_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Descendant, NodeTest::SvgTag(svg_tag), filter)
    }

    /// Synonym of [`XPathHelper::get_descendant`].
    pub fn get_element<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.get_descendant(filter)
    }

    /// Synonym of [`XPathHelper::get_descendant_by_tag`].
    pub fn get_element_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.get_descendant_by_tag(tag, filter)
    }

    /// Synonym of [`XPathHelper::get_descendant_by_svg_tag`].
    pub fn get_element_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.get_descendant_by_svg_tag(svg_tag, filter)
    }

    // --- Descendant-or-self axis ---

    /// Selects the nodes below the current node, any depth, including the
    /// current node itself.
    pub fn get_descendant_or_self<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::DescendantOrSelf, NodeTest::Any, filter)
    }

    /// Selects the nodes with tag `tag` below the current node, any depth,
    /// including the current node itself.
    pub fn get_descendant_or_self_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::DescendantOrSelf, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG nodes with tag `svg_tag` below the current node, any
    /// depth, including the current node itself.
    pub fn get_descendant_or_self_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::DescendantOrSelf, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Child axis: immediately below the node ---

    /// Selects the nodes immediately below the current node.
    pub fn get_child<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::Child, NodeTest::Any, filter)
    }

    /// Selects the nodes with tag `tag` immediately below the current node.
    pub fn get_child_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Child, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG nodes with tag `svg_tag` immediately below the
    /// current node.
    pub fn get_child_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Child, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Ancestor axis: parent, parent's parent, and so on ---

    /// Selects the ancestors of the current node.
    pub fn get_ancestor<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::Ancestor, NodeTest::Any, filter)
    }

    /// Selects the ancestors of the current node with tag `tag`.
    pub fn get_ancestor_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Ancestor, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG ancestors of the current node with tag `svg_tag`.
    pub fn get_ancestor_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Ancestor, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Ancestor-or-self axis ---

    /// Selects the ancestors of the current node, including the node
    /// itself.
    pub fn get_ancestor_or_self<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::AncestorOrSelf, NodeTest::Any, filter)
    }

    /// Selects the ancestors of the current node with tag `tag`, including
    /// the node itself.
    pub fn get_ancestor_or_self_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::AncestorOrSelf, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG ancestors of the current node with tag `svg_tag`,
    /// including the node itself.
    pub fn get_ancestor_or_self_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::AncestorOrSelf, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Following axis: after the node in document order, any depth ---

    /// Selects the nodes located after the current node in document order,
    /// excluding its own descendants.
    pub fn get_following<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::Following, NodeTest::Any, filter)
    }

    /// Selects the nodes with tag `tag` located after the current node in
    /// document order.
    pub fn get_following_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Following, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG nodes with tag `svg_tag` located after the current
    /// node in document order.
    pub fn get_following_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Following, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Following-sibling axis: same level, after the node ---

    /// Selects the siblings located after the current node.
    pub fn get_following_sibling<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::FollowingSibling, NodeTest::Any, filter)
    }

    /// Selects the siblings with tag `tag` located after the current node.
    pub fn get_following_sibling_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::FollowingSibling, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG siblings with tag `svg_tag` located after the
    /// current node.
    pub fn get_following_sibling_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::FollowingSibling, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Preceding axis: before the node in document order, any depth ---

    /// Selects the nodes located before the current node in document order,
    /// excluding its own ancestors.
    pub fn get_preceding<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::Preceding, NodeTest::Any, filter)
    }

    /// Selects the nodes with tag `tag` located before the current node in
    /// document order.
    pub fn get_preceding_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Preceding, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG nodes with tag `svg_tag` located before the current
    /// node in document order.
    pub fn get_preceding_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::Preceding, NodeTest::SvgTag(svg_tag), filter)
    }

    // --- Preceding-sibling axis: same level, before the node ---

    /// Selects the siblings located before the current node.
    pub fn get_preceding_sibling<'a>(&self, filter: impl Into<Option<&'a Filter>>) -> Self {
        self.step(Axis::PrecedingSibling, NodeTest::Any, filter)
    }

    /// Selects the siblings with tag `tag` located before the current node.
    pub fn get_preceding_sibling_by_tag<'a>(
        &self,
        tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::PrecedingSibling, NodeTest::Tag(tag), filter)
    }

    /// Selects the SVG siblings with tag `svg_tag` located before the
    /// current node.
    pub fn get_preceding_sibling_by_svg_tag<'a>(
        &self,
        svg_tag: &str,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.step(Axis::PrecedingSibling, NodeTest::SvgTag(svg_tag), filter)
    }

    fn step<'a>(
        &self,
        axis: Axis,
        test: NodeTest<'_>,
        filter: impl Into<Option<&'a Filter>>,
    ) -> Self {
        self.with_token(render_step(axis, test, filter.into()))
    }

    fn with_token(&self, token: String) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        XPathHelper { tokens }
    }
}

impl fmt::Display for XPathHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str(".");
        }
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;

    #[test]
    fn test_fresh_builder_renders_context_node() {
        assert_eq!(XPathHelper::new().to_string(), ".");
    }

    #[test]
    fn test_descendant_by_tag() {
        let path = XPathHelper::new().get_element_by_tag("h1", None);
        assert_eq!(path.to_string(), "//h1");
    }

    #[test]
    fn test_descendant_with_positional_filter() {
        let path = XPathHelper::new().get_element_by_tag("li", &filter::get_first());
        assert_eq!(path.to_string(), "//li[1]");
    }

    #[test]
    fn test_element_synonyms_match_descendant_methods() {
        let f = filter::attribute_equals("class", "st");
        assert_eq!(
            XPathHelper::new().get_element(&f).to_string(),
            XPathHelper::new().get_descendant(&f).to_string()
        );
        assert_eq!(
            XPathHelper::new().get_element_by_tag("p", &f).to_string(),
            XPathHelper::new()
                .get_descendant_by_tag("p", &f)
                .to_string()
        );
        assert_eq!(
            XPathHelper::new()
                .get_element_by_svg_tag("g", &f)
                .to_string(),
            XPathHelper::new()
                .get_descendant_by_svg_tag("g", &f)
                .to_string()
        );
    }

    #[test]
    fn test_each_axis_family_token() {
        let base = XPathHelper::new().get_element_by_tag("a", None);
        assert_eq!(
            base.get_descendant_or_self_by_tag("b", None).to_string(),
            "//a/descendant-or-self::b"
        );
        assert_eq!(base.get_child_by_tag("b", None).to_string(), "//a/b");
        assert_eq!(
            base.get_ancestor_by_tag("ul", None).to_string(),
            "//a/ancestor::ul"
        );
        assert_eq!(
            base.get_ancestor_or_self_by_tag("ul", None).to_string(),
            "//a/ancestor-or-self::ul"
        );
        assert_eq!(
            base.get_following_by_tag("li", None).to_string(),
            "//a/following::li"
        );
        assert_eq!(
            base.get_following_sibling_by_tag("li", None).to_string(),
            "//a/following-sibling::li"
        );
        assert_eq!(
            base.get_preceding_by_tag("li", None).to_string(),
            "//a/preceding::li"
        );
        assert_eq!(
            base.get_preceding_sibling_by_tag("li", None).to_string(),
            "//a/preceding-sibling::li"
        );
    }

    #[test]
    fn test_generic_and_svg_node_tests() {
        let base = XPathHelper::new();
        assert_eq!(base.get_child(None).to_string(), "/*");
        assert_eq!(base.get_following(None).to_string(), "/following::*");
        assert_eq!(
            base.get_child_by_svg_tag("path", None).to_string(),
            "/*[local-name()='path']"
        );
        assert_eq!(
            base.get_element_by_svg_tag("g", None).to_string(),
            "//*[local-name()='g']"
        );
    }

    #[test]
    fn test_parent_and_raw_fragment() {
        let path = XPathHelper::new()
            .get_element_by_tag("a", None)
            .get_parent();
        assert_eq!(path.to_string(), "//a/..");

        let raw = XPathHelper::new()
            .get_element_by_tag("a", None)
            .get_element_by_xpath("/..");
        assert_eq!(raw.to_string(), "//a/..");
    }

    #[test]
    fn test_clear_resets_to_context_node() {
        let mut path = XPathHelper::new()
            .get_element_by_tag("a", None)
            .get_parent();
        path.clear();
        assert_eq!(path.to_string(), ".");
    }

    #[test]
    fn test_chaining_leaves_base_untouched() {
        let base = XPathHelper::new().get_element_by_tag("ul", None);
        let extended = base.get_element_by_tag("li", &filter::get_first());
        assert_eq!(base.to_string(), "//ul");
        assert_eq!(extended.to_string(), "//ul//li[1]");
    }

    #[test]
    fn test_shared_default_instance() {
        let path = XH.get_element_by_tag("h1", None);
        assert_eq!(path.to_string(), "//h1");
        // The static itself is never advanced by chaining.
        assert_eq!(XH.to_string(), ".");
    }

    #[test]
    fn test_render_is_idempotent() {
        let path = XPathHelper::new().get_element_by_tag("li", &filter::get(3));
        assert_eq!(path.to_string(), path.to_string());
    }
}
