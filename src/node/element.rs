//! Element type — the structured half of the virtual node union.

use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{Children, VNode};

/// A virtual element: tag name, attribute mapping, ordered children.
///
/// Position is the only identity channel for children — there are no keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attribute mapping; keys unique.
    pub attrs: Attrs,
    /// Ordered child nodes. Order is semantically significant.
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────

    /// Set an attribute (chainable).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Append a child node (chainable). Accepts elements and bare strings.
    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child (chainable).
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(content.into())
    }

    /// Append every node of an iterator as a child (chainable).
    pub fn children(mut self, nodes: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────

    /// Get attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Other helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Check if element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children, all node kinds.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Text content of this element, concatenated from all text descendants.
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                VNode::Text(t) => buf.push_str(t),
                VNode::Element(e) => e.collect_text(buf),
            }
        }
    }
}
