//! Virtual node model.
//!
//! A virtual tree is an immutable description of desired structure, rebuilt
//! from scratch on every update tick and discarded once diffed. A node is
//! either a structured [`Element`] or a bare string — text carries no
//! wrapper type, it stands directly in a child list.
//!
//! Virtual nodes are only ever read by the renderer and the reconciler;
//! neither mutates its input.

mod element;

pub use element::Element;

use smallvec::SmallVec;

use crate::attr::Attrs;

/// A node in a virtual tree: a structured element or a bare text string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    Element(Box<Element>),
    Text(String),
}

/// Children collection. Most elements have few children, so the first eight
/// live inline.
pub type Children = SmallVec<[VNode; 8]>;

impl VNode {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, VNode::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Node kind as a static string, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            VNode::Element(_) => "element",
            VNode::Text(_) => "text",
        }
    }
}

impl From<Element> for VNode {
    fn from(elem: Element) -> Self {
        VNode::Element(Box::new(elem))
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        VNode::Text(text)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        VNode::Text(text.to_string())
    }
}

/// Build an element node from its parts.
///
/// This is the tree-builder entry point: callers construct whole virtual
/// trees through it (or through the [`Element`] builder methods) and hand
/// them to the reconciler, which never builds trees itself.
pub fn create_node(tag: impl Into<String>, attrs: Attrs, children: Children) -> VNode {
    VNode::Element(Box::new(Element {
        tag: tag.into(),
        attrs,
        children,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn node_accessors() {
        let elem: VNode = Element::new("div").into();
        assert!(elem.is_element());
        assert!(!elem.is_text());
        assert_eq!(elem.as_element().unwrap().tag, "div");
        assert_eq!(elem.as_text(), None);
        assert_eq!(elem.kind(), "element");

        let text: VNode = "hello".into();
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.kind(), "text");
    }

    #[test]
    fn create_node_assembles_parts() {
        let node = create_node(
            "div",
            vec![("id".into(), "app".into())],
            smallvec![VNode::from("3"), Element::new("img").into()],
        );

        let elem = node.as_element().unwrap();
        assert_eq!(elem.tag, "div");
        assert_eq!(elem.children.len(), 2);
        assert!(elem.children[0].is_text());
        assert!(elem.children[1].is_element());
    }
}
