//! Live node model — the mutable, persistent counterpart of a virtual tree.
//!
//! A live tree is created once by the renderer and then updated in place by
//! patches across ticks. Ownership is strictly tree-shaped: a parent owns
//! its children, and replacement or removal happens by the patch
//! interpreter returning a new (or absent) value for the slot rather than
//! through parent back-pointers.

use crate::attr::{Attrs, AttrsExt};
use crate::error::{VdomError, VdomResult};

/// A node in the live tree: a rendered element or a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveNode {
    Element(Box<LiveElement>),
    Text(LiveText),
}

/// A rendered element: tag, live attribute set, ordered live children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveElement {
    /// Tag name, fixed for the lifetime of the node. A tag change in the
    /// virtual tree replaces the whole node instead.
    pub tag: String,
    /// Live attribute set; keys unique.
    pub attrs: Attrs,
    /// Ordered live children.
    pub children: Vec<LiveNode>,
}

/// A rendered text node holding its string payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveText {
    /// Text payload.
    pub content: String,
}

impl LiveNode {
    /// Create a live text node.
    pub fn text(content: impl Into<String>) -> Self {
        LiveNode::Text(LiveText {
            content: content.into(),
        })
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&LiveElement> {
        match self {
            LiveNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut LiveElement> {
        match self {
            LiveNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Text payload, if this is a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LiveNode::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    /// Node kind as a static string, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            LiveNode::Element(_) => "element",
            LiveNode::Text(_) => "text",
        }
    }
}

impl LiveElement {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a named attribute, updating in place if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }

    /// Remove a named attribute, returning its old value if present.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove_attr(name)
    }

    /// Get attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Append a live child.
    pub fn append_child(&mut self, child: LiveNode) {
        self.children.push(child);
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

// =============================================================================
// HostContainer
// =============================================================================

/// The host slot that holds the rendered application root.
///
/// A container accepts exactly one live node as its rendered content; the
/// driving loop swaps that node out whenever a root patch produces a
/// replacement or a removal.
#[derive(Debug, Default)]
pub struct HostContainer {
    content: Option<LiveNode>,
}

impl HostContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly rendered live node as the container's content.
    pub fn mount(&mut self, node: LiveNode) -> VdomResult<()> {
        if self.content.is_some() {
            return Err(VdomError::AlreadyMounted);
        }
        self.content = Some(node);
        Ok(())
    }

    /// Take the mounted content out, leaving the container empty.
    pub fn unmount(&mut self) -> Option<LiveNode> {
        self.content.take()
    }

    /// Borrow the mounted content.
    pub fn content(&self) -> Option<&LiveNode> {
        self.content.as_ref()
    }

    /// Put content back after a patch cycle. `None` leaves the slot empty.
    pub(crate) fn restore(&mut self, node: Option<LiveNode>) {
        self.content = node;
    }

    /// Check whether the container holds content.
    pub fn is_mounted(&self) -> bool {
        self.content.is_some()
    }
}
