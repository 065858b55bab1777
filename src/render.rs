//! Render-from-scratch: turn a virtual node into a brand-new live node.
//!
//! Pure construction with no diffing and no prior state. The reconciler
//! calls back into this module whenever a subtree must be created fresh —
//! appended children past the old count, full node replacement, text
//! replacement.

use crate::live::{LiveElement, LiveNode};
use crate::node::{Element, VNode};

/// Render a virtual node into a freshly created live node.
///
/// Never mutates its input; the virtual tree stays available for the next
/// diff.
pub fn render(vnode: &VNode) -> LiveNode {
    match vnode {
        VNode::Text(content) => LiveNode::text(content.clone()),
        VNode::Element(elem) => LiveNode::Element(Box::new(render_element(elem))),
    }
}

fn render_element(elem: &Element) -> LiveElement {
    let mut live = LiveElement::new(elem.tag.clone());
    for (name, value) in &elem.attrs {
        live.set_attr(name.clone(), value.clone());
    }
    for child in &elem.children {
        live.append_child(render(child));
    }
    live
}
