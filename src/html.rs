//! Diagnostic HTML serialization of live trees.
//!
//! Not a wire format — the reconciler is a pure in-memory transformation.
//! This exists so tests and debug logs can assert on a whole live tree in
//! one readable string.

use crate::live::{LiveElement, LiveNode};

/// Serialize a live node to an HTML string.
pub fn to_html(node: &LiveNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &LiveNode, out: &mut String) {
    match node {
        LiveNode::Element(elem) => write_element(elem, out),
        LiveNode::Text(text) => out.push_str(&escape(&text.content)),
    }
}

fn write_element(elem: &LiveElement, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    for (name, value) in &elem.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');

    for child in &elem.children {
        write_node(child, out);
    }

    if !is_void_element(&elem.tag) {
        out.push_str("</");
        out.push_str(&elem.tag);
        out.push('>');
    }
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if tag is a void element (no closing tag).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, VNode};
    use crate::render::render;

    #[test]
    fn serializes_tree_with_void_elements() {
        let vnode: VNode = Element::new("div")
            .attr("id", "app")
            .child(Element::new("input"))
            .text("3")
            .child(Element::new("img").attr("src", "cat.gif"))
            .into();

        assert_eq!(
            to_html(&render(&vnode)),
            r#"<div id="app"><input>3<img src="cat.gif"></div>"#
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let vnode: VNode = Element::new("p").attr("title", "a\"b").text("1 < 2 & 3").into();
        assert_eq!(
            to_html(&render(&vnode)),
            r#"<p title="a&quot;b">1 &lt; 2 &amp; 3</p>"#
        );
    }
}
