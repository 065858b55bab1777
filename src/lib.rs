//! arbor-vdom — positional virtual-tree reconciliation
//!
//! Render an immutable virtual tree into a live tree once, then keep the
//! live tree current by diffing each new virtual tree against the previous
//! one and applying the resulting patch in place. Only structurally
//! diverging subtrees (a changed tag, a changed text) are discarded and
//! rebuilt; everything else is mutated where it stands.
//!
//! ## Modules
//! - `node`: virtual node model — [`VNode`], [`Element`], the tree builder
//! - `live`: the mutable rendered tree — [`LiveNode`], [`HostContainer`]
//! - `render`: render-from-scratch, [`render`]
//! - `diff`: the reconciler, [`diff`] / [`diff_with_stats`]
//! - `patch`: patch values and their interpreter, [`Patch`]
//! - `runtime`: the driving loop, [`Runtime`]
//! - `html`: diagnostic serialization
//!
//! ## Usage
//!
//! ```
//! use arbor_vdom::{Element, Runtime, VNode};
//!
//! fn view(count: usize) -> VNode {
//!     Element::new("div")
//!         .attr("id", "app")
//!         .text(count.to_string())
//!         .into()
//! }
//!
//! let mut rt = Runtime::mount(view(0)).unwrap();
//! rt.update(view(1)).unwrap();
//! assert_eq!(
//!     rt.root().unwrap().as_element().unwrap().children[0].as_text(),
//!     Some("1"),
//! );
//! ```
//!
//! Children are matched strictly by position — there are no keys and no
//! move detection. Reordering two large siblings replaces both.

/// Attribute mapping
pub mod attr;

/// Virtual node model
pub mod node;

/// Live node model and host container
pub mod live;

/// Render-from-scratch
pub mod render;

/// The reconciler
pub mod diff;

/// Patch values and interpreter
pub mod patch;

/// Driving loop
pub mod runtime;

/// Diagnostic HTML serialization
pub mod html;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use attr::{attrs_eq, Attrs, AttrsExt};
pub use diff::{diff, diff_attrs, diff_children, diff_with_stats, DiffStats};
pub use error::{VdomError, VdomResult};
pub use html::to_html;
pub use live::{HostContainer, LiveElement, LiveNode, LiveText};
pub use node::{create_node, Children, Element, VNode};
pub use patch::{AttrPatch, ChildPatch, Patch};
pub use render::render;
pub use runtime::Runtime;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // The whole model is plain owned data; thread-safety falls out for free
    // even though reconciliation itself is single-threaded.
    assert_impl_all!(VNode: Send, Sync, Clone);
    assert_impl_all!(LiveNode: Send, Sync, Clone);
    assert_impl_all!(Patch: Send, Sync);

    #[test]
    fn diff_then_apply_matches_fresh_render() {
        let old: VNode = Element::new("section")
            .attr("class", "a")
            .child(Element::new("p").text("one"))
            .child(Element::new("p").text("two"))
            .into();
        let new: VNode = Element::new("section")
            .attr("class", "b")
            .child(Element::new("p").text("one"))
            .child(Element::new("h2").text("two"))
            .text("tail")
            .into();

        let live = render(&old);
        let patched = diff(&old, &new).apply(live).unwrap().unwrap();
        assert_eq!(to_html(&patched), to_html(&render(&new)));
    }
}
