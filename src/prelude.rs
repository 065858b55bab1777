//! Prelude module for common imports.
//!
//! ```ignore
//! use arbor_vdom::prelude::*;
//! ```

// Attributes
pub use crate::attr::{attrs_eq, Attrs, AttrsExt};

// Virtual nodes
pub use crate::node::{create_node, Children, Element, VNode};

// Live nodes
pub use crate::live::{HostContainer, LiveElement, LiveNode, LiveText};

// Rendering
pub use crate::render::render;

// Reconciliation
pub use crate::diff::{diff, diff_attrs, diff_children, diff_with_stats, DiffStats};
pub use crate::patch::{AttrPatch, ChildPatch, Patch};

// Driving loop
pub use crate::runtime::Runtime;

// Diagnostics
pub use crate::html::to_html;

// Errors
pub use crate::error::{VdomError, VdomResult};
