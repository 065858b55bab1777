//! The reconciler: diff two virtual trees into a [`Patch`].
//!
//! This is a pure algorithm module — diffing never touches a live tree and
//! performs no I/O. Three cooperating passes:
//!
//! 1. **Node identity**: a text change or a tag change replaces the node
//!    wholesale; matching element tags are updated in place.
//! 2. **Attributes**: the whole new mapping is re-set, stale keys removed.
//! 3. **Children**: strictly positional, index by index. No keys, no move
//!    detection — position is the only identity channel.
//!
//! # Complexity
//!
//! Time and space are O(n) in the size of the two trees; every node pair is
//! visited exactly once and replacement subtrees are rendered at diff time.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::node::{Element, VNode};
use crate::patch::{AttrPatch, ChildPatch, Patch};
use crate::render::render;

// =============================================================================
// DiffStats
// =============================================================================

/// Counters describing one diff pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Element pairs compared with matching tags.
    pub elements_updated: usize,
    /// Node pairs left untouched (equal text).
    pub nodes_kept: usize,
    /// Nodes replaced wholesale (text or tag divergence).
    pub nodes_replaced: usize,
    /// Old positions with no new counterpart.
    pub nodes_removed: usize,
    /// New children past the old count, rendered fresh.
    pub nodes_appended: usize,
    /// Attribute writes scheduled (unconditional re-sets).
    pub attrs_set: usize,
    /// Attribute removals scheduled.
    pub attrs_removed: usize,
}

// =============================================================================
// Public API
// =============================================================================

/// Diff an old/new virtual-node pair into a patch for the live node that
/// was rendered from `old`.
pub fn diff(old: &VNode, new: &VNode) -> Patch {
    let mut stats = DiffStats::default();
    diff_nodes(old, Some(new), &mut stats)
}

/// Like [`diff`], also returning counters for observability.
pub fn diff_with_stats(old: &VNode, new: &VNode) -> (Patch, DiffStats) {
    let mut stats = DiffStats::default();
    let patch = diff_nodes(old, Some(new), &mut stats);
    (patch, stats)
}

/// Reconcile two attribute mappings into an in-place patch.
///
/// Every key of `new` is re-set unconditionally — including unchanged
/// values — and every key of `old` missing from `new` is removed. After
/// application the live attribute set equals `new` exactly.
pub fn diff_attrs(old: &[(String, String)], new: &[(String, String)]) -> AttrPatch {
    let new_keys: FxHashSet<&str> = new.iter().map(|(k, _)| k.as_str()).collect();
    AttrPatch {
        set: new.to_vec(),
        remove: old
            .iter()
            .filter(|(k, _)| !new_keys.contains(k.as_str()))
            .map(|(k, _)| k.clone())
            .collect(),
    }
}

/// Reconcile two child lists positionally into an in-place patch.
///
/// One slot patch is computed for every old index; indices past the new
/// length diff against an absent node and become removals. New children
/// past the old count are rendered fresh for appending.
pub fn diff_children(old: &[VNode], new: &[VNode]) -> ChildPatch {
    let mut stats = DiffStats::default();
    diff_children_inner(old, new, &mut stats)
}

// =============================================================================
// Internals
// =============================================================================

fn diff_nodes(old: &VNode, new: Option<&VNode>, stats: &mut DiffStats) -> Patch {
    // Decision order, first match wins.

    // 1. Removal: the position has no new counterpart.
    let Some(new) = new else {
        stats.nodes_removed += 1;
        return Patch::Remove;
    };

    // 2. Text on either side: equal texts short-circuit, anything else is a
    //    wholesale replacement.
    if old.is_text() || new.is_text() {
        if old.as_text().is_some() && old.as_text() == new.as_text() {
            stats.nodes_kept += 1;
            return Patch::Keep;
        }
        trace!(from = old.kind(), to = new.kind(), "replacing node");
        stats.nodes_replaced += 1;
        return Patch::Replace(render(new));
    }

    // Both sides are elements past this point.
    let (old_elem, new_elem) = match (old, new) {
        (VNode::Element(o), VNode::Element(n)) => (o, n),
        _ => unreachable!("non-text nodes are elements"),
    };

    // 3. Tag change: no attempt to reuse descendants, replace the subtree.
    if old_elem.tag != new_elem.tag {
        trace!(from = %old_elem.tag, to = %new_elem.tag, "tag changed, replacing subtree");
        stats.nodes_replaced += 1;
        return Patch::Replace(render(new));
    }

    // 4. Same tag: update in place.
    diff_elements(old_elem, new_elem, stats)
}

fn diff_elements(old: &Element, new: &Element, stats: &mut DiffStats) -> Patch {
    stats.elements_updated += 1;

    let attrs = diff_attrs(&old.attrs, &new.attrs);
    stats.attrs_set += attrs.set.len();
    stats.attrs_removed += attrs.remove.len();

    let children = diff_children_inner(&old.children, &new.children, stats);

    Patch::Update { attrs, children }
}

fn diff_children_inner(old: &[VNode], new: &[VNode], stats: &mut DiffStats) -> ChildPatch {
    let slots = old
        .iter()
        .enumerate()
        .map(|(i, old_child)| diff_nodes(old_child, new.get(i), stats))
        .collect();

    let append: Vec<_> = new.get(old.len()..).unwrap_or_default().iter().map(render).collect();
    stats.nodes_appended += append.len();

    ChildPatch { slots, append }
}
