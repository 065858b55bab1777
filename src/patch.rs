//! Patch values and their interpreter.
//!
//! A patch is a deferred, pure transformation computed by the diff and
//! applied separately: a value taking an existing live node to an updated
//! live node, a replacement, or an absence. Patches over a parent aggregate
//! the patches computed for its attributes and for each child position.
//!
//! The original closures-as-patches design is expressed here as an explicit
//! tagged type plus [`Patch::apply`]; `Replace` carries its replacement
//! pre-rendered, so application is a pure structural splice with no
//! construction work left to do.

use std::mem;

use crate::attr::Attrs;
use crate::error::{VdomError, VdomResult};
use crate::live::{LiveElement, LiveNode};

/// A deferred transformation of one live node slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Old and new agree; leave the live node untouched.
    Keep,
    /// The position is now empty; detach the live node.
    Remove,
    /// Structural divergence (tag or text change): discard the live node
    /// and put this freshly rendered subtree in its slot.
    Replace(LiveNode),
    /// Same tag: reconcile attributes and children in place, preserving the
    /// node's identity.
    Update {
        attrs: AttrPatch,
        children: ChildPatch,
    },
}

/// In-place attribute reconciliation. Never replaces the node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrPatch {
    /// The entire new mapping, re-set unconditionally — a few redundant
    /// writes are traded for skipping value comparison.
    pub set: Attrs,
    /// Keys present before but absent from the new mapping.
    pub remove: Vec<String>,
}

/// In-place child-list reconciliation. The parent's identity never changes
/// from this step alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildPatch {
    /// One patch per old child position, paired with the live child at
    /// that index on application.
    pub slots: Vec<Patch>,
    /// Freshly rendered children for the new positions past the old count.
    pub append: Vec<LiveNode>,
}

impl Patch {
    /// Apply this patch to a live node.
    ///
    /// Returns `Ok(Some(node))` with the surviving (possibly replaced)
    /// node, or `Ok(None)` as the absence marker when the slot is now
    /// empty. `Err` marks a contract violation — the patch was built for a
    /// different tree shape. Application is not transactional: an error can
    /// leave descendants partially updated.
    pub fn apply(self, node: LiveNode) -> VdomResult<Option<LiveNode>> {
        match self {
            Patch::Keep => Ok(Some(node)),
            Patch::Remove => Ok(None),
            Patch::Replace(fresh) => Ok(Some(fresh)),
            Patch::Update { attrs, children } => {
                let mut node = node;
                let Some(elem) = node.as_element_mut() else {
                    return Err(VdomError::KindMismatch {
                        expected: "element",
                        found: node.kind(),
                    });
                };
                attrs.apply(elem);
                children.apply(elem)?;
                Ok(Some(node))
            }
        }
    }

    /// True when applying this patch performs no writes at all. Note that
    /// an identity diff of an element with attributes is *not* a no-op by
    /// this measure: the new mapping is always re-set unconditionally.
    pub fn is_noop(&self) -> bool {
        match self {
            Patch::Keep => true,
            Patch::Remove | Patch::Replace(_) => false,
            Patch::Update { attrs, children } => {
                attrs.set.is_empty()
                    && attrs.remove.is_empty()
                    && children.append.is_empty()
                    && children.slots.iter().all(Patch::is_noop)
            }
        }
    }
}

impl AttrPatch {
    /// Apply against a live element. Net effect: the live attribute set
    /// equals the new mapping exactly. Sets and removals never share a key,
    /// so their relative order is immaterial.
    pub fn apply(self, elem: &mut LiveElement) {
        let AttrPatch { set, remove } = self;
        for (name, value) in set {
            elem.set_attr(name, value);
        }
        for name in &remove {
            elem.remove_attr(name);
        }
    }
}

impl ChildPatch {
    /// Apply against a live parent, pairing each slot patch with the live
    /// child at the same index.
    ///
    /// Pairing is zip-by-shorter: surplus patches with no live child are
    /// dropped unapplied, and surplus live children with no patch are kept
    /// untouched. Under the diff contract both lists have the old child
    /// count, so neither surplus arises.
    pub fn apply(self, parent: &mut LiveElement) -> VdomResult<()> {
        let existing = mem::take(&mut parent.children);
        let mut next = Vec::with_capacity(self.slots.len() + self.append.len());
        let mut slots = self.slots.into_iter();

        for child in existing {
            match slots.next() {
                Some(patch) => {
                    if let Some(updated) = patch.apply(child)? {
                        next.push(updated);
                    }
                }
                None => next.push(child),
            }
        }

        next.extend(self.append);
        parent.children = next;
        Ok(())
    }
}
