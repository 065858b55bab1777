//! The driving loop: owns the current virtual tree and the live root.
//!
//! Each update tick the caller builds a new virtual tree and hands it to
//! [`Runtime::update`], which diffs it against the retained tree, applies
//! the resulting patch to the live root, and swaps the root reference if
//! the patch produced a replacement (or clears it on removal). When the
//! tick fires — a timer, an input event — is the caller's business; an
//! update runs synchronously to completion before the next may begin.

use tracing::debug;

use crate::diff::{diff_with_stats, DiffStats};
use crate::error::{VdomError, VdomResult};
use crate::live::{HostContainer, LiveNode};
use crate::node::VNode;
use crate::render::render;

/// Holds the currently rendered virtual tree and its mounted live root.
#[derive(Debug)]
pub struct Runtime {
    vtree: VNode,
    host: HostContainer,
}

impl Runtime {
    /// Render the initial virtual tree and mount it into a fresh host
    /// container.
    pub fn mount(initial: VNode) -> VdomResult<Self> {
        let mut host = HostContainer::new();
        host.mount(render(&initial))?;
        Ok(Self {
            vtree: initial,
            host,
        })
    }

    /// One update tick: diff the retained tree against `next`, apply the
    /// patch to the live root, and retain `next` as current.
    ///
    /// Returns the diff counters for the tick. Fails with
    /// [`VdomError::NotMounted`] if a previous patch removed the root.
    pub fn update(&mut self, next: VNode) -> VdomResult<DiffStats> {
        let root = self.host.unmount().ok_or(VdomError::NotMounted)?;

        let (patch, stats) = diff_with_stats(&self.vtree, &next);
        debug!(?stats, noop = patch.is_noop(), "update tick");

        let applied = patch.apply(root);
        // Retain even if application failed: the new tree describes what
        // the caller asked for, and the live tree is not transactional.
        self.vtree = next;
        self.host.restore(applied?);
        Ok(stats)
    }

    /// The currently rendered virtual tree.
    pub fn vtree(&self) -> &VNode {
        &self.vtree
    }

    /// The mounted live root, if present.
    pub fn root(&self) -> Option<&LiveNode> {
        self.host.content()
    }

    /// Tear down, returning the live root to the caller.
    pub fn unmount(mut self) -> Option<LiveNode> {
        self.host.unmount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attrs_eq;
    use crate::html::to_html;
    use crate::node::{create_node, Children, Element};
    use smallvec::smallvec;

    /// The counter application: `div{id,data-count}[input, "<n>", img × n]`.
    fn counter_app(count: usize) -> VNode {
        let mut children: Children = smallvec![Element::new("input").into(), VNode::from(count.to_string())];
        for _ in 0..count {
            children.push(Element::new("img").attr("src", "cat.gif").into());
        }
        create_node(
            "div",
            vec![
                ("id".into(), "app".into()),
                ("data-count".into(), count.to_string()),
            ],
            children,
        )
    }

    #[test]
    fn mount_renders_initial_tree() {
        let rt = Runtime::mount(counter_app(2)).unwrap();
        let root = rt.root().unwrap().as_element().unwrap();
        assert_eq!(root.tag, "div");
        assert_eq!(root.get_attr("id"), Some("app"));
        assert_eq!(root.child_count(), 4);
    }

    #[test]
    fn counter_scenario_end_to_end() {
        // div{id:"app"}[input, "3", img, img, img] -> [input, "5", img, img]
        let mut rt = Runtime::mount(counter_app(3)).unwrap();
        let stats = rt.update(counter_app(2)).unwrap();

        let root = rt.root().unwrap().as_element().unwrap();
        // Same div, updated in place.
        assert_eq!(root.tag, "div");
        assert_eq!(root.get_attr("id"), Some("app"));
        assert_eq!(root.get_attr("data-count"), Some("2"));
        // input kept, text replaced, imgs trimmed from three to two.
        assert_eq!(root.child_count(), 4);
        assert_eq!(root.children[0].as_element().unwrap().tag, "input");
        assert_eq!(root.children[1].as_text(), Some("2"));
        assert_eq!(root.children[2].as_element().unwrap().tag, "img");
        assert_eq!(root.children[3].as_element().unwrap().tag, "img");

        assert_eq!(stats.nodes_replaced, 1, "only the text child is replaced");
        assert_eq!(stats.nodes_removed, 1, "the surplus img is removed");

        // The live tree now mirrors a fresh render of the new tree.
        assert_eq!(
            to_html(rt.root().unwrap()),
            to_html(&render(&counter_app(2)))
        );
    }

    #[test]
    fn idempotent_update_with_equal_tree() {
        let mut rt = Runtime::mount(counter_app(4)).unwrap();
        let before = rt.root().unwrap().clone();

        let stats = rt.update(counter_app(4)).unwrap();
        assert_eq!(stats.nodes_replaced, 0);
        assert_eq!(stats.nodes_removed, 0);
        assert_eq!(stats.nodes_appended, 0);

        let after = rt.root().unwrap();
        assert_eq!(after, &before);
        let (a, b) = (
            after.as_element().unwrap(),
            before.as_element().unwrap(),
        );
        assert!(attrs_eq(&a.attrs, &b.attrs));
    }

    #[test]
    fn growth_appends_fresh_children() {
        let mut rt = Runtime::mount(counter_app(1)).unwrap();
        let stats = rt.update(counter_app(5)).unwrap();

        assert_eq!(stats.nodes_appended, 4);
        let root = rt.root().unwrap().as_element().unwrap();
        assert_eq!(root.child_count(), 7);
        for child in &root.children[2..] {
            assert_eq!(child.as_element().unwrap().tag, "img");
        }
    }

    #[test]
    fn root_tag_change_swaps_root_reference() {
        let mut rt = Runtime::mount(Element::new("div").text("x").into()).unwrap();
        rt.update(Element::new("main").text("x").into()).unwrap();

        let root = rt.root().unwrap().as_element().unwrap();
        assert_eq!(root.tag, "main");

        // Consecutive updates keep working against the swapped root.
        rt.update(Element::new("main").text("y").into()).unwrap();
        assert_eq!(
            rt.root().unwrap().as_element().unwrap().children[0].as_text(),
            Some("y")
        );
    }

    #[test]
    fn many_random_ticks_converge() {
        // Every tick must leave the live tree equal to a fresh render of
        // the tick's virtual tree, whatever the previous count was.
        let counts = [0, 7, 3, 3, 9, 1, 0, 5];
        let mut rt = Runtime::mount(counter_app(0)).unwrap();
        for count in counts {
            rt.update(counter_app(count)).unwrap();
            assert_eq!(
                to_html(rt.root().unwrap()),
                to_html(&render(&counter_app(count))),
                "diverged at count {count}"
            );
        }
    }

    #[test]
    fn unmount_returns_live_root() {
        let rt = Runtime::mount(counter_app(1)).unwrap();
        let root = rt.unmount().unwrap();
        assert_eq!(root.as_element().unwrap().tag, "div");
    }
}
