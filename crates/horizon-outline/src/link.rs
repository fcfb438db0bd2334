//! Parent linking.
//!
//! Children sequences own nodes; the `parent` handle is a separate,
//! non-owning back-reference that only this pass writes. Structural edits do
//! not relink, so call [`Outline::add_parent`] (or [`Outline::link_all`]) after
//! building or reshaping a part of the tree.

use horizon_outline_core::logging::targets;
use horizon_outline_core::{NodeId, Result};

use crate::outline::Outline;

impl Outline {
    /// Set `id`'s parent to `parent`, then link every current descendant to
    /// its position in the children sequences.
    ///
    /// Fails with [`OutlineError::CycleDetected`] when `parent` is `id`, lies
    /// in its subtree, or is linked below a node of that subtree. Nothing is
    /// relinked in that case.
    ///
    /// [`OutlineError::CycleDetected`]: horizon_outline_core::OutlineError::CycleDetected
    pub fn add_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<()> {
        let linked = self.structure.link_subtree(id, parent)?;
        tracing::trace!(target: targets::LINK, ?id, ?parent, linked, "linked subtree");
        Ok(())
    }

    /// Link every root with no parent.
    pub fn link_all(&mut self) -> Result<()> {
        let roots = self.roots().to_vec();
        for root in roots {
            self.add_parent(root, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, TreeItem};
    use crate::{Outline, OutlineError};

    /// A node with `depth` levels of single children below it.
    struct Chain(usize);

    impl ItemDisplay for Chain {}
    impl ItemEdit for Chain {}
    impl ItemHost for Chain {}
    impl ItemStructure for Chain {
        fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
            match self.0 {
                0 => None,
                depth => Some(vec![Box::new(Chain(depth - 1)), Box::new(Chain(0))]),
            }
        }
    }

    #[test]
    fn test_unlinked_until_add_parent() {
        let mut outline = Outline::new();
        let root = outline.insert_root(Box::new(Chain(2)));
        let first = outline.children(root).unwrap().unwrap()[0];
        assert_eq!(outline.parent(first).unwrap(), None);

        outline.add_parent(root, None).unwrap();
        assert_eq!(outline.parent(first).unwrap(), Some(root));
    }

    #[test]
    fn test_only_roots_without_parent() {
        let mut outline = Outline::new();
        let a = outline.insert_root(Box::new(Chain(3)));
        let b = outline.insert_root(Box::new(Chain(1)));
        outline.link_all().unwrap();

        for root in [a, b] {
            for id in outline.subtree(root).unwrap() {
                let parent = outline.parent(id).unwrap();
                if id == root {
                    assert_eq!(parent, None);
                } else {
                    let parent = parent.unwrap();
                    assert!(outline.children(parent).unwrap().unwrap().contains(&id));
                }
            }
        }
    }

    #[test]
    fn test_add_parent_under_other_node() {
        let mut outline = Outline::new();
        let a = outline.insert_root(Box::new(Chain(1)));
        let b = outline.insert_root(Box::new(Chain(0)));
        outline.add_parent(b, Some(a)).unwrap();
        assert_eq!(outline.parent(b).unwrap(), Some(a));
        assert_eq!(outline.ancestor_ids(b), vec![a]);
    }

    #[test]
    fn test_add_parent_rejects_descendant() {
        let mut outline = Outline::new();
        let root = outline.insert_root(Box::new(Chain(2)));
        outline.add_parent(root, None).unwrap();
        let child = outline.children(root).unwrap().unwrap()[0];
        let grandchild = outline.children(child).unwrap().unwrap()[0];

        for parent in [root, child, grandchild] {
            assert_eq!(
                outline.add_parent(root, Some(parent)),
                Err(OutlineError::CycleDetected { id: root, parent })
            );
        }
        assert_eq!(outline.parent(root).unwrap(), None);
        assert_eq!(outline.ancestor_ids(grandchild), vec![child, root]);
    }

    #[test]
    fn test_deep_chain_links() {
        let mut outline = Outline::new();
        let root = outline.insert_root(Box::new(Chain(20_000)));
        outline.add_parent(root, None).unwrap();

        let mut tip = root;
        while let Some(&next) = outline.children(tip).unwrap().and_then(|c| c.first()) {
            tip = next;
        }
        assert_eq!(outline.ancestor_ids(tip).len(), 20_000);
        assert_eq!(outline.subtree(root).unwrap().len(), 40_001);
    }
}
