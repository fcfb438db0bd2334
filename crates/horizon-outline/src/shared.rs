//! Thread-safe access to an [`Outline`].

use parking_lot::RwLock;

use horizon_outline_core::{HandlerId, NodeId};

use crate::filter::FoundItems;
use crate::outline::Outline;

/// A thread-safe wrapper around [`Outline`].
///
/// Provides concurrent read access with exclusive write access via `RwLock`.
/// A search session mutates per-node caches, so [`search`](Self::search) holds
/// the write lock for the whole session and sessions never interleave.
///
/// Value-changed handlers run while the lock is held; they must not call
/// back into the same `SharedOutline`.
pub struct SharedOutline {
    inner: RwLock<Outline>,
}

impl SharedOutline {
    /// Wrap an outline.
    pub fn new(outline: Outline) -> Self {
        Self {
            inner: RwLock::new(outline),
        }
    }

    /// Check if a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.inner.read().contains(id)
    }

    /// Get the children of a node (returns owned Vec for thread safety).
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.inner
            .read()
            .children(id)
            .ok()
            .flatten()
            .map(<[NodeId]>::to_vec)
            .unwrap_or_default()
    }

    /// Apply a textual edit.
    pub fn set_value(&self, id: NodeId, value: &str) -> bool {
        self.inner.write().set_value(id, value)
    }

    /// Register a node's value-changed handler.
    pub fn set_value_changed_handler<F>(&self, id: NodeId, handler: F) -> Option<HandlerId>
    where
        F: Fn(&NodeId) + Send + Sync + 'static,
    {
        self.inner.read().set_value_changed_handler(id, handler)
    }

    /// Run a complete search session and return the found nodes in order.
    pub fn search(&self, root: NodeId, search: &str, hide_empty: bool) -> Vec<NodeId> {
        let mut found = FoundItems::new();
        self.inner
            .write()
            .search(root, search, hide_empty, &mut found);
        found.as_slice().to_vec()
    }

    /// Run a search session and return the rows a view shows.
    pub fn visible_nodes(&self, root: NodeId, search: &str, hide_empty: bool) -> Vec<NodeId> {
        let mut found = FoundItems::new();
        self.inner
            .write()
            .visible_nodes(root, search, hide_empty, &mut found)
    }

    /// Access the outline with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Outline) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the outline with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Outline) -> R,
    {
        f(&mut self.inner.write())
    }

    /// Unwrap the outline.
    pub fn into_inner(self) -> Outline {
        self.inner.into_inner()
    }
}

impl Default for SharedOutline {
    fn default() -> Self {
        Self::new(Outline::new())
    }
}

impl From<Outline> for SharedOutline {
    fn from(outline: Outline) -> Self {
        Self::new(outline)
    }
}

static_assertions::assert_impl_all!(SharedOutline: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
    use std::sync::Arc;
    use std::thread;

    struct Cell(String);

    impl ItemDisplay for Cell {
        fn display_text(&self) -> Labels {
            ["Cell".to_string(), self.0.clone()]
        }
    }
    impl ItemEdit for Cell {
        fn edit_text(&self) -> Labels {
            self.display_text()
        }

        fn set_value(&mut self, value: &str) -> bool {
            self.0 = value.to_string();
            true
        }
    }
    impl ItemStructure for Cell {}
    impl ItemHost for Cell {}

    struct Sheet(usize);

    impl ItemDisplay for Sheet {}
    impl ItemEdit for Sheet {}
    impl ItemHost for Sheet {}
    impl ItemStructure for Sheet {
        fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
            Some(
                (0..self.0)
                    .map(|i| Box::new(Cell(i.to_string())) as Box<dyn TreeItem>)
                    .collect(),
            )
        }
    }

    #[test]
    fn test_search_from_threads() {
        let mut outline = Outline::new();
        let root = outline.insert_root(Box::new(Sheet(20)));
        outline.link_all().unwrap();
        let shared = Arc::new(SharedOutline::new(outline));

        let handles: Vec<_> = ["1", "2", "cell"]
            .into_iter()
            .map(|needle| {
                let shared = shared.clone();
                thread::spawn(move || shared.search(root, needle, true).len())
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // "1": 1, 10..=19; "2": 2, 12; "cell": all 20
        assert_eq!(counts, vec![11, 2, 20]);
    }

    #[test]
    fn test_with_write_and_into_inner() {
        let shared = SharedOutline::default();
        let root = shared.with_write(|outline| outline.insert_root(Box::new(Sheet(2))));
        assert_eq!(shared.children(root).len(), 2);

        let child = shared.children(root)[0];
        assert!(shared.set_value(child, "changed"));

        let outline = shared.into_inner();
        assert_eq!(outline.display_text(child)[1], "changed");
    }
}
