//! Arena storage for node hierarchies.
//!
//! [`Structure`] owns every node value in a [`SlotMap`] and keeps, per node:
//!
//! - the ordered children sequence, or `None` when the node does not support
//!   children at all (absence and emptiness are distinct);
//! - a non-owning `parent` handle.
//!
//! Ownership follows the children sequences: a node belongs to the sequence it
//! was attached to (or to the root list). The `parent` handle is *not* kept in
//! sync by attach/remove/swap; it is written only through
//! [`Structure::set_parent`], which the tree-linking pass uses. This keeps the
//! back-reference a plain index that can never form an ownership cycle.
//!
//! # Example
//!
//! ```
//! use horizon_outline_core::Structure;
//!
//! let mut structure = Structure::new();
//! let root = structure.insert_root("root");
//! structure.enable_children(root).unwrap();
//! let child = structure.append_child(root, "child").unwrap();
//!
//! assert_eq!(structure.children(root).unwrap(), Some(&[child][..]));
//! // Parent links are assigned separately.
//! assert_eq!(structure.parent(child).unwrap(), None);
//! structure.set_parent(child, Some(root)).unwrap();
//! assert_eq!(structure.parent(child).unwrap(), Some(root));
//! ```

use std::collections::HashSet;

use slotmap::{new_key_type, SlotMap};

use crate::error::{OutlineError, Result};
use crate::logging::targets;

new_key_type! {
    /// A generational identifier for a node in a [`Structure`].
    ///
    /// IDs stay valid while the node is alive and are never reused for a
    /// different node, so a stale ID simply stops resolving.
    pub struct NodeId;
}

impl NodeId {
    /// Convert the ID to a raw u64 value, for interop with widget code that
    /// stores row tags as integers.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Recreate an ID from [`NodeId::as_raw`] output.
    ///
    /// This does not check that the node still exists.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Internal data stored for each node.
struct Slot<T> {
    value: T,
    /// Non-owning back-reference, written by the linking pass only.
    parent: Option<NodeId>,
    /// Owned children; `None` when children are unsupported.
    children: Option<Vec<NodeId>>,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: None,
        }
    }
}

/// Arena-backed node hierarchy.
pub struct Structure<T> {
    slots: SlotMap<NodeId, Slot<T>>,
    roots: Vec<NodeId>,
}

impl<T> Structure<T> {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Insert a new root node. Roots start without children support.
    pub fn insert_root(&mut self, value: T) -> NodeId {
        let id = self.slots.insert(Slot::new(value));
        self.roots.push(id);
        tracing::trace!(target: targets::STRUCTURE, ?id, "inserted root");
        id
    }

    /// Mark a node as supporting children.
    ///
    /// A node that already supports children keeps its current sequence.
    pub fn enable_children(&mut self, id: NodeId) -> Result<()> {
        let slot = self.slots.get_mut(id).ok_or(OutlineError::InvalidNodeId)?;
        slot.children.get_or_insert_with(Vec::new);
        Ok(())
    }

    /// Append a new node at the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        let len = self.children_of(parent)?.len();
        self.insert_child(parent, len, value)
    }

    /// Insert a new node at `index` in `parent`'s children.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, value: T) -> Result<NodeId> {
        let len = self.children_of(parent)?.len();
        if index > len {
            return Err(OutlineError::IndexOutOfBounds { index, len });
        }

        let id = self.slots.insert(Slot::new(value));
        if let Some(children) = self.slots.get_mut(parent).and_then(|s| s.children.as_mut()) {
            children.insert(index, id);
        }
        tracing::trace!(target: targets::STRUCTURE, ?parent, ?id, index, "attached child");
        Ok(id)
    }

    /// Remove `child` and its whole subtree from `parent`'s children.
    ///
    /// Returns the removed node's value; descendant values are dropped.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<T> {
        let index = self
            .position(parent, child)?
            .ok_or_else(|| OutlineError::not_a_child(parent, child))?;
        if let Some(children) = self.slots.get_mut(parent).and_then(|s| s.children.as_mut()) {
            children.remove(index);
        }
        self.remove_subtree(child)
    }

    /// Remove a root node and its whole subtree.
    pub fn remove_root(&mut self, id: NodeId) -> Result<T> {
        let index = self
            .roots
            .iter()
            .position(|&root| root == id)
            .ok_or(OutlineError::InvalidNodeId)?;
        self.roots.remove(index);
        self.remove_subtree(id)
    }

    /// Remove every child subtree of `id`, keeping children support.
    ///
    /// Returns the number of removed direct children.
    pub fn clear_children(&mut self, id: NodeId) -> Result<usize> {
        let slot = self.slots.get_mut(id).ok_or(OutlineError::InvalidNodeId)?;
        let children = match slot.children.as_mut() {
            Some(children) => std::mem::take(children),
            None => return Ok(0),
        };
        let count = children.len();
        for child in children {
            self.remove_subtree(child)?;
        }
        Ok(count)
    }

    /// Put a new node in `child`'s slot, removing `child` and its subtree.
    ///
    /// Returns the new node's ID and the removed value.
    pub fn replace_child(&mut self, parent: NodeId, child: NodeId, value: T) -> Result<(NodeId, T)> {
        let index = self
            .position(parent, child)?
            .ok_or_else(|| OutlineError::not_a_child(parent, child))?;
        let id = self.slots.insert(Slot::new(value));
        if let Some(children) = self.slots.get_mut(parent).and_then(|s| s.children.as_mut()) {
            children[index] = id;
        }
        let old = self.remove_subtree(child)?;
        tracing::trace!(target: targets::STRUCTURE, ?parent, ?child, replacement = ?id, index, "replaced child");
        Ok((id, old))
    }

    /// Swap two positions in `parent`'s children.
    pub fn swap_children(&mut self, parent: NodeId, a: usize, b: usize) -> Result<()> {
        let slot = self.slots.get_mut(parent).ok_or(OutlineError::InvalidNodeId)?;
        let children = slot
            .children
            .as_mut()
            .ok_or(OutlineError::ChildrenUnsupported(parent))?;
        let len = children.len();
        if let Some(&index) = [a, b].iter().find(|&&i| i >= len) {
            return Err(OutlineError::IndexOutOfBounds { index, len });
        }
        children.swap(a, b);
        tracing::trace!(target: targets::STRUCTURE, ?parent, a, b, "swapped children");
        Ok(())
    }

    /// Position of `child` in `parent`'s current children.
    ///
    /// Returns `Ok(None)` if `child` is not a direct child.
    pub fn position(&self, parent: NodeId, child: NodeId) -> Result<Option<usize>> {
        Ok(self.children_of(parent)?.iter().position(|&c| c == child))
    }

    /// Check if a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Borrow a node's value.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id).map(|s| &s.value)
    }

    /// Mutably borrow a node's value.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id).map(|s| &mut s.value)
    }

    /// Iterate over all live nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.slots.iter().map(|(id, s)| (id, &s.value))
    }

    /// Get the linked parent of a node.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.slots
            .get(id)
            .map(|s| s.parent)
            .ok_or(OutlineError::InvalidNodeId)
    }

    /// Set the parent back-reference of a node.
    ///
    /// This does not move the node between children sequences. The parent is
    /// rejected when it, or any node on its linked ancestor chain, lies in
    /// `id`'s subtree, so links never form a cycle.
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<()> {
        if !self.slots.contains_key(id) {
            return Err(OutlineError::InvalidNodeId);
        }
        if let Some(parent_id) = parent {
            if !self.slots.contains_key(parent_id) {
                return Err(OutlineError::InvalidNodeId);
            }
            let subtree: HashSet<NodeId> = self.depth_first_preorder(id)?.into_iter().collect();
            let mut current = Some(parent_id);
            while let Some(current_id) = current {
                if subtree.contains(&current_id) {
                    tracing::debug!(target: targets::STRUCTURE, ?id, parent = ?parent_id, "rejected cyclic parent link");
                    return Err(OutlineError::CycleDetected {
                        id,
                        parent: parent_id,
                    });
                }
                current = self.slots.get(current_id).and_then(|s| s.parent);
            }
        }
        if let Some(slot) = self.slots.get_mut(id) {
            slot.parent = parent;
        }
        Ok(())
    }

    /// Set `id`'s parent, then point every descendant at the node whose
    /// children sequence holds it.
    ///
    /// Returns the number of nodes linked, `id` included.
    pub fn link_subtree(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<usize> {
        self.set_parent(id, parent)?;
        let mut linked = 1usize;
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let children = self.slots.get(current).and_then(|s| s.children.clone());
            for child in children.into_iter().flatten() {
                if let Some(slot) = self.slots.get_mut(child) {
                    slot.parent = Some(current);
                    pending.push(child);
                    linked += 1;
                }
            }
        }
        Ok(linked)
    }

    /// Get the children of a node.
    ///
    /// `Ok(None)` means the node does not support children.
    pub fn children(&self, id: NodeId) -> Result<Option<&[NodeId]>> {
        self.slots
            .get(id)
            .map(|s| s.children.as_deref())
            .ok_or(OutlineError::InvalidNodeId)
    }

    /// Get all linked ancestors from the immediate parent to the root.
    pub fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut result = Vec::new();
        let mut current = self.parent(id)?;
        while let Some(current_id) = current {
            result.push(current_id);
            current = self.slots.get(current_id).and_then(|s| s.parent);
        }
        Ok(result)
    }

    /// Depth-first pre-order traversal over the children sequences.
    pub fn depth_first_preorder(&self, id: NodeId) -> Result<Vec<NodeId>> {
        if !self.slots.contains_key(id) {
            return Err(OutlineError::InvalidNodeId);
        }
        let mut result = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(slot) = self.slots.get(current) else {
                continue;
            };
            result.push(current);
            pending.extend(slot.children.iter().flatten().rev());
        }
        Ok(result)
    }

    /// Children of a node that must support them.
    fn children_of(&self, id: NodeId) -> Result<&[NodeId]> {
        self.children(id)?
            .ok_or(OutlineError::ChildrenUnsupported(id))
    }

    /// Remove a detached node and all of its descendants.
    fn remove_subtree(&mut self, id: NodeId) -> Result<T> {
        let slot = self.slots.remove(id).ok_or(OutlineError::InvalidNodeId)?;
        let mut pending: Vec<NodeId> = slot.children.iter().flatten().copied().collect();
        let mut removed = 0usize;
        while let Some(child) = pending.pop() {
            if let Some(child_slot) = self.slots.remove(child) {
                pending.extend(child_slot.children.into_iter().flatten());
                removed += 1;
            }
        }
        tracing::trace!(target: targets::STRUCTURE, ?id, descendant_count = removed, "removed subtree");
        Ok(slot.value)
    }
}

impl<T> Default for Structure<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Structure<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Structure")
            .field("nodes", &self.slots.len())
            .field("roots", &self.roots)
            .finish()
    }
}

static_assertions::assert_impl_all!(Structure<String>: Send, Sync);
