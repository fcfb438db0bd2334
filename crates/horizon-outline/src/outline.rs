//! The outline tree: items in an arena, with per-node runtime state.
//!
//! An [`Outline`] owns every item. Each node pairs a boxed [`TreeItem`] with
//! runtime state (disabled, cut marker, filter cache, value-changed handler).
//!
//! Capability operations (`set_value`, `move_up`, `delete`, ...) never fail
//! loudly: an invalid id, a missing capability or a hook that declines all
//! produce `false`/`None` and leave the tree untouched. Builder and query
//! operations return [`Result`].
//!
//! # Example
//!
//! ```
//! use horizon_outline::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
//! use horizon_outline::Outline;
//!
//! struct Param(&'static str, String);
//!
//! impl ItemDisplay for Param {
//!     fn display_text(&self) -> Labels {
//!         [self.0.to_string(), self.1.clone()]
//!     }
//! }
//! impl ItemEdit for Param {
//!     fn is_editable(&self) -> bool {
//!         true
//!     }
//!     fn set_value(&mut self, value: &str) -> bool {
//!         self.1 = value.to_string();
//!         true
//!     }
//! }
//! impl ItemStructure for Param {}
//! impl ItemHost for Param {}
//!
//! let mut outline = Outline::new();
//! let id = outline.insert_root(Box::new(Param("Timeout", "10".into())));
//! assert!(outline.set_value(id, "20"));
//! assert_eq!(outline.display_text(id)[1], "20");
//! ```

use std::mem;

use horizon_outline_core::logging::{span_names, targets};
use horizon_outline_core::{
    HandlerId, HandlerSlot, NodeId, OutlineError, PerfSpan, Result, Structure,
};

use crate::capabilities::Capabilities;
use crate::config::OutlineConfig;
use crate::filter::FilterState;
use crate::item::{
    empty_labels, same_item_type, CellRenderer, DisplayObjects, DrawInfo, EditablePart,
    ImageIndex, ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem, ValueMapping,
    NOT_EDITABLE,
};

/// Runtime state kept next to each item.
#[derive(Debug, Default)]
pub(crate) struct NodeState {
    pub(crate) disabled: bool,
    pub(crate) marked_to_cut: bool,
    pub(crate) need_disable: bool,
    pub(crate) filter: FilterState,
    pub(crate) ancestor_match: bool,
    /// Filled flag cached for the current search session.
    pub(crate) filled: Option<bool>,
    pub(crate) value_changed: HandlerSlot<NodeId>,
}

pub(crate) struct NodeEntry {
    pub(crate) item: Box<dyn TreeItem>,
    pub(crate) state: NodeState,
}

impl NodeEntry {
    fn new(item: Box<dyn TreeItem>) -> Self {
        Self {
            item,
            state: NodeState::default(),
        }
    }
}

/// Stand-in left in a node's place while its item runs a hook.
struct Detached;

impl ItemDisplay for Detached {}
impl ItemEdit for Detached {}
impl ItemStructure for Detached {}
impl ItemHost for Detached {}

fn reject(op: &'static str, id: NodeId, reason: &'static str) {
    tracing::debug!(target: targets::OUTLINE, ?id, op, reason, "operation rejected");
}

/// A tree of items with capability-gated editing and search.
pub struct Outline {
    pub(crate) structure: Structure<NodeEntry>,
    config: OutlineConfig,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Create an empty outline with the default configuration.
    pub fn new() -> Self {
        Self::with_config(OutlineConfig::default())
    }

    /// Create an empty outline with a custom configuration.
    pub fn with_config(config: OutlineConfig) -> Self {
        Self {
            structure: Structure::new(),
            config,
        }
    }

    /// The outline's configuration.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Add a root item and build its subtree.
    pub fn insert_root(&mut self, item: Box<dyn TreeItem>) -> NodeId {
        let id = self.structure.insert_root(NodeEntry::new(item));
        if let Err(error) = self.build_children(id) {
            tracing::warn!(target: targets::OUTLINE, ?id, %error, "failed to build children");
        }
        id
    }

    /// Append an item under `parent` and build its subtree.
    ///
    /// Fails if `parent` is unknown or does not support children.
    pub fn append_child(&mut self, parent: NodeId, item: Box<dyn TreeItem>) -> Result<NodeId> {
        let id = self.structure.append_child(parent, NodeEntry::new(item))?;
        self.build_children(id)?;
        Ok(id)
    }

    /// Let a node accept children even though its item produced none.
    pub fn enable_children(&mut self, id: NodeId) -> Result<()> {
        self.structure.enable_children(id)
    }

    /// Remove a root and its subtree, returning the root item.
    pub fn remove_root(&mut self, id: NodeId) -> Result<Box<dyn TreeItem>> {
        self.structure.remove_root(id).map(|entry| entry.item)
    }

    /// Drop a node's children, ask its item for fresh ones, and link them.
    ///
    /// The node itself keeps its id, item and state.
    #[tracing::instrument(skip(self), target = "horizon_outline::outline", level = "trace")]
    pub fn rebuild_children(&mut self, id: NodeId) -> Result<()> {
        let _perf = PerfSpan::new(span_names::BUILD);
        let removed = self.structure.clear_children(id)?;
        self.forget_filled(id);
        self.build_children(id)?;
        let children = self.structure.children(id)?.map(<[NodeId]>::to_vec);
        for child in children.into_iter().flatten() {
            self.add_parent(child, Some(id))?;
        }
        tracing::trace!(target: targets::OUTLINE, ?id, removed, "rebuilt children");
        Ok(())
    }

    /// Ask `id`'s item for children, then do the same for each new child,
    /// creating nodes in pre-order.
    fn build_children(&mut self, id: NodeId) -> Result<()> {
        let mut pending = Vec::new();
        self.open_children(id, &mut pending)?;
        while let Some((parent, items)) = pending.last_mut() {
            let parent = *parent;
            let Some(child) = items.next() else {
                pending.pop();
                continue;
            };
            let child_id = self.structure.append_child(parent, NodeEntry::new(child))?;
            self.open_children(child_id, &mut pending)?;
        }
        Ok(())
    }

    /// Queue the items `id` creates, enabling its children when it has any.
    fn open_children(
        &mut self,
        id: NodeId,
        pending: &mut Vec<(NodeId, std::vec::IntoIter<Box<dyn TreeItem>>)>,
    ) -> Result<()> {
        let children = match self.structure.get(id) {
            Some(entry) => entry.item.create_children(),
            None => return Err(OutlineError::InvalidNodeId),
        };
        if let Some(children) = children {
            self.structure.enable_children(id)?;
            pending.push((id, children.into_iter()));
        }
        Ok(())
    }

    /// Append a freshly created item under `parent` for a capability operation.
    fn attach(&mut self, parent: NodeId, item: Box<dyn TreeItem>) -> Option<NodeId> {
        let attached = self
            .structure
            .enable_children(parent)
            .and_then(|()| self.append_child(parent, item));
        match attached {
            Ok(id) => {
                self.forget_filled(parent);
                Some(id)
            }
            Err(error) => {
                tracing::warn!(target: targets::OUTLINE, ?parent, %error, "failed to attach item");
                None
            }
        }
    }

    /// Run `f` with the item of `id` moved out of the arena.
    ///
    /// `f` receives the item mutably and the rest of the outline shared. The
    /// node appears as an inert placeholder to `f` while detached.
    fn with_detached<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn TreeItem, &Self) -> R,
    ) -> Option<R> {
        let entry = self.structure.get_mut(id)?;
        let mut item = mem::replace(&mut entry.item, Box::new(Detached));
        let detached: &mut dyn TreeItem = item.as_mut();
        let result = f(detached, &*self);
        if let Some(entry) = self.structure.get_mut(id) {
            entry.item = item;
        }
        Some(result)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.structure.contains(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.structure.len()
    }

    /// Returns `true` if the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        self.structure.roots()
    }

    /// The linked parent of a node.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.structure.parent(id)
    }

    /// The children of a node; `None` when children are unsupported.
    pub fn children(&self, id: NodeId) -> Result<Option<&[NodeId]>> {
        self.structure.children(id)
    }

    /// A node and all its descendants in pre-order.
    pub fn subtree(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.structure.depth_first_preorder(id)
    }

    /// Linked ancestors from the parent up to the root; empty for an unknown
    /// or unlinked node.
    pub fn ancestor_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.structure.ancestors(id).unwrap_or_default()
    }

    /// Borrow a node's item.
    pub fn item(&self, id: NodeId) -> Option<&dyn TreeItem> {
        self.structure.get(id).map(|entry| entry.item.as_ref())
    }

    /// Mutably borrow a node's item.
    ///
    /// Changes made through this reference bypass the value-changed handler.
    pub fn item_mut(&mut self, id: NodeId) -> Option<&mut dyn TreeItem> {
        let entry = self.structure.get_mut(id)?;
        let item: &mut dyn TreeItem = entry.item.as_mut();
        Some(item)
    }

    /// Borrow a node's item as a concrete type.
    pub fn item_as<T: TreeItem>(&self, id: NodeId) -> Option<&T> {
        self.item(id).and_then(crate::item::item_cast::<T>)
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.structure.get(id)
    }

    // =========================================================================
    // Row data
    // =========================================================================

    /// Display labels; empty for an unknown node.
    pub fn display_text(&self, id: NodeId) -> Labels {
        self.item(id)
            .map(|item| item.display_text())
            .unwrap_or_else(empty_labels)
    }

    /// Edit labels; empty for an unknown node.
    pub fn edit_text(&self, id: NodeId) -> Labels {
        self.item(id)
            .map(|item| item.edit_text())
            .unwrap_or_else(empty_labels)
    }

    /// Editable columns.
    pub fn editable_part(&self, id: NodeId) -> EditablePart {
        self.item(id)
            .map(|item| item.editable_part())
            .unwrap_or(NOT_EDITABLE)
    }

    /// Row icon.
    pub fn image_index(&self, id: NodeId) -> ImageIndex {
        self.item(id)
            .map(|item| item.image_index())
            .unwrap_or_default()
    }

    /// Per-column editor hints.
    pub fn cell_renderer(&self, id: NodeId) -> [Option<CellRenderer>; 2] {
        self.item(id)
            .map(|item| item.cell_renderer())
            .unwrap_or([None, None])
    }

    /// Help page for a node.
    pub fn help_link(&self, id: NodeId) -> Option<String> {
        self.item(id).and_then(|item| item.help_link())
    }

    /// Every capability flag of a node, plus its disabled state.
    pub fn capabilities(&self, id: NodeId) -> Capabilities {
        let Some(entry) = self.structure.get(id) else {
            return Capabilities::none();
        };
        let item = entry.item.as_ref();
        Capabilities {
            editable: item.is_editable(),
            deletable: item.is_deletable(),
            copyable: item.is_copyable(),
            movable: item.is_movable(),
            replaceable: item.is_replaceable(),
            insertable: item.is_insertable(),
            insertable_copy: item.is_insertable_copy(),
            cuttable: item.is_cuttable(),
            draw_on_host_page: item.is_draw_on_host_page(),
            uses_device_list: item.uses_device_list(),
            uses_local_restriction: item.uses_local_restriction(),
            bool_parameter: item.is_bool_parameter(),
            main_object: item.is_main_object(),
            mode: item.is_mode(),
            show_warning_before_delete: item.show_warning_before_delete(),
            need_rebuild_parent: item.need_rebuild_parent(),
            need_disable: entry.state.need_disable || item.need_disable(),
            disabled: entry.state.disabled,
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Apply a textual edit.
    pub fn set_value(&mut self, id: NodeId, value: &str) -> bool {
        self.apply_edit(id, "set_value", |item| item.set_value(value))
    }

    /// Apply a mapping edit.
    pub fn set_value_mapping(&mut self, id: NodeId, mapping: &ValueMapping) -> bool {
        self.apply_edit(id, "set_value_mapping", |item| item.set_value_mapping(mapping))
    }

    /// Apply an edit to the main or the extra value.
    pub fn set_extra_value(&mut self, id: NodeId, value: &str, is_extra: bool) -> bool {
        self.apply_edit(id, "set_extra_value", |item| {
            item.set_extra_value(value, is_extra)
        })
    }

    fn apply_edit(
        &mut self,
        id: NodeId,
        op: &'static str,
        edit: impl FnOnce(&mut dyn TreeItem) -> bool,
    ) -> bool {
        let Some(entry) = self.structure.get_mut(id) else {
            reject(op, id, "invalid node");
            return false;
        };
        let item: &mut dyn TreeItem = entry.item.as_mut();
        if !edit(item) {
            reject(op, id, "item declined the edit");
            return false;
        }

        let rebuild_parent = entry.item.need_rebuild_parent();
        entry.state.value_changed.emit(&id);
        self.forget_filled(id);

        if rebuild_parent {
            if let Ok(Some(parent)) = self.structure.parent(id) {
                if let Err(error) = self.rebuild_children(parent) {
                    tracing::warn!(target: targets::OUTLINE, ?parent, %error, "failed to rebuild parent");
                }
            }
        }
        true
    }

    // =========================================================================
    // Structural capabilities
    // =========================================================================

    /// Identity copy: `Some(id)` when the item is copyable.
    pub fn copy(&self, id: NodeId) -> Option<NodeId> {
        match self.item(id) {
            Some(item) if item.is_copyable() => Some(id),
            Some(_) => {
                reject("copy", id, "not copyable");
                None
            }
            None => None,
        }
    }

    /// Index of a movable `candidate` among `parent`'s children, with the
    /// number of children.
    fn move_position(&self, parent: NodeId, candidate: NodeId) -> Option<(usize, usize)> {
        if !self.item(candidate)?.is_movable() {
            return None;
        }
        let children = self.structure.children(parent).ok()??;
        let index = children.iter().position(|&child| child == candidate)?;
        Some((index, children.len()))
    }

    /// True if `candidate` is movable and not the first child of `parent`.
    pub fn can_move_up(&self, parent: NodeId, candidate: NodeId) -> bool {
        self.move_position(parent, candidate)
            .is_some_and(|(index, _)| index > 0)
    }

    /// True if `candidate` is movable and not the last child of `parent`.
    pub fn can_move_down(&self, parent: NodeId, candidate: NodeId) -> bool {
        self.move_position(parent, candidate)
            .is_some_and(|(index, len)| index + 1 < len)
    }

    /// Swap `candidate` with its previous sibling.
    pub fn move_up(&mut self, parent: NodeId, candidate: NodeId) -> Option<NodeId> {
        if !self.can_move_up(parent, candidate) {
            reject("move_up", candidate, "cannot move up");
            return None;
        }
        let (index, _) = self.move_position(parent, candidate)?;
        self.swap_with(parent, candidate, index, index - 1, "move_up", |item| {
            item.move_up(index)
        })
    }

    /// Swap `candidate` with its next sibling.
    pub fn move_down(&mut self, parent: NodeId, candidate: NodeId) -> Option<NodeId> {
        if !self.can_move_down(parent, candidate) {
            reject("move_down", candidate, "cannot move down");
            return None;
        }
        let (index, _) = self.move_position(parent, candidate)?;
        self.swap_with(parent, candidate, index, index + 1, "move_down", |item| {
            item.move_down(index)
        })
    }

    fn swap_with(
        &mut self,
        parent: NodeId,
        candidate: NodeId,
        from: usize,
        to: usize,
        op: &'static str,
        hook: impl FnOnce(&mut dyn TreeItem) -> bool,
    ) -> Option<NodeId> {
        let parent_item = self.item_mut(parent)?;
        if !hook(parent_item) {
            reject(op, candidate, "parent declined the move");
            return None;
        }
        self.structure.swap_children(parent, from, to).ok()?;
        tracing::trace!(target: targets::OUTLINE, ?parent, ?candidate, from, to, "moved child");
        Some(candidate)
    }

    /// Create a new child under `parent` through its insert hook.
    pub fn insert(&mut self, parent: NodeId) -> Option<NodeId> {
        let parent_item = self.item_mut(parent)?;
        if !parent_item.is_insertable() {
            reject("insert", parent, "not insertable");
            return None;
        }
        let Some(item) = parent_item.insert() else {
            reject("insert", parent, "parent created nothing");
            return None;
        };
        self.attach(parent, item)
    }

    /// Paste a copy of `source` under `parent` through its insert-copy hook.
    pub fn insert_copy(&mut self, parent: NodeId, source: NodeId) -> Option<NodeId> {
        if !self.item(parent)?.is_insertable_copy() {
            reject("insert_copy", parent, "not insertable-copy");
            return None;
        }
        if parent == source {
            reject("insert_copy", parent, "source is the target");
            return None;
        }
        let item = self
            .with_detached(parent, |parent_item, outline| {
                let source_item = outline.item(source)?;
                parent_item.insert_copy(source_item)
            })
            .flatten();
        let Some(item) = item else {
            reject("insert_copy", parent, "parent created nothing");
            return None;
        };
        self.attach(parent, item)
    }

    /// Replace `child` of `parent` with an item built from `replacement`.
    ///
    /// The new node takes the child's position; the old subtree is dropped.
    pub fn replace(
        &mut self,
        parent: NodeId,
        child: NodeId,
        replacement: NodeId,
    ) -> Option<NodeId> {
        if !self.item(child)?.is_replaceable() {
            reject("replace", child, "not replaceable");
            return None;
        }
        if parent == child || parent == replacement || !self.contains(replacement) {
            reject("replace", child, "invalid replacement");
            return None;
        }
        let Ok(Some(index)) = self.structure.position(parent, child) else {
            reject("replace", child, "not a child of parent");
            return None;
        };
        let item = self
            .with_detached(parent, |parent_item, outline| {
                let child_item = outline.item(child)?;
                let replacement_item = outline.item(replacement)?;
                parent_item.replace(index, child_item, replacement_item)
            })
            .flatten();
        let Some(item) = item else {
            reject("replace", child, "parent declined the replacement");
            return None;
        };

        let (id, _) = self
            .structure
            .replace_child(parent, child, NodeEntry::new(item))
            .ok()?;
        if let Err(error) = self.build_children(id) {
            tracing::warn!(target: targets::OUTLINE, ?id, %error, "failed to build children");
        }
        self.forget_filled(parent);
        Some(id)
    }

    /// Delete `child` of `parent` and its subtree.
    pub fn delete(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(index) = self.hook_position("delete", parent, child, |item| item.is_deletable())
        else {
            return false;
        };
        let accepted = self
            .with_detached(parent, |parent_item, outline| {
                outline
                    .item(child)
                    .is_some_and(|child_item| parent_item.delete(index, child_item))
            })
            .unwrap_or(false);
        if !accepted {
            reject("delete", child, "parent declined the delete");
            return false;
        }
        let removed = self.structure.remove_child(parent, child).is_ok();
        if removed {
            self.forget_filled(parent);
        }
        removed
    }

    /// Cut `target` from `parent`, marking it to cut.
    pub fn cut(&mut self, parent: NodeId, target: NodeId) -> Option<NodeId> {
        let index = self.hook_position("cut", parent, target, |item| item.is_cuttable())?;
        let accepted = self
            .with_detached(parent, |parent_item, outline| {
                outline
                    .item(target)
                    .is_some_and(|child_item| parent_item.cut(index, child_item))
            })
            .unwrap_or(false);
        if !accepted {
            reject("cut", target, "parent declined the cut");
            return None;
        }
        let entry = self.structure.get_mut(target)?;
        entry.state.marked_to_cut = true;
        Some(target)
    }

    /// Position of `child` in `parent` when the child has the capability.
    fn hook_position(
        &self,
        op: &'static str,
        parent: NodeId,
        child: NodeId,
        capability: impl FnOnce(&dyn TreeItem) -> bool,
    ) -> Option<usize> {
        let Some(child_item) = self.item(child) else {
            reject(op, child, "invalid node");
            return None;
        };
        if !capability(child_item) {
            reject(op, child, "capability missing");
            return None;
        }
        if parent == child {
            reject(op, child, "node is its own parent");
            return None;
        }
        match self.structure.position(parent, child) {
            Ok(Some(index)) => Some(index),
            _ => {
                reject(op, child, "not a child of parent");
                None
            }
        }
    }

    /// Siblings of `id` (itself included) whose item has the same concrete
    /// type, in children order. Empty when `id` has no linked parent.
    pub fn quick_multi_select(&self, id: NodeId) -> Vec<NodeId> {
        let Some(item) = self.item(id) else {
            return Vec::new();
        };
        let Ok(Some(parent)) = self.structure.parent(id) else {
            return Vec::new();
        };
        let Ok(Some(siblings)) = self.structure.children(parent) else {
            return Vec::new();
        };
        siblings
            .iter()
            .copied()
            .filter(|&sibling| {
                self.item(sibling)
                    .is_some_and(|other| same_item_type(item, other))
            })
            .collect()
    }

    // =========================================================================
    // Runtime state
    // =========================================================================

    /// Whether the node is disabled.
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.structure.get(id).is_some_and(|e| e.state.disabled)
    }

    /// Set the disabled state. Returns `false` for an unknown node.
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> bool {
        self.update_state(id, |state| state.disabled = disabled)
    }

    /// Whether the node is marked to cut.
    pub fn is_marked_to_cut(&self, id: NodeId) -> bool {
        self.structure.get(id).is_some_and(|e| e.state.marked_to_cut)
    }

    /// Set or clear the cut marker.
    pub fn set_marked_to_cut(&mut self, id: NodeId, marked: bool) -> bool {
        self.update_state(id, |state| state.marked_to_cut = marked)
    }

    /// Whether the node should be shown disabled, by state or by its item.
    pub fn need_disable(&self, id: NodeId) -> bool {
        self.structure
            .get(id)
            .is_some_and(|e| e.state.need_disable || e.item.need_disable())
    }

    /// Request that the node be shown disabled.
    pub fn set_need_disable(&mut self, id: NodeId, need_disable: bool) -> bool {
        self.update_state(id, |state| state.need_disable = need_disable)
    }

    fn update_state(&mut self, id: NodeId, update: impl FnOnce(&mut NodeState)) -> bool {
        match self.structure.get_mut(id) {
            Some(entry) => {
                update(&mut entry.state);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Value-changed notification
    // =========================================================================

    /// Register the node's value-changed handler, replacing any previous one.
    ///
    /// The handler receives the node id. It runs while the outline is
    /// borrowed, so it must not access the outline itself.
    pub fn set_value_changed_handler<F>(&self, id: NodeId, handler: F) -> Option<HandlerId>
    where
        F: Fn(&NodeId) + Send + Sync + 'static,
    {
        self.structure
            .get(id)
            .map(|entry| entry.state.value_changed.set(handler))
    }

    /// Remove the handler if `handler` is the current registration.
    pub fn remove_value_changed_handler(&self, id: NodeId, handler: HandlerId) -> bool {
        self.structure
            .get(id)
            .is_some_and(|entry| entry.state.value_changed.remove(handler))
    }

    /// Invoke the node's handler. Returns whether one ran.
    pub fn notify_value_changed(&self, id: NodeId) -> bool {
        self.structure
            .get(id)
            .is_some_and(|entry| entry.state.value_changed.emit(&id))
    }

    /// Block or unblock the node's handler.
    pub fn set_value_changed_blocked(&self, id: NodeId, blocked: bool) -> bool {
        match self.structure.get(id) {
            Some(entry) => {
                entry.state.value_changed.set_blocked(blocked);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Host integration
    // =========================================================================

    /// Draw instructions for the host page.
    pub fn objects_to_draw(&self, id: NodeId) -> Option<Vec<DrawInfo>> {
        self.item(id).and_then(|item| item.objects_to_draw())
    }

    /// Device filters for the host page.
    pub fn display_objects(&self, id: NodeId) -> DisplayObjects {
        self.item(id)
            .map(|item| item.display_objects())
            .unwrap_or_default()
    }

    /// Update `id` from the generic template `generic`.
    pub fn update_on_generic(&mut self, id: NodeId, generic: NodeId) -> bool {
        if id == generic {
            reject("update_on_generic", id, "node is its own template");
            return false;
        }
        self.with_detached(id, |item, outline| match outline.item(generic) {
            Some(generic_item) => {
                item.update_on_generic(generic_item);
                true
            }
            None => false,
        })
        .unwrap_or(false)
    }

    /// Turn `id` into a generic template built from `sources`.
    pub fn create_generic_from(&mut self, id: NodeId, sources: &[NodeId]) -> bool {
        if sources.contains(&id) {
            reject("create_generic_from", id, "node is among its sources");
            return false;
        }
        self.with_detached(id, |item, outline| {
            let Some(items) = sources
                .iter()
                .map(|&source| outline.item(source))
                .collect::<Option<Vec<_>>>()
            else {
                return false;
            };
            item.create_generic_from(&items);
            true
        })
        .unwrap_or(false)
    }

    /// Notify `id` that its generic template was deleted.
    pub fn update_on_delete_generic(&mut self, id: NodeId) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.update_on_delete_generic();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Outline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outline")
            .field("nodes", &self.structure.len())
            .field("roots", &self.structure.roots())
            .field("config", &self.config)
            .finish()
    }
}

static_assertions::assert_impl_all!(Outline: Send, Sync);
