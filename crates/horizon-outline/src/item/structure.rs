//! Structural capabilities: children, and the add/move/delete/copy/replace
//! hooks a parent item answers for its children.

use super::TreeItem;

/// Children production and structural edit hooks.
///
/// The `is_*` flags gate the matching [`Outline`](crate::Outline) operation on
/// the item itself. The hooks are asked of the *parent* item and let domain
/// code update its own data; the outline only changes the tree when a hook
/// accepts.
pub trait ItemStructure {
    /// Produce this item's children.
    ///
    /// `None` means the item does not support children, which is distinct
    /// from `Some(vec![])`.
    fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
        None
    }

    /// The item can be removed from its parent.
    fn is_deletable(&self) -> bool {
        false
    }

    /// The item can be copied.
    fn is_copyable(&self) -> bool {
        false
    }

    /// The item can change position among its siblings.
    fn is_movable(&self) -> bool {
        false
    }

    /// The item can be swapped for another item.
    fn is_replaceable(&self) -> bool {
        false
    }

    /// New children can be created under this item.
    fn is_insertable(&self) -> bool {
        false
    }

    /// Copied items can be pasted under this item.
    fn is_insertable_copy(&self) -> bool {
        false
    }

    /// The item can be cut to the clipboard.
    fn is_cuttable(&self) -> bool {
        false
    }

    /// Ask for confirmation before deleting.
    fn show_warning_before_delete(&self) -> bool {
        false
    }

    /// Editing this item changes its siblings, so the parent must rebuild.
    fn need_rebuild_parent(&self) -> bool {
        false
    }

    /// Create a new child.
    fn insert(&mut self) -> Option<Box<dyn TreeItem>> {
        None
    }

    /// Create a child from a copied item.
    fn insert_copy(&mut self, _source: &dyn TreeItem) -> Option<Box<dyn TreeItem>> {
        None
    }

    /// Create the item that takes the place of the child at `index`.
    fn replace(
        &mut self,
        _index: usize,
        _child: &dyn TreeItem,
        _replacement: &dyn TreeItem,
    ) -> Option<Box<dyn TreeItem>> {
        None
    }

    /// Drop the child at `index` from domain data.
    fn delete(&mut self, _index: usize, _child: &dyn TreeItem) -> bool {
        false
    }

    /// Cut the child at `index`.
    fn cut(&mut self, _index: usize, _child: &dyn TreeItem) -> bool {
        false
    }

    /// Move the child at `index` one position up in domain data.
    fn move_up(&mut self, _index: usize) -> bool {
        false
    }

    /// Move the child at `index` one position down in domain data.
    fn move_down(&mut self, _index: usize) -> bool {
        false
    }
}
