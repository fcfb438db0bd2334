//! The item contract.
//!
//! A tree item is any type implementing the four capability traits:
//!
//! - [`ItemDisplay`] - row text, icon, renderer hints, help link
//! - [`ItemEdit`] - in-place editing and the "has a value" test
//! - [`ItemStructure`] - children and the structural edit hooks
//! - [`ItemHost`] - host page drawing and generic-object hooks
//!
//! Every method has an inert default, so a domain type opts into exactly the
//! capabilities it supports and [`TreeItem`] is implemented automatically:
//!
//! ```
//! use horizon_outline::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
//!
//! struct Note(String);
//!
//! impl ItemDisplay for Note {
//!     fn display_text(&self) -> Labels {
//!         ["Note".to_string(), self.0.clone()]
//!     }
//! }
//! impl ItemEdit for Note {}
//! impl ItemStructure for Note {}
//! impl ItemHost for Note {}
//!
//! let note: Box<dyn TreeItem> = Box::new(Note("hello".into()));
//! assert!(!note.is_deletable());
//! assert_eq!(note.display_text()[1], "hello");
//! ```

mod display;
mod edit;
mod host;
mod structure;

use std::any::Any;

pub use display::{empty_labels, CellRenderer, ImageIndex, ItemDisplay, Labels};
pub use edit::{EditablePart, ItemEdit, ValueMapping, NOT_EDITABLE};
pub use host::{DisplayObjects, DrawInfo, DrawStyle, ItemHost};
pub use structure::ItemStructure;

/// The union of all item capabilities.
///
/// Implemented for every type that implements the four capability traits.
pub trait TreeItem: ItemDisplay + ItemEdit + ItemStructure + ItemHost + Any + Send + Sync {
    /// Full type name of the concrete item, for debugging output.
    fn type_name(&self) -> &'static str;
}

impl<T> TreeItem for T
where
    T: ItemDisplay + ItemEdit + ItemStructure + ItemHost + Any + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Safe downcast for [`TreeItem`] trait objects.
///
/// Returns `Some(&T)` if the item is of type `T`, otherwise `None`.
pub fn item_cast<T: TreeItem>(item: &dyn TreeItem) -> Option<&T> {
    (item as &dyn Any).downcast_ref::<T>()
}

/// Safe mutable downcast for [`TreeItem`] trait objects.
pub fn item_cast_mut<T: TreeItem>(item: &mut dyn TreeItem) -> Option<&mut T> {
    (item as &mut dyn Any).downcast_mut::<T>()
}

/// Check if two items have the same concrete type.
pub fn same_item_type(a: &dyn TreeItem, b: &dyn TreeItem) -> bool {
    (a as &dyn Any).type_id() == (b as &dyn Any).type_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl ItemDisplay for Bare {}
    impl ItemEdit for Bare {}
    impl ItemStructure for Bare {}
    impl ItemHost for Bare {}

    struct Valued(&'static str);

    impl ItemDisplay for Valued {}
    impl ItemEdit for Valued {
        fn edit_text(&self) -> Labels {
            ["name".to_string(), self.0.to_string()]
        }
    }
    impl ItemStructure for Valued {}
    impl ItemHost for Valued {}

    #[test]
    fn test_bare_defaults() {
        let mut item = Bare;
        assert_eq!(item.display_text(), ["", ""]);
        assert_eq!(item.edit_text(), ["", ""]);
        assert_eq!(item.editable_part(), [-1, -1]);
        assert_eq!(item.image_index(), ImageIndex::None);
        assert_eq!(item.cell_renderer(), [None, None]);
        assert!(item.create_children().is_none());
        assert!(!item.set_value("x"));
        assert!(!item.set_value_mapping(&ValueMapping::new()));
        assert!(!item.set_extra_value("x", true));
        assert!(item.insert().is_none());
        assert!(!item.move_up(0));
        assert!(item.objects_to_draw().is_none());
        assert_eq!(item.display_objects(), DisplayObjects::default());
        assert!(item.help_link().is_none());
        assert!(item.base_objects().is_empty());
    }

    #[test]
    fn test_has_value() {
        assert!(Valued("10").has_value("-"));
        assert!(!Valued("-").has_value("-"));
        assert!(!Valued("").has_value("-"));
        assert!(Valued("-").has_value("none"));
    }

    #[test]
    fn test_item_cast() {
        let item: Box<dyn TreeItem> = Box::new(Valued("1"));
        assert!(item_cast::<Bare>(item.as_ref()).is_none());
        assert_eq!(item_cast::<Valued>(item.as_ref()).map(|v| v.0), Some("1"));
        assert!(item.type_name().ends_with("Valued"));
    }

    #[test]
    fn test_same_item_type() {
        let a: Box<dyn TreeItem> = Box::new(Valued("1"));
        let b: Box<dyn TreeItem> = Box::new(Valued("2"));
        let c: Box<dyn TreeItem> = Box::new(Bare);
        assert!(same_item_type(a.as_ref(), b.as_ref()));
        assert!(!same_item_type(a.as_ref(), c.as_ref()));
    }
}
