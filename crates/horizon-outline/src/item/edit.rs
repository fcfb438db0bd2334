//! In-place editing of an item's value.

use std::collections::BTreeMap;

use super::display::{empty_labels, Labels};

/// Which of the two columns accept edits, as column indices.
///
/// `[-1, -1]` means neither column is editable.
pub type EditablePart = [i32; 2];

/// The editable part of an item that cannot be edited.
pub const NOT_EDITABLE: EditablePart = [-1, -1];

/// Payload of a mapping edit: a key mapped to a list of indices.
pub type ValueMapping = BTreeMap<i32, Vec<i32>>;

/// Editing hooks.
///
/// The `set_*` methods validate and apply an edit, returning whether it was
/// accepted. The defaults reject everything without touching any state.
pub trait ItemEdit {
    /// Whether the row can be edited at all.
    fn is_editable(&self) -> bool {
        false
    }

    /// Editable columns.
    fn editable_part(&self) -> EditablePart {
        NOT_EDITABLE
    }

    /// Text shown in the editor. Column 1 holds the item's value.
    fn edit_text(&self) -> Labels {
        empty_labels()
    }

    /// Apply a textual edit.
    fn set_value(&mut self, _value: &str) -> bool {
        false
    }

    /// Apply a mapping edit.
    fn set_value_mapping(&mut self, _mapping: &ValueMapping) -> bool {
        false
    }

    /// Apply an edit to the main or the extra value.
    fn set_extra_value(&mut self, _value: &str, _is_extra: bool) -> bool {
        false
    }

    /// The value is a boolean shown as a check box.
    fn is_bool_parameter(&self) -> bool {
        false
    }

    /// The value is picked from the host's device list.
    fn uses_device_list(&self) -> bool {
        false
    }

    /// The value is picked from a local restriction list.
    fn uses_local_restriction(&self) -> bool {
        false
    }

    /// The item refers to a base object.
    fn contains_base_object(&self) -> bool {
        false
    }

    /// Names of the base objects the value can refer to.
    fn base_objects(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether the item's own value is set.
    ///
    /// The default treats edit column 1 as the value: it is set when it is
    /// non-empty and differs from `empty_value`. Children are not considered
    /// here.
    fn has_value(&self, empty_value: &str) -> bool {
        let [_, value] = self.edit_text();
        !value.is_empty() && value != empty_value
    }
}
