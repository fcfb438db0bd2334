//! Read-only row data shown by the tree view.

/// A two-column label: column 0 is the name, column 1 the value.
pub type Labels = [String; 2];

/// Returns `["", ""]`, the label of an item that shows nothing.
pub fn empty_labels() -> Labels {
    [String::new(), String::new()]
}

/// Icon shown next to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageIndex {
    /// No icon.
    #[default]
    None,
    /// A grouping node.
    Folder,
    /// A technological object.
    Object,
    /// An operating mode.
    Mode,
    /// A step inside a mode.
    Step,
    /// An action inside a step.
    Action,
    /// A single parameter.
    Parameter,
    /// A property of an object.
    Property,
    /// A device reference.
    Device,
    /// A restriction list.
    Restriction,
    /// The row needs attention.
    Warning,
}

/// Per-column editor hint for the rendering widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRenderer {
    /// Plain text field.
    Text,
    /// Boolean check box.
    CheckBox,
    /// Drop-down list of fixed values.
    ComboBox,
    /// Multi-line text editor.
    MultilineText,
    /// Device picker.
    DeviceList,
}

/// What the tree view draws for an item.
///
/// Every method has an inert default, so an item only overrides what it
/// actually shows.
pub trait ItemDisplay {
    /// Text shown in the two columns.
    fn display_text(&self) -> Labels {
        empty_labels()
    }

    /// Icon for the row.
    fn image_index(&self) -> ImageIndex {
        ImageIndex::None
    }

    /// Editor hints for the two columns.
    fn cell_renderer(&self) -> [Option<CellRenderer>; 2] {
        [None, None]
    }

    /// Page in the help system describing this item.
    fn help_link(&self) -> Option<String> {
        None
    }
}
