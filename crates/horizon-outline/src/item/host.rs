//! Integration points with the host design tool.

use super::TreeItem;

/// How a device is highlighted on a host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    /// Full green frame.
    GreenBox,
    /// Green frame over the upper half.
    GreenUpperBox,
    /// Green frame over the lower half.
    GreenLowerBox,
    /// Full red frame.
    RedBox,
    /// Green and red frame.
    GreenRedBox,
    /// Remove any highlight.
    NoDraw,
}

/// One draw instruction for a host page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawInfo {
    /// Name of the device to highlight.
    pub device: String,
    /// Highlight style.
    pub style: DrawStyle,
}

impl DrawInfo {
    /// Create a draw instruction.
    pub fn new(device: impl Into<String>, style: DrawStyle) -> Self {
        Self {
            device: device.into(),
            style,
        }
    }
}

/// Device filters the host applies when the item is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayObjects {
    /// Device types to show, or all when `None`.
    pub device_types: Option<Vec<String>>,
    /// Device sub-types to show, or all when `None`.
    pub device_sub_types: Option<Vec<String>>,
    /// Show device parameters too.
    pub display_parameters: bool,
}

/// Host page drawing and generic-object synchronisation.
pub trait ItemHost {
    /// The item draws on the host page when selected.
    fn is_draw_on_host_page(&self) -> bool {
        false
    }

    /// What to draw on the host page.
    fn objects_to_draw(&self) -> Option<Vec<DrawInfo>> {
        None
    }

    /// Device filters for the host page.
    fn display_objects(&self) -> DisplayObjects {
        DisplayObjects::default()
    }

    /// The item is a top-level domain object.
    fn is_main_object(&self) -> bool {
        false
    }

    /// The item is an operating mode.
    fn is_mode(&self) -> bool {
        false
    }

    /// The item asks to be shown disabled.
    fn need_disable(&self) -> bool {
        false
    }

    /// Update this item from a generic template item.
    fn update_on_generic(&mut self, _generic: &dyn TreeItem) {}

    /// Turn this item into a generic template built from `items`.
    fn create_generic_from(&mut self, _items: &[&dyn TreeItem]) {}

    /// Update after the generic template this item followed was deleted.
    fn update_on_delete_generic(&mut self) {}
}
