//! Snapshot of everything a node currently allows.

/// Capability flags of one node, collected from its item and runtime state.
///
/// Views read this once per row instead of querying each flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The value can be edited.
    pub editable: bool,
    /// The node can be deleted.
    pub deletable: bool,
    /// The node can be copied.
    pub copyable: bool,
    /// The node can be moved among its siblings.
    pub movable: bool,
    /// The node can be replaced.
    pub replaceable: bool,
    /// New children can be inserted.
    pub insertable: bool,
    /// Copies can be pasted as children.
    pub insertable_copy: bool,
    /// The node can be cut.
    pub cuttable: bool,
    /// The node draws on the host page.
    pub draw_on_host_page: bool,
    /// The value comes from the device list.
    pub uses_device_list: bool,
    /// The value comes from a local restriction list.
    pub uses_local_restriction: bool,
    /// The value is a boolean.
    pub bool_parameter: bool,
    /// The node is a top-level domain object.
    pub main_object: bool,
    /// The node is an operating mode.
    pub mode: bool,
    /// Deleting asks for confirmation.
    pub show_warning_before_delete: bool,
    /// Edits rebuild the parent.
    pub need_rebuild_parent: bool,
    /// The node should be shown disabled.
    pub need_disable: bool,
    /// The node is currently disabled.
    pub disabled: bool,
}

impl Capabilities {
    /// Creates a snapshot with every flag off.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if any structural edit is allowed.
    pub fn any_structural(&self) -> bool {
        self.deletable
            || self.copyable
            || self.movable
            || self.replaceable
            || self.insertable
            || self.insertable_copy
            || self.cuttable
    }

    /// Sets the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the deletable flag.
    pub fn with_deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    /// Sets the movable flag.
    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none() {
        let caps = Capabilities::none();
        assert!(!caps.any_structural());
        assert!(!caps.editable);
        assert!(!caps.disabled);
    }

    #[test]
    fn test_builders() {
        let caps = Capabilities::none().with_movable(true).with_disabled(true);
        assert!(caps.any_structural());
        assert!(caps.disabled);
        assert!(!caps.editable);
    }
}
