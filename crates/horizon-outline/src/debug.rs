//! Text rendering of an outline for debugging.
//!
//! ```
//! use horizon_outline::debug::{OutlineTreeDebug, TreeFormatOptions};
//! use horizon_outline::Outline;
//!
//! let outline = Outline::new();
//! let debug = OutlineTreeDebug::with_options(TreeFormatOptions::minimal());
//! assert!(debug.format_all(&outline).contains("(empty)"));
//! ```

use std::fmt;

use horizon_outline_core::{NodeId, OutlineError, Result};

use crate::filter::{FilterState, FoundItems};
use crate::outline::Outline;

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to show item type names.
    pub show_types: bool,
    /// Whether to show the cached filter state.
    pub show_filter_state: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            show_filter_state: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for inspecting a search session.
    pub fn detailed() -> Self {
        Self {
            show_filter_state: true,
            ..Default::default()
        }
    }

    /// Labels only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_filter_state: false,
            ..Default::default()
        }
    }

    /// Sets the tree style.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the maximum depth.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Debug utility for visualizing an outline.
#[derive(Debug, Clone, Default)]
pub struct OutlineTreeDebug {
    options: TreeFormatOptions,
}

impl OutlineTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root of the outline.
    pub fn format_all(&self, outline: &Outline) -> String {
        let mut output = format!("Outline ({} total nodes):\n", outline.len());
        if outline.roots().is_empty() {
            output.push_str("  (empty)\n");
        }
        for &root in outline.roots() {
            output.push_str(&self.render(outline, root, None).to_string());
        }
        output
    }

    /// Format the subtree under `root`.
    pub fn format_subtree(&self, outline: &Outline, root: NodeId) -> Result<String> {
        self.checked(outline, root, None)
    }

    /// Format the subtree under `root`, starring the nodes in `found`.
    pub fn format_search(
        &self,
        outline: &Outline,
        root: NodeId,
        found: &FoundItems,
    ) -> Result<String> {
        self.checked(outline, root, Some(found))
    }

    fn checked(
        &self,
        outline: &Outline,
        root: NodeId,
        found: Option<&FoundItems>,
    ) -> Result<String> {
        if !outline.contains(root) {
            return Err(OutlineError::InvalidNodeId);
        }
        Ok(self.render(outline, root, found).to_string())
    }

    fn render<'a>(
        &'a self,
        outline: &'a Outline,
        root: NodeId,
        found: Option<&'a FoundItems>,
    ) -> SubtreeDisplay<'a> {
        SubtreeDisplay {
            options: &self.options,
            outline,
            root,
            found,
        }
    }
}

struct SubtreeDisplay<'a> {
    options: &'a TreeFormatOptions,
    outline: &'a Outline,
    root: NodeId,
    found: Option<&'a FoundItems>,
}

impl SubtreeDisplay<'_> {
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
        is_last: bool,
    ) -> fmt::Result {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let Some(item) = self.outline.item(id) else {
            return Ok(());
        };

        f.write_str(&self.build_prefix(depth, is_last))?;

        let [name, value] = item.display_text();
        f.write_str(if name.is_empty() { "(unnamed)" } else { name.as_str() })?;
        if !value.is_empty() {
            write!(f, " = {value}")?;
        }

        if self.options.show_ids {
            write!(f, " [{id:?}]")?;
        }
        if self.options.show_types {
            let type_name = item.type_name();
            let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
            write!(f, " ({short_type})")?;
        }
        if self.options.show_filter_state {
            let state = match self.outline.filter_state(id) {
                FilterState::Unknown => "?",
                FilterState::Matched => "shown",
                FilterState::NotMatched => "hidden",
            };
            write!(f, " {{{state}}}")?;
        }
        if self.found.is_some_and(|found| found.contains(id)) {
            f.write_str(" *")?;
        }
        f.write_str("\n")?;

        let children = self.outline.children(id).ok().flatten().unwrap_or(&[]);
        for (i, &child) in children.iter().enumerate() {
            self.write_node(f, child, depth + 1, i + 1 == children.len())?;
        }
        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

impl fmt::Display for SubtreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, 0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};

    struct Named(&'static str, &'static [&'static str]);

    impl ItemDisplay for Named {
        fn display_text(&self) -> Labels {
            [self.0.to_string(), String::new()]
        }
    }
    impl ItemEdit for Named {
        fn edit_text(&self) -> Labels {
            [self.0.to_string(), "1".to_string()]
        }
    }
    impl ItemHost for Named {}
    impl ItemStructure for Named {
        fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
            if self.1.is_empty() {
                return None;
            }
            Some(
                self.1
                    .iter()
                    .map(|&name| Box::new(Named(name, &[])) as Box<dyn TreeItem>)
                    .collect(),
            )
        }
    }

    fn sample() -> (Outline, NodeId) {
        let mut outline = Outline::new();
        let root = outline.insert_root(Box::new(Named("window", &["button1", "button2"])));
        outline.link_all().unwrap();
        (outline, root)
    }

    #[test]
    fn test_format_hierarchy() {
        let (outline, root) = sample();
        let output = OutlineTreeDebug::new().format_subtree(&outline, root).unwrap();

        assert!(output.contains("window"));
        assert!(output.contains("\u{251c}\u{2500}\u{2500} button1"));
        assert!(output.contains("\u{2514}\u{2500}\u{2500} button2"));
        assert!(output.contains("(Named)"));
    }

    #[test]
    fn test_format_minimal() {
        let (outline, root) = sample();
        let debug = OutlineTreeDebug::with_options(TreeFormatOptions::minimal());
        let output = debug.format_subtree(&outline, root).unwrap();

        assert!(!output.contains("Named"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_format_max_depth() {
        let (outline, root) = sample();
        let options = TreeFormatOptions::minimal().with_max_depth(Some(0));
        let output = OutlineTreeDebug::with_options(options)
            .format_subtree(&outline, root)
            .unwrap();
        assert_eq!(output, "window\n");
    }

    #[test]
    fn test_format_search_marks_found() {
        let (mut outline, root) = sample();
        let mut found = FoundItems::new();
        outline.search(root, "button2", true, &mut found);

        let options = TreeFormatOptions::detailed().with_style(TreeStyle::Ascii);
        let output = OutlineTreeDebug::with_options(options)
            .format_search(&outline, root, &found)
            .unwrap();

        assert!(output.contains("`-- button2"));
        assert!(output.lines().any(|l| l.contains("button2") && l.ends_with('*')));
        assert!(output.lines().any(|l| l.contains("button1") && l.contains("{hidden}")));
    }

    #[test]
    fn test_format_invalid_root() {
        let (mut outline, root) = sample();
        outline.remove_root(root).unwrap();
        assert_eq!(
            OutlineTreeDebug::new().format_subtree(&outline, root),
            Err(OutlineError::InvalidNodeId)
        );
        assert!(OutlineTreeDebug::new().format_all(&outline).contains("(empty)"));
    }
}
