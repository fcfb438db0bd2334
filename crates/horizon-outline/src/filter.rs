//! Cached, ancestor-propagating text search.
//!
//! A search session walks a subtree once in pre-order. Each node resolves to
//! [`FilterState::Matched`] or [`FilterState::NotMatched`] and keeps that
//! answer until the next [`Outline::reset_filter`], so repeated visibility
//! queries from the view cost nothing.
//!
//! A node is shown when:
//!
//! - it, a descendant, or an ancestor matches the search text, and
//! - it or a descendant has a value, unless empty nodes are not hidden.
//!
//! With empty search text a node is shown iff it is filled.
//!
//! # Example
//!
//! ```
//! use horizon_outline::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
//! use horizon_outline::{FoundItems, Outline};
//!
//! struct Row(&'static str, &'static str, Vec<(&'static str, &'static str)>);
//!
//! impl ItemDisplay for Row {}
//! impl ItemEdit for Row {
//!     fn edit_text(&self) -> Labels {
//!         [self.0.to_string(), self.1.to_string()]
//!     }
//! }
//! impl ItemHost for Row {}
//! impl ItemStructure for Row {
//!     fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
//!         Some(
//!             self.2
//!                 .iter()
//!                 .map(|&(n, v)| Box::new(Row(n, v, Vec::new())) as Box<dyn TreeItem>)
//!                 .collect(),
//!         )
//!     }
//! }
//!
//! let mut outline = Outline::new();
//! let root = outline.insert_root(Box::new(Row("Tank", "", vec![("Level", "40"), ("Valve", "-")])));
//! outline.link_all().unwrap();
//!
//! let mut found = FoundItems::new();
//! assert!(outline.search(root, "level", true, &mut found));
//! assert_eq!(found.len(), 1);
//! ```

use std::collections::HashSet;

use horizon_outline_core::logging::{span_names, targets};
use horizon_outline_core::{NodeId, PerfSpan, Result};

use crate::outline::Outline;

/// Cached result of filtering one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterState {
    /// Not evaluated since the last reset.
    #[default]
    Unknown,
    /// Shown for the current search.
    Matched,
    /// Hidden for the current search.
    NotMatched,
}

impl FilterState {
    /// The cached visibility, or `None` when unknown.
    pub fn resolved(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Matched => Some(true),
            Self::NotMatched => Some(false),
        }
    }

    /// Returns `true` unless the state is [`FilterState::Unknown`].
    pub fn is_resolved(self) -> bool {
        self != Self::Unknown
    }
}

impl From<bool> for FilterState {
    fn from(visible: bool) -> Self {
        if visible {
            Self::Matched
        } else {
            Self::NotMatched
        }
    }
}

/// Ordered, de-duplicated list of nodes that matched a search.
///
/// Owned by the caller and reused across sessions; [`Outline::search`]
/// clears it at the start of each session.
#[derive(Debug, Clone, Default)]
pub struct FoundItems {
    order: Vec<NodeId>,
    seen: HashSet<NodeId>,
}

impl FoundItems {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Check if `id` was found.
    pub fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    /// Number of found nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget every found node.
    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    /// Found nodes in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Found nodes as a slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }
}

impl<'a> IntoIterator for &'a FoundItems {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Parameters shared by every node of one filter pass.
struct Pass<'a> {
    /// Upper-cased, optionally trimmed search text.
    needle: String,
    /// The raw search text was empty.
    empty: bool,
    hide_empty: bool,
    found: &'a mut FoundItems,
}

/// A node whose children are still being filtered.
struct Frame {
    id: NodeId,
    filled: bool,
    ancestor_match: bool,
    children: Vec<NodeId>,
    next: usize,
    child_any: bool,
}

enum Visit {
    Resolved(bool),
    Open(Frame),
}

impl Outline {
    /// Reset the filter state of `id` and its whole subtree.
    pub fn reset_filter(&mut self, id: NodeId) -> Result<()> {
        let nodes = self.structure.depth_first_preorder(id)?;
        for node in &nodes {
            if let Some(entry) = self.structure.get_mut(*node) {
                entry.state.filter = FilterState::Unknown;
                entry.state.ancestor_match = false;
                entry.state.filled = None;
            }
        }
        tracing::trace!(target: targets::FILTER, ?id, count = nodes.len(), "filter reset");
        Ok(())
    }

    /// Decide whether `id` is shown for `search`, caching the answer.
    ///
    /// Matches are recorded in `found`. The ancestor flag is inherited from
    /// the linked parent, so parents must be filtered before their children.
    pub fn filter(
        &mut self,
        id: NodeId,
        search: &str,
        hide_empty: bool,
        found: &mut FoundItems,
    ) -> bool {
        let inherited = self
            .structure
            .parent(id)
            .ok()
            .flatten()
            .and_then(|parent| self.entry(parent))
            .is_some_and(|entry| entry.state.ancestor_match);
        let mut pass = self.pass(search, hide_empty, found);
        self.filter_node(id, inherited, &mut pass)
    }

    fn pass<'a>(&self, search: &str, hide_empty: bool, found: &'a mut FoundItems) -> Pass<'a> {
        Pass {
            needle: self.normalize_search(search),
            empty: search.is_empty(),
            hide_empty,
            found,
        }
    }

    /// Filter `id` and its unresolved descendants with an explicit stack.
    fn filter_node(&mut self, id: NodeId, inherited: bool, pass: &mut Pass<'_>) -> bool {
        let mut stack = match self.visit(id, inherited, pass) {
            Visit::Resolved(visible) => return visible,
            Visit::Open(frame) => vec![frame],
        };
        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.children.get(frame.next) {
                frame.next += 1;
                let inherited = frame.ancestor_match;
                match self.visit(child, inherited, pass) {
                    Visit::Resolved(visible) => {
                        if let Some(frame) = stack.last_mut() {
                            frame.child_any |= visible;
                        }
                    }
                    Visit::Open(child_frame) => stack.push(child_frame),
                }
                continue;
            }

            let visible =
                (frame.child_any || frame.ancestor_match) && (frame.filled || !pass.hide_empty);
            let done = frame.id;
            stack.pop();
            self.set_filter_state(done, visible.into());
            match stack.last_mut() {
                Some(parent) => parent.child_any |= visible,
                None => return visible,
            }
        }
        false
    }

    /// Resolve `id` on its own, or open it for its children.
    fn visit(&mut self, id: NodeId, inherited: bool, pass: &mut Pass<'_>) -> Visit {
        let Some(entry) = self.entry(id) else {
            return Visit::Resolved(false);
        };
        if let Some(cached) = entry.state.filter.resolved() {
            return Visit::Resolved(cached);
        }

        let filled = self.filled_cached(id);
        if pass.empty {
            self.set_filter_state(id, filled.into());
            return Visit::Resolved(filled);
        }

        let mut ancestor_match = inherited;
        if self.matches(id, &pass.needle) && (filled || !pass.hide_empty) {
            if pass.found.insert(id) {
                tracing::trace!(target: targets::FILTER, ?id, "found");
            }
            ancestor_match = true;
        }
        if let Some(entry) = self.structure.get_mut(id) {
            entry.state.ancestor_match |= ancestor_match;
            ancestor_match = entry.state.ancestor_match;
        }

        let children = self
            .structure
            .children(id)
            .ok()
            .flatten()
            .map(<[NodeId]>::to_vec)
            .unwrap_or_default();
        Visit::Open(Frame {
            id,
            filled,
            ancestor_match,
            children,
            next: 0,
            child_any: false,
        })
    }

    fn set_filter_state(&mut self, id: NodeId, state: FilterState) {
        if let Some(entry) = self.structure.get_mut(id) {
            entry.state.filter = state;
        }
    }

    /// Case-insensitive substring test over both display and edit columns.
    pub fn contains_text(&self, id: NodeId, search: &str) -> bool {
        self.matches(id, &self.normalize_search(search))
    }

    fn normalize_search(&self, search: &str) -> String {
        if self.config().trim_search {
            search.trim().to_uppercase()
        } else {
            search.to_uppercase()
        }
    }

    fn matches(&self, id: NodeId, needle: &str) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        let [display_name, display_value] = item.display_text();
        let [edit_name, edit_value] = item.edit_text();
        [display_name, display_value, edit_name, edit_value]
            .iter()
            .any(|label| label.to_uppercase().contains(needle))
    }

    /// Whether `id` or any descendant has a value.
    ///
    /// Always reads the items, never the session cache.
    pub fn is_filled(&self, id: NodeId) -> bool {
        let empty_value = &self.config().empty_value;
        let mut pending = vec![id];
        while let Some(node) = pending.pop() {
            let Some(entry) = self.entry(node) else {
                continue;
            };
            if entry.item.has_value(empty_value) {
                return true;
            }
            if let Ok(Some(children)) = self.structure.children(node) {
                pending.extend_from_slice(children);
            }
        }
        false
    }

    /// [`Outline::is_filled`], remembered for the rest of the session.
    fn filled_cached(&mut self, id: NodeId) -> bool {
        let mut pending = vec![(id, false)];
        while let Some((node, expanded)) = pending.pop() {
            let Some(entry) = self.entry(node) else {
                continue;
            };
            if entry.state.filled.is_some() {
                continue;
            }
            let filled = if expanded {
                self.structure
                    .children(node)
                    .ok()
                    .flatten()
                    .is_some_and(|children| {
                        children.iter().any(|&child| {
                            self.entry(child).and_then(|entry| entry.state.filled) == Some(true)
                        })
                    })
            } else if entry.item.has_value(&self.config().empty_value) {
                true
            } else {
                pending.push((node, true));
                if let Ok(Some(children)) = self.structure.children(node) {
                    pending.extend(children.iter().map(|&child| (child, false)));
                }
                continue;
            };
            if let Some(entry) = self.structure.get_mut(node) {
                entry.state.filled = Some(filled);
            }
        }
        self.entry(id)
            .and_then(|entry| entry.state.filled)
            .unwrap_or(false)
    }

    /// Drop the remembered filled flag of `id` and its linked ancestors.
    pub(crate) fn forget_filled(&mut self, id: NodeId) {
        let mut nodes = self.ancestor_ids(id);
        nodes.push(id);
        for node in nodes {
            if let Some(entry) = self.structure.get_mut(node) {
                entry.state.filled = None;
            }
        }
    }

    /// The cached filter state of a node.
    pub fn filter_state(&self, id: NodeId) -> FilterState {
        self.entry(id)
            .map(|entry| entry.state.filter)
            .unwrap_or_default()
    }

    /// Whether the node or one of its ancestors matched in this session.
    pub fn ancestor_match(&self, id: NodeId) -> bool {
        self.entry(id).is_some_and(|entry| entry.state.ancestor_match)
    }

    /// Run one search session on `root`: reset, clear `found`, filter.
    ///
    /// `root` starts the session fresh: a match recorded on its ancestors by
    /// an earlier session is not inherited. Returns whether `root` is shown,
    /// and `false` for an unknown root.
    pub fn search(
        &mut self,
        root: NodeId,
        search: &str,
        hide_empty: bool,
        found: &mut FoundItems,
    ) -> bool {
        let _perf = PerfSpan::new(span_names::SEARCH);
        tracing::debug!(target: targets::FILTER, ?root, search, hide_empty, "search started");

        if let Err(error) = self.reset_filter(root) {
            tracing::debug!(target: targets::FILTER, ?root, %error, "search skipped");
            return false;
        }
        found.clear();
        let mut pass = self.pass(search, hide_empty, found);
        let visible = self.filter_node(root, false, &mut pass);

        tracing::debug!(
            target: targets::FILTER,
            ?root,
            visible,
            found = found.len(),
            "search finished"
        );
        visible
    }

    /// Run a search session and list the rows a view shows, in pre-order.
    ///
    /// Subtrees of hidden nodes are skipped.
    pub fn visible_nodes(
        &mut self,
        root: NodeId,
        search: &str,
        hide_empty: bool,
        found: &mut FoundItems,
    ) -> Vec<NodeId> {
        self.search(root, search, hide_empty, found);

        let mut visible = Vec::new();
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            if !self.filter(id, search, hide_empty, found) {
                continue;
            }
            visible.push(id);
            if let Ok(Some(children)) = self.structure.children(id) {
                pending.extend(children.iter().rev());
            }
        }
        visible
    }
}
