//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use horizon_outline::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
use horizon_outline::{NodeId, Outline};

pub fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_outline=trace,horizon_outline_core=trace")
        .with_test_writer()
        .try_init();
}

/// A configurable item: a name, a value and optional children.
#[derive(Clone, Default)]
pub struct Node {
    pub name: String,
    pub value: String,
    pub children: Option<Vec<Node>>,
    pub movable: bool,
    /// Counts label reads, to observe how often the search touches a node.
    pub probe: Option<Arc<AtomicUsize>>,
}

impl Node {
    pub fn leaf(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn group(name: &str, children: Vec<Node>) -> Self {
        Self {
            name: name.to_string(),
            children: Some(children),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn movable(mut self) -> Self {
        self.movable = true;
        self
    }

    pub fn probed(mut self, probe: &Arc<AtomicUsize>) -> Self {
        self.probe = Some(probe.clone());
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                *child = child.clone().probed(probe);
            }
        }
        self
    }
}

impl ItemDisplay for Node {
    fn display_text(&self) -> Labels {
        if let Some(probe) = &self.probe {
            probe.fetch_add(1, Ordering::SeqCst);
        }
        [self.name.clone(), String::new()]
    }
}

impl ItemEdit for Node {
    fn edit_text(&self) -> Labels {
        [self.name.clone(), self.value.clone()]
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.value = value.to_string();
        true
    }
}

impl ItemHost for Node {}

impl ItemStructure for Node {
    fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
        self.children.as_ref().map(|children| {
            children
                .iter()
                .cloned()
                .map(|child| Box::new(child) as Box<dyn TreeItem>)
                .collect()
        })
    }

    fn is_movable(&self) -> bool {
        self.movable
    }

    fn move_up(&mut self, _index: usize) -> bool {
        true
    }

    fn move_down(&mut self, _index: usize) -> bool {
        true
    }
}

/// An item with no overrides at all.
pub struct Bare;

impl ItemDisplay for Bare {}
impl ItemEdit for Bare {}
impl ItemStructure for Bare {}
impl ItemHost for Bare {}

/// Build and link an outline from one root node.
pub fn build(root: Node) -> (Outline, NodeId) {
    let mut outline = Outline::new();
    let id = outline.insert_root(Box::new(root));
    outline.add_parent(id, None).unwrap();
    (outline, id)
}

/// Children of `id` as an owned list.
pub fn children(outline: &Outline, id: NodeId) -> Vec<NodeId> {
    outline.children(id).unwrap().unwrap_or_default().to_vec()
}
