//! Horizon Outline: capability-driven tree items for editable, searchable
//! tree views.
//!
//! A domain type becomes a tree item by implementing the capability traits in
//! [`item`]. Each trait has inert defaults, so a type opts into exactly what
//! it supports. An [`Outline`] owns the items, builds their children, gates
//! every structural edit on the item's capabilities, and runs the cached
//! search that decides which rows a view shows.
//!
//! - [`item`] - the item contract ([`TreeItem`] and its parts)
//! - [`Outline`] - the tree, its editing and state operations
//! - [`Outline::add_parent`] - parent linking
//! - [`Outline::search`] / [`Outline::filter`] - the search engine
//! - [`SharedOutline`] - `RwLock`-guarded access from several threads
//! - [`debug`] - text rendering for debugging
//!
//! # Example
//!
//! ```
//! use horizon_outline::item::{ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels, TreeItem};
//! use horizon_outline::{FoundItems, Outline};
//!
//! struct Mode(&'static str, Vec<&'static str>);
//! struct Step(&'static str);
//!
//! impl ItemDisplay for Mode {
//!     fn display_text(&self) -> Labels {
//!         [self.0.to_string(), String::new()]
//!     }
//! }
//! impl ItemEdit for Mode {}
//! impl ItemHost for Mode {}
//! impl ItemStructure for Mode {
//!     fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
//!         Some(self.1.iter().map(|&s| Box::new(Step(s)) as Box<dyn TreeItem>).collect())
//!     }
//! }
//!
//! impl ItemDisplay for Step {}
//! impl ItemEdit for Step {
//!     fn edit_text(&self) -> Labels {
//!         ["Step".to_string(), self.0.to_string()]
//!     }
//! }
//! impl ItemHost for Step {}
//! impl ItemStructure for Step {
//!     fn is_movable(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut outline = Outline::new();
//! let washing = outline.insert_root(Box::new(Mode("Washing", vec!["Fill", "Drain"])));
//! outline.link_all().unwrap();
//!
//! let mut found = FoundItems::new();
//! let rows = outline.visible_nodes(washing, "drain", true, &mut found);
//! assert_eq!(rows.len(), 2); // the mode and the matching step
//! ```

mod capabilities;
mod config;
pub mod debug;
mod filter;
pub mod item;
mod link;
mod outline;
mod shared;

pub use capabilities::Capabilities;
pub use config::{OutlineConfig, DEFAULT_EMPTY_VALUE};
pub use debug::{OutlineTreeDebug, TreeFormatOptions, TreeStyle};
pub use filter::{FilterState, FoundItems};
pub use item::{item_cast, item_cast_mut, TreeItem};
pub use outline::Outline;
pub use shared::SharedOutline;

pub use horizon_outline_core::{HandlerId, NodeId, OutlineError, Result};
