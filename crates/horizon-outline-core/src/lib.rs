//! Core systems for Horizon Outline.
//!
//! This crate provides the infrastructure the outline tree is built on:
//!
//! - **Structure**: an arena of nodes with ordered, optional children and
//!   non-owning parent links
//! - **Handler Slot**: single-callback change notification
//! - **Errors**: the error type returned by structural operations
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Structure Example
//!
//! ```
//! use horizon_outline_core::{OutlineError, Structure};
//!
//! let mut structure = Structure::new();
//! let root = structure.insert_root("Project");
//!
//! // Leaves do not support children until asked to.
//! assert!(matches!(
//!     structure.append_child(root, "Unit"),
//!     Err(OutlineError::ChildrenUnsupported(_))
//! ));
//!
//! structure.enable_children(root).unwrap();
//! let unit = structure.append_child(root, "Unit").unwrap();
//! assert_eq!(structure.get(unit), Some(&"Unit"));
//! ```

mod error;
pub mod logging;
pub mod slot;
pub mod structure;

pub use error::{OutlineError, Result};
pub use logging::PerfSpan;
pub use slot::{HandlerId, HandlerSlot};
pub use structure::{NodeId, Structure};
