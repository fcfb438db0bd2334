//! Single-slot change notification.
//!
//! A [`HandlerSlot`] holds at most one callback. Registering a handler
//! replaces whatever was registered before; it never accumulates. This is the
//! notification shape tree views expect for "value changed": the view that
//! currently shows the row owns the one handler.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_outline_core::HandlerSlot;
//!
//! let slot = HandlerSlot::<u32>::new();
//! let calls = Arc::new(AtomicUsize::new(0));
//!
//! let calls_clone = calls.clone();
//! let first = slot.set(move |_| {
//!     calls_clone.fetch_add(1, Ordering::SeqCst);
//! });
//! assert!(slot.emit(&7));
//!
//! // A second registration replaces the first.
//! let second = slot.set(|_| {});
//! assert!(!slot.remove(first));
//! assert!(slot.remove(second));
//! assert!(!slot.emit(&7));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// Identifies one registration in a [`HandlerSlot`].
///
/// IDs are unique for the lifetime of the process, so an ID from a replaced
/// registration never matches a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    fn next() -> Self {
        static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of this ID.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

type Handler<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// An optional single callback with replace-on-register semantics.
pub struct HandlerSlot<Args> {
    handler: Mutex<Option<(HandlerId, Handler<Args>)>>,
    blocked: AtomicBool,
}

impl<Args> Default for HandlerSlot<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> HandlerSlot<Args> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(None),
            blocked: AtomicBool::new(false),
        }
    }

    /// Register `handler`, replacing any previous one.
    pub fn set<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = HandlerId::next();
        let previous = self.handler.lock().replace((id, Arc::new(handler)));
        tracing::trace!(
            target: targets::SLOT,
            ?id,
            replaced = ?previous.as_ref().map(|(old, _)| *old),
            "handler registered"
        );
        id
    }

    /// Remove the handler if `id` is the current registration.
    ///
    /// Returns `false` for a stale or unknown ID, leaving the slot untouched.
    pub fn remove(&self, id: HandlerId) -> bool {
        let mut handler = self.handler.lock();
        match handler.as_ref() {
            Some((current, _)) if *current == id => {
                *handler = None;
                true
            }
            _ => false,
        }
    }

    /// Remove whatever handler is registered.
    pub fn clear(&self) {
        self.handler.lock().take();
    }

    /// Check if a handler is registered.
    pub fn is_set(&self) -> bool {
        self.handler.lock().is_some()
    }

    /// ID of the current registration.
    pub fn current(&self) -> Option<HandlerId> {
        self.handler.lock().as_ref().map(|(id, _)| *id)
    }

    /// Block emission temporarily.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Invoke the registered handler, if any.
    ///
    /// The lock is released before the handler runs, so a handler may
    /// re-register or remove itself. Returns whether a handler was invoked.
    pub fn emit(&self, args: &Args) -> bool {
        if self.is_blocked() {
            tracing::trace!(target: targets::SLOT, "slot blocked, skipping emit");
            return false;
        }

        let handler = self.handler.lock().as_ref().map(|(_, h)| h.clone());
        match handler {
            Some(handler) => {
                handler(args);
                true
            }
            None => false,
        }
    }
}

impl<Args> std::fmt::Debug for HandlerSlot<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("current", &self.current())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

static_assertions::assert_impl_all!(HandlerSlot<u64>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_handler() {
        let slot = HandlerSlot::<i32>::new();
        assert!(!slot.is_set());
        assert!(!slot.emit(&1));
    }

    #[test]
    fn test_set_replaces() {
        let slot = HandlerSlot::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let first = received.clone();
        slot.set(move |&v| first.lock().push(("first", v)));
        let second = received.clone();
        let id = slot.set(move |&v| second.lock().push(("second", v)));

        assert!(slot.emit(&5));
        assert_eq!(*received.lock(), vec![("second", 5)]);
        assert_eq!(slot.current(), Some(id));
    }

    #[test]
    fn test_remove_stale_is_noop() {
        let slot = HandlerSlot::<i32>::new();
        let stale = slot.set(|_| {});
        let current = slot.set(|_| {});

        assert!(!slot.remove(stale));
        assert!(slot.is_set());
        assert!(slot.remove(current));
        assert!(!slot.is_set());
        assert!(!slot.remove(current));
    }

    #[test]
    fn test_blocked() {
        let slot = HandlerSlot::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        slot.set(move |&v| received_clone.lock().push(v));

        slot.emit(&1);
        slot.set_blocked(true);
        assert!(!slot.emit(&2));
        slot.set_blocked(false);
        slot.emit(&3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_handler_can_clear_slot() {
        let slot = Arc::new(HandlerSlot::<i32>::new());
        let weak = Arc::downgrade(&slot);
        slot.set(move |_| {
            if let Some(slot) = weak.upgrade() {
                slot.clear();
            }
        });

        assert!(slot.emit(&0));
        assert!(!slot.is_set());
    }
}
