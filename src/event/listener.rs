//! Named callback listeners.
//!
//! [`Listeners`] is the notification primitive used where a signal bus would
//! otherwise sit: a component that announces `resize`, `changed`, or
//! `value-changed` state transitions owns one `Listeners` per signal, and
//! interested parties register callbacks under a caller-chosen handle. The
//! handle makes disconnection explicit: a container that subscribed to a
//! child's visibility can cleanly unsubscribe when the child is removed.

use std::fmt;

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

/// A set of callbacks registered under string handles, invoked in
/// registration order by [`Listeners::emit`].
///
/// Emission order is registration order. Connecting under an existing handle
/// replaces the previous callback for that handle.
pub struct Listeners<T> {
    slots: Vec<(String, Box<dyn FnMut(&T)>)>,
}

impl<T> Listeners<T> {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Register `callback` under `handle`, replacing any callback previously
    /// registered under the same handle.
    pub fn connect(&mut self, handle: &str, callback: impl FnMut(&T) + 'static) {
        if let Some(slot) = self.slots.iter_mut().find(|(h, _)| h == handle) {
            slot.1 = Box::new(callback);
        } else {
            self.slots.push((handle.to_owned(), Box::new(callback)));
        }
    }

    /// Remove the callback registered under `handle`.
    ///
    /// Returns `true` if a callback was removed.
    pub fn disconnect(&mut self, handle: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(h, _)| h != handle);
        self.slots.len() != before
    }

    /// Invoke every registered callback with `arg`, in registration order.
    pub fn emit(&mut self, arg: &T) {
        for (_, callback) in &mut self.slots {
            callback(arg);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handles: Vec<&str> = self.slots.iter().map(|(h, _)| h.as_str()).collect();
        f.debug_struct("Listeners").field("handles", &handles).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
