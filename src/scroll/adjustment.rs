//! Scroll-state adjustments.
//!
//! An [`Adjustment`] is the record shared between a scrollable area and its
//! scrollbar: current value, bounds, increments, and page size for one axis.
//! `upper` is the maximum scroll offset (content size minus visible size),
//! not the total content size. Listeners observe two signals with
//! exactly-once delivery per state transition: `changed` when any of the six
//! fields moves, `value-changed` when the value moves.
//!
//! A viewport axis and its scrollbar share one adjustment through
//! `Rc<RefCell<Adjustment>>`; the layout model is single-threaded and
//! cooperative, so no further synchronization exists.

use crate::event::Listeners;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// When a scrollbar should be shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// The scrollbar is always present.
    #[default]
    Always,
    /// The scrollbar is never present.
    Never,
    /// The scrollbar is present only when there is scrollable range.
    Automatic,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// A snapshot of all six adjustment fields.
///
/// Invariant: `lower <= value <= upper`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Settings {
    pub value: i32,
    pub lower: i32,
    pub upper: i32,
    pub step_increment: i32,
    pub page_increment: i32,
    pub page_size: i32,
}

impl Settings {
    /// Clamp `value` into `[lower, upper]`.
    fn clamp_value(&self, value: i32) -> i32 {
        value.max(self.lower).min(self.upper.max(self.lower))
    }
}

// ---------------------------------------------------------------------------
// Adjustment
// ---------------------------------------------------------------------------

/// One scrollable axis: value, bounds, increments, and change listeners.
pub struct Adjustment {
    settings: Settings,
    changed: Listeners<Settings>,
    value_changed: Listeners<Settings>,
}

impl Adjustment {
    /// Create an adjustment; `value` is clamped into `[lower, upper]`.
    pub fn new(
        value: i32,
        lower: i32,
        upper: i32,
        step_increment: i32,
        page_increment: i32,
        page_size: i32,
    ) -> Self {
        let mut settings = Settings {
            value: 0,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size,
        };
        settings.value = settings.clamp_value(value);
        Self {
            settings,
            changed: Listeners::new(),
            value_changed: Listeners::new(),
        }
    }

    /// A fully collapsed adjustment: every field zero, nothing to scroll.
    pub fn collapsed() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Snapshot of all six fields.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// The current value.
    pub fn value(&self) -> i32 {
        self.settings.value
    }

    /// Set the value, clamped into `[lower, upper]`.
    ///
    /// Emits `value-changed` only if the stored value actually moved.
    pub fn set_value(&mut self, value: i32) {
        let clamped = self.settings.clamp_value(value);
        if clamped != self.settings.value {
            self.settings.value = clamped;
            let snapshot = self.settings;
            self.value_changed.emit(&snapshot);
        }
    }

    /// The `(lower, upper)` bounds.
    pub fn range(&self) -> (i32, i32) {
        (self.settings.lower, self.settings.upper)
    }

    /// The `(step, page)` increments.
    pub fn increments(&self) -> (i32, i32) {
        (self.settings.step_increment, self.settings.page_increment)
    }

    /// The visible page size.
    pub fn page_size(&self) -> i32 {
        self.settings.page_size
    }

    /// Atomically replace all six fields; `value` is clamped first.
    ///
    /// Emits `changed` exactly once, and only if any field differs from its
    /// previous value: calling `configure` twice with identical arguments
    /// notifies once.
    pub fn configure(
        &mut self,
        value: i32,
        lower: i32,
        upper: i32,
        step_increment: i32,
        page_increment: i32,
        page_size: i32,
    ) {
        let mut next = Settings {
            value: 0,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size,
        };
        next.value = next.clamp_value(value);
        if next != self.settings {
            self.settings = next;
            self.changed.emit(&next);
        }
    }

    /// Whether there is nothing to scroll (`upper == lower`).
    ///
    /// Scrollbar visibility under `Policy::Automatic` double-checks a moot
    /// adjustment against the raw child-vs-allocation sizes, guarding against
    /// stale adjustment state.
    pub fn moot(&self) -> bool {
        self.settings.upper == self.settings.lower
    }

    /// Whether a scrollbar driven by this adjustment should show.
    pub fn show_by_policy(&self, policy: Policy) -> bool {
        match policy {
            Policy::Always => true,
            Policy::Never => false,
            Policy::Automatic => self.settings.upper > self.settings.lower,
        }
    }

    /// Register a callback for the `changed` signal under `handle`.
    pub fn connect_changed(&mut self, handle: &str, callback: impl FnMut(&Settings) + 'static) {
        self.changed.connect(handle, callback);
    }

    /// Register a callback for the `value-changed` signal under `handle`.
    pub fn connect_value_changed(
        &mut self,
        handle: &str,
        callback: impl FnMut(&Settings) + 'static,
    ) {
        self.value_changed.connect(handle, callback);
    }

    /// Remove the `changed` callback registered under `handle`.
    pub fn disconnect_changed(&mut self, handle: &str) -> bool {
        self.changed.disconnect(handle)
    }

    /// Remove the `value-changed` callback registered under `handle`.
    pub fn disconnect_value_changed(&mut self, handle: &str) -> bool {
        self.value_changed.disconnect(handle)
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::collapsed()
    }
}

impl std::fmt::Debug for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adjustment").field("settings", &self.settings).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
