// SPDX-License-Identifier: MPL-2.0
//! Reference-counted scroll lock.
//!
//! The overlay manager takes one hold per stack entry and gives one back per
//! entry it removes, so the hold count always equals the stack depth. Page
//! scrolling is suppressed while at least one hold is outstanding.

/// Guard for page-scroll suppression shared by every open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollLock {
    /// Label applied to the page while the lock is held.
    class: String,
    holders: usize,
}

impl ScrollLock {
    /// Creates a released lock carrying the given label.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            holders: 0,
        }
    }

    /// Adds a hold. Returns `true` if this hold engaged the lock.
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Drops a hold. Returns `true` if this release disengaged the lock.
    ///
    /// Releasing an already released lock does nothing.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    /// Returns whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.holders > 0
    }

    /// Number of outstanding holds.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Label applied to the page while held.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Label to apply right now, if any.
    #[must_use]
    pub fn active_class(&self) -> Option<&str> {
        self.is_held().then_some(self.class.as_str())
    }
}
