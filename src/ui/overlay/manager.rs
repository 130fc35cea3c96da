// SPDX-License-Identifier: MPL-2.0
//! Overlay stack lifecycle management.
//!
//! The `Manager` keeps the ordered stack of open overlays, sequences their
//! open and close transitions with kind-specific timing, and owns the scroll
//! lock. The lock holds one count per stack entry, so page scrolling stays
//! suppressed until the last overlay has fully left the layout, whatever
//! order overlays are closed in.
//!
//! Reopening an overlay that is already on the stack pushes a second entry;
//! closing it removes every entry for that identifier.

use super::lock::ScrollLock;
use super::registry::{normalize_target, Registry};
use super::surface::{OverlayKind, OverlaySurface, Panel, Phase};
use crate::config::{
    DEFAULT_ALERT_DIM_CLOSE, DEFAULT_ALERT_OPEN_DELAY_MS, DEFAULT_BODY_LOCK_CLASS,
    DEFAULT_FULL_CLOSE_DELAY_MS, DEFAULT_FULL_OPEN_DELAY_MS,
};
use crate::timer::{TimerId, Timers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Runtime settings for the overlay stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySettings {
    /// Label applied to the page while any overlay is open.
    pub body_lock_class: String,
    /// Delay before an alert receives its opening transition.
    pub alert_open_delay: Duration,
    /// Delay before a full-page panel receives its opening transition.
    pub full_open_delay: Duration,
    /// Delay before a closed full-page panel leaves the layout.
    pub full_close_delay: Duration,
    /// Whether an alert closes when its backdrop is clicked.
    pub alert_dim_close: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            body_lock_class: DEFAULT_BODY_LOCK_CLASS.to_string(),
            alert_open_delay: Duration::from_millis(DEFAULT_ALERT_OPEN_DELAY_MS),
            full_open_delay: Duration::from_millis(DEFAULT_FULL_OPEN_DELAY_MS),
            full_close_delay: Duration::from_millis(DEFAULT_FULL_CLOSE_DELAY_MS),
            alert_dim_close: DEFAULT_ALERT_DIM_CLOSE,
        }
    }
}

impl OverlaySettings {
    /// Delay between `open` and the opening transition.
    #[must_use]
    pub fn open_delay(&self, kind: OverlayKind) -> Duration {
        match kind {
            OverlayKind::Plain => Duration::ZERO,
            OverlayKind::Alert => self.alert_open_delay,
            OverlayKind::FullPage => self.full_open_delay,
        }
    }

    /// Delay between `close` and finalization, `None` when immediate.
    #[must_use]
    pub fn close_delay(&self, kind: OverlayKind) -> Option<Duration> {
        match kind {
            OverlayKind::FullPage => Some(self.full_close_delay),
            OverlayKind::Plain | OverlayKind::Alert => None,
        }
    }
}

/// Messages for overlay state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the overlay with this target (`"id"` or `"#id"`).
    Open(String),
    /// Close the overlay with this target.
    Close(String),
    /// The backdrop of this overlay was clicked.
    Backdrop(String),
    /// Close the most recently opened overlay.
    CloseTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    Reveal(String),
    Finalize(String),
}

/// Timers currently owned by one overlay.
#[derive(Debug, Default)]
struct Pending {
    reveal: Option<TimerId>,
    finalize: Option<TimerId>,
}

/// Owns the overlay stack, the scroll lock and the transition timers.
#[derive(Debug)]
pub struct Manager<S = Panel> {
    registry: Registry<S>,
    /// Open identifiers in open order; may contain duplicates.
    stack: Vec<String>,
    lock: ScrollLock,
    settings: OverlaySettings,
    timers: Timers<Task>,
    pending: HashMap<String, Pending>,
}

impl<S: OverlaySurface> Manager<S> {
    /// Creates a manager with an empty registry.
    #[must_use]
    pub fn new(settings: OverlaySettings) -> Self {
        Self::with_registry(settings, Registry::new())
    }

    /// Creates a manager over already registered surfaces.
    #[must_use]
    pub fn with_registry(settings: OverlaySettings, registry: Registry<S>) -> Self {
        Self {
            registry,
            stack: Vec::new(),
            lock: ScrollLock::new(settings.body_lock_class.clone()),
            settings,
            timers: Timers::new(),
            pending: HashMap::new(),
        }
    }

    /// Registers a surface so it can be opened.
    ///
    /// Replacing a surface is refused while its identifier is on the stack,
    /// since the stack entries and lock holds belong to the current one.
    /// Returns whether the surface was registered.
    pub fn register(&mut self, surface: S) -> bool {
        if self.stack.iter().any(|entry| entry == surface.id()) {
            tracing::warn!(overlay = surface.id(), "refusing to replace an open overlay");
            return false;
        }
        self.registry.register(surface);
        true
    }

    /// Opens an overlay.
    ///
    /// Unknown targets are ignored. Returns whether the overlay was pushed.
    pub fn open(&mut self, target: &str, now: Instant) -> bool {
        let Some(id) = normalize_target(target) else {
            return false;
        };
        let Some(surface) = self.registry.get_mut(id) else {
            tracing::trace!(overlay = id, "open ignored, unknown overlay");
            return false;
        };

        let kind = surface.kind();
        surface.set_phase(Phase::Opening);

        // A pending reveal or finalization belongs to the previous transition.
        let pending = self.pending.entry(id.to_string()).or_default();
        for stale in [pending.reveal.take(), pending.finalize.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(stale);
        }
        let delay = self.settings.open_delay(kind);
        pending.reveal = Some(
            self.timers
                .schedule(now, delay, Task::Reveal(id.to_string())),
        );

        if self.lock.acquire() {
            tracing::debug!(class = self.lock.class(), "scroll lock engaged");
        }
        self.stack.push(id.to_string());

        tracing::debug!(overlay = id, %kind, depth = self.stack.len(), "overlay opening");
        true
    }

    /// Closes an overlay.
    ///
    /// Targets that are unknown, not on the stack, or already waiting for
    /// finalization are ignored. Full-page panels leave the layout after
    /// `full_close_delay`; other kinds leave at once.
    pub fn close(&mut self, target: &str, now: Instant) -> bool {
        let Some(id) = normalize_target(target) else {
            return false;
        };
        if !self.stack.iter().any(|entry| entry == id) {
            return false;
        }
        let Some(surface) = self.registry.get_mut(id) else {
            return false;
        };

        let pending = self.pending.entry(id.to_string()).or_default();
        if pending.finalize.is_some() {
            return false;
        }
        if let Some(reveal) = pending.reveal.take() {
            self.timers.cancel(reveal);
        }

        let kind = surface.kind();
        surface.set_phase(Phase::Closing);

        match self.settings.close_delay(kind) {
            Some(delay) => {
                pending.finalize = Some(
                    self.timers
                        .schedule(now, delay, Task::Finalize(id.to_string())),
                );
                tracing::debug!(overlay = id, delay_ms = delay.as_millis(), "overlay closing");
            }
            None => self.finalize(id),
        }
        true
    }

    /// Handles a click on an overlay's backdrop.
    ///
    /// Only alerts close this way, and only when `alert_dim_close` is set.
    pub fn dismiss_backdrop(&mut self, target: &str, now: Instant) -> bool {
        match self.registry.kind_of(target) {
            Some(OverlayKind::Alert) if self.settings.alert_dim_close => self.close(target, now),
            _ => false,
        }
    }

    /// Closes the most recently opened overlay that is not already closing.
    pub fn close_top(&mut self, now: Instant) -> bool {
        let top = self
            .stack
            .iter()
            .rev()
            .find(|id| {
                self.pending
                    .get(id.as_str())
                    .map_or(true, |pending| pending.finalize.is_none())
            })
            .cloned();

        match top {
            Some(id) => self.close(&id, now),
            None => false,
        }
    }

    /// Handles an overlay message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) -> bool {
        match message {
            Message::Open(target) => self.open(target, now),
            Message::Close(target) => self.close(target, now),
            Message::Backdrop(target) => self.dismiss_backdrop(target, now),
            Message::CloseTop => self.close_top(now),
        }
    }

    /// Fires every transition that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let horizon = self.timers.horizon();
        while let Some((_, task)) = self.timers.pop_due(now, horizon) {
            match task {
                Task::Reveal(id) => self.reveal(&id),
                Task::Finalize(id) => self.finalize(&id),
            }
        }
    }

    fn reveal(&mut self, id: &str) {
        if let Some(pending) = self.pending.get_mut(id) {
            pending.reveal = None;
        }
        if let Some(surface) = self.registry.get_mut(id) {
            if surface.phase() == Phase::Opening {
                surface.set_phase(Phase::Open);
                tracing::trace!(overlay = id, "overlay open");
            }
        }
    }

    fn finalize(&mut self, id: &str) {
        if let Some(pending) = self.pending.get_mut(id) {
            pending.finalize = None;
        }
        if let Some(surface) = self.registry.get_mut(id) {
            surface.set_phase(Phase::Closed);
        }

        let before = self.stack.len();
        self.stack.retain(|entry| entry != id);
        let removed = before - self.stack.len();

        for _ in 0..removed {
            if self.lock.release() {
                tracing::debug!(class = self.lock.class(), "scroll lock released");
            }
        }
        tracing::debug!(overlay = id, removed, depth = self.stack.len(), "overlay closed");
    }

    /// Open identifiers in open order, duplicates included.
    #[must_use]
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Most recently opened identifier.
    #[must_use]
    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Whether the target is on the stack.
    #[must_use]
    pub fn is_open(&self, target: &str) -> bool {
        normalize_target(target).is_some_and(|id| self.stack.iter().any(|entry| entry == id))
    }

    /// Current phase of a registered surface.
    #[must_use]
    pub fn phase(&self, target: &str) -> Option<Phase> {
        self.registry.get(target).map(OverlaySurface::phase)
    }

    /// Whether page scrolling is suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_held()
    }

    /// Scroll lock shared by every stacked overlay.
    #[must_use]
    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Registered surfaces, open or not.
    #[must_use]
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Delays and backdrop policy in effect.
    #[must_use]
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Whether any transition is still waiting on a timer.
    #[must_use]
    pub fn has_pending_transitions(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Surfaces on the stack, bottom to top, each listed once at the
    /// position of its latest entry.
    #[must_use]
    pub fn visible_surfaces(&self) -> Vec<&S> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.stack.len());
        for id in self.stack.iter().rev() {
            if !seen.contains(&id.as_str()) {
                seen.push(id);
            }
        }
        seen.into_iter()
            .rev()
            .filter_map(|id| self.registry.get(id))
            .collect()
    }
}

impl Default for Manager<Panel> {
    fn default() -> Self {
        Self::new(OverlaySettings::default())
    }
}
