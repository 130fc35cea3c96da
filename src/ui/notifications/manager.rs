// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` queues notifications, admits at most `max` of them at a
//! time, and drives each admitted item through `Entering → Shown → Hiding`
//! before removing it. Every removal re-runs the admission loop, so queued
//! items are shown in `show()` order as soon as room frees up. Nothing is
//! ever dropped: the queue is unbounded.

use super::notification::{Notification, NotificationId, ShowOptions};
use super::placement::{Position, ViewportMetrics};
use super::toast::{NotificationSink, ToastPhase, ToastShelf};
use crate::config::{
    DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_MAX, MIN_TOAST_MAX, TOAST_BASE_MARGIN,
    TOAST_HIDE_TRANSITION_MS,
};
use crate::timer::{TimerId, Timers};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Time between the start of hiding and removal.
pub const HIDE_TRANSITION: Duration = Duration::from_millis(TOAST_HIDE_TRANSITION_MS);

/// Runtime settings for the notification queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub position: Position,
    /// Display time when a call does not override it.
    pub default_duration: Duration,
    /// Maximum number of items shown at once. Values below 1 act as 1.
    pub max: usize,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            position: Position::default(),
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            max: DEFAULT_TOAST_MAX,
        }
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user tapped this toast.
    Dismiss(NotificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Reveal(NotificationId),
    Expire(NotificationId),
    Remove(NotificationId),
}

/// An admitted notification and the timers it owns.
#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    phase: ToastPhase,
    reveal: Option<TimerId>,
    expire: Option<TimerId>,
    remove: Option<TimerId>,
}

/// Manages the notification queue and the admitted notifications.
#[derive(Debug)]
pub struct Manager<S = ToastShelf> {
    settings: ToastSettings,
    /// Waiting items in `show()` order.
    queue: VecDeque<Notification>,
    /// Admitted items in admission order.
    active: Vec<ActiveToast>,
    timers: Timers<Task>,
    sink: S,
    next_id: u64,
    viewport: ViewportMetrics,
}

impl Manager<ToastShelf> {
    /// Creates a manager rendering into a [`ToastShelf`].
    #[must_use]
    pub fn new(settings: ToastSettings) -> Self {
        Self::with_sink(settings, ToastShelf::default())
    }
}

impl Default for Manager<ToastShelf> {
    fn default() -> Self {
        Self::new(ToastSettings::default())
    }
}

impl<S: NotificationSink> Manager<S> {
    /// Creates a manager rendering into `sink`.
    pub fn with_sink(mut settings: ToastSettings, sink: S) -> Self {
        settings.max = settings.max.max(MIN_TOAST_MAX);
        Self {
            settings,
            queue: VecDeque::new(),
            active: Vec::new(),
            timers: Timers::new(),
            sink,
            next_id: 0,
            viewport: ViewportMetrics::default(),
        }
    }

    /// Queues a notification and admits as many as room allows.
    ///
    /// A `position` in `options` moves the shared container before queueing.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        options: ShowOptions,
        now: Instant,
    ) -> NotificationId {
        if let Some(position) = options.position {
            self.set_position(position);
        }

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let duration = options.resolve_duration(self.settings.default_duration);
        let notification = Notification::new(id, options.severity, message, duration);
        tracing::debug!(
            %id,
            severity = options.severity.as_tag(),
            duration_ms = duration.as_millis(),
            queued = self.queue.len(),
            "notification queued"
        );
        self.queue.push_back(notification);

        self.drain(now);
        id
    }

    /// Starts hiding an admitted notification ahead of its timer.
    ///
    /// Items that are queued, unknown, or already hiding are left alone.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        if self.active[index].phase == ToastPhase::Hiding {
            return false;
        }
        tracing::debug!(%id, "notification dismissed");
        self.hide(index, now);
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) -> bool {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, now),
        }
    }

    /// Fires every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let horizon = self.timers.horizon();
        while let Some((timer, task)) = self.timers.pop_due(now, horizon) {
            match task {
                Task::Reveal(id) => self.reveal(id, timer),
                Task::Expire(id) => {
                    if let Some(index) = self.position_of(id) {
                        self.active[index].expire = None;
                        self.hide(index, now);
                    }
                }
                Task::Remove(id) => self.remove(id, now),
            }
        }
    }

    /// Admits queued items while there is room.
    fn drain(&mut self, now: Instant) {
        while self.active.len() < self.settings.max {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            let id = notification.id();

            self.sink.render(&notification);
            let reveal = self.timers.schedule(now, Duration::ZERO, Task::Reveal(id));
            let expire = self
                .timers
                .schedule(now, notification.duration(), Task::Expire(id));

            tracing::debug!(%id, active = self.active.len() + 1, "notification admitted");
            self.active.push(ActiveToast {
                notification,
                phase: ToastPhase::Entering,
                reveal: Some(reveal),
                expire: Some(expire),
                remove: None,
            });
        }
    }

    fn reveal(&mut self, id: NotificationId, timer: TimerId) {
        let Some(index) = self.position_of(id) else {
            return;
        };
        let toast = &mut self.active[index];
        if toast.reveal != Some(timer) {
            return;
        }
        toast.reveal = None;
        toast.phase = ToastPhase::Shown;
        self.sink.set_phase(id, ToastPhase::Shown);
    }

    /// Converges timer expiry and user dismissal.
    fn hide(&mut self, index: usize, now: Instant) {
        let toast = &mut self.active[index];
        let id = toast.notification.id();

        for timer in [toast.reveal.take(), toast.expire.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(timer);
        }

        toast.phase = ToastPhase::Hiding;
        toast.remove = Some(self.timers.schedule(now, HIDE_TRANSITION, Task::Remove(id)));
        self.sink.set_phase(id, ToastPhase::Hiding);
        tracing::trace!(%id, "notification hiding");
    }

    fn remove(&mut self, id: NotificationId, now: Instant) {
        let Some(index) = self.position_of(id) else {
            return;
        };
        self.active.remove(index);
        self.sink.remove(id);
        tracing::debug!(%id, queued = self.queue.len(), "notification removed");
        self.drain(now);
    }

    fn position_of(&self, id: NotificationId) -> Option<usize> {
        self.active
            .iter()
            .position(|toast| toast.notification.id() == id)
    }

    /// Drops every queued and admitted notification.
    pub fn clear(&mut self) {
        for toast in self.active.drain(..) {
            self.sink.remove(toast.notification.id());
        }
        self.queue.clear();
        self.timers.clear();
    }

    /// Moves the shared container. Items keep their order and timers.
    pub fn set_position(&mut self, position: Position) {
        if self.settings.position != position {
            tracing::trace!(%position, "toast container moved");
            self.settings.position = position;
        }
    }

    /// Current anchor of the toast container.
    #[must_use]
    pub fn position(&self) -> Position {
        self.settings.position
    }

    /// Records new viewport measurements for bottom placement.
    pub fn update_viewport(&mut self, metrics: ViewportMetrics) {
        self.viewport = metrics;
    }

    /// Bottom padding of a bottom-anchored container.
    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        self.viewport.bottom_offset(TOAST_BASE_MARGIN)
    }

    /// Settings in effect, with `max` already clamped.
    #[must_use]
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Admitted notifications with their phase, in admission order.
    pub fn active(&self) -> impl Iterator<Item = (&Notification, ToastPhase)> {
        self.active
            .iter()
            .map(|toast| (&toast.notification, toast.phase))
    }

    /// Phase of an admitted notification.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<ToastPhase> {
        self.position_of(id).map(|index| self.active[index].phase)
    }

    /// Number of admitted notifications, hiding ones included.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of notifications waiting for a free slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (admitted or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty() || !self.queue.is_empty()
    }

    /// Whether any timer is still pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Sink receiving render, phase and removal calls.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
