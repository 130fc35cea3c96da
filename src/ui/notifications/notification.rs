// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and
//! the per-call `ShowOptions` used throughout the notification system.

use super::placement::Position;
use crate::config::MAX_TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Identifier of a notification, in `show()` call order.
///
/// Allocated by the owning manager so ordering is per queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level; decides the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral feedback.
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parses a severity tag. Unknown tags are `Default`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Default => palette::GRAY_400,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Per-call overrides for `show()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShowOptions {
    pub severity: Severity,
    /// Requested display time in milliseconds. Absent, non-finite or
    /// non-positive values use the configured default.
    pub duration_ms: Option<f64>,
    /// Moves the shared container before the item is queued.
    pub position: Option<Position>,
}

impl ShowOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Display time for this call, falling back to `default`.
    ///
    /// Non-finite or non-positive overrides are ignored; overrides longer
    /// than `MAX_TOAST_DURATION_MS` are capped.
    #[must_use]
    pub fn resolve_duration(&self, default: Duration) -> Duration {
        self.duration_ms
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .map(|ms| ms.min(MAX_TOAST_DURATION_MS as f64))
            .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
            .unwrap_or(default)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// How long the item stays shown before it starts hiding.
    duration: Duration,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
