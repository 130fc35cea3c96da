// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Position};
use crate::ui::overlay;
use crate::ui::triggers::Trigger;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Overlay(overlay::Message),
    Notification(notifications::NotificationMessage),
    /// A page control with a declarative trigger was pressed.
    Trigger(Trigger),
    Tick(Instant), // Frame tick while transitions are pending
    WindowResized(Size),
    /// Escape was pressed outside any focused widget.
    CloseTopOverlay,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
    /// Toast container position override (from `--position`).
    pub position: Option<Position>,
    /// Maximum number of toasts shown at once (from `--max`).
    pub max: Option<usize>,
}
