// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions without blocking
//! interaction. At most `max` are shown at once; the rest wait in an
//! unbounded FIFO queue and are admitted as earlier toasts finish hiding.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and per-call `ShowOptions`
//! - [`manager`] - `Manager` for queuing, admission and dismissal timing
//! - [`placement`] - Container anchor and on-screen keyboard offset
//! - [`toast`] - Sink contract, `ToastShelf` and the toast widget
//!
//! # Usage
//!
//! ```ignore
//! use iced_layers::ui::notifications::{Manager, Severity, ShowOptions};
//!
//! let mut manager = Manager::default();
//! manager.show("Saved", ShowOptions::new().severity(Severity::Success), now);
//!
//! // On every frame tick
//! manager.tick(now);
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod placement;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, ToastSettings, HIDE_TRANSITION};
pub use notification::{Notification, NotificationId, Severity, ShowOptions};
pub use placement::{Position, ViewportMetrics};
pub use toast::{NotificationSink, Toast, ToastPhase, ToastShelf};
