// SPDX-License-Identifier: MPL-2.0
//! `iced_layers` provides modal overlay stacking and toast notifications for
//! Iced applications.
//!
//! Two independent managers do the work:
//!
//! - [`ui::overlay::Manager`] keeps the stack of open overlays, sequences
//!   their kind-specific open and close transitions, and holds the page
//!   scroll lock while anything is open.
//! - [`ui::notifications::Manager`] queues toasts, shows at most `max` at a
//!   time and hides each one after its duration or on tap.
//!
//! Both are driven by an explicit clock through their `tick(now)` method,
//! which keeps them deterministic under test.

#![doc(html_root_url = "https://docs.rs/iced_layers/0.1.0")]

pub mod app;
pub mod error;
pub mod timer;
pub mod ui;

pub use app::config;
