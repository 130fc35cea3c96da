// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Everything here follows the Elm-style "state down, messages up" pattern:
//! managers own state, views borrow it, and user input comes back as
//! messages handled by the managers.
//!
//! # Layers
//!
//! - [`overlay`] - Modal overlay stack with scroll lock
//! - [`notifications`] - Toast queue and toast widget
//! - [`triggers`] - Declarative page triggers routed to the managers
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (scroll-lock gate)
//! - [`styles`] - Centralized styling (buttons, overlays, toasts)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod overlay;
pub mod styles;
pub mod triggers;
pub mod widgets;
