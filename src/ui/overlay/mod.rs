// SPDX-License-Identifier: MPL-2.0
//! Modal overlay stack.
//!
//! Overlays come in three kinds (plain, alert, full-page) that share one
//! stack and one scroll lock. Opening and closing are driven by messages;
//! the kind-specific transition delays are driven by [`Manager::tick`].
//!
//! # Components
//!
//! - [`surface`] - `OverlaySurface` trait, kinds, phases and the `Panel` surface
//! - [`registry`] - Lookup of surfaces by identifier
//! - [`lock`] - `ScrollLock` reference count
//! - [`manager`] - Stack lifecycle and transition timing
//! - [`view`] - Iced layers for the open panels

mod lock;
mod manager;
mod registry;
mod surface;
pub mod view;

pub use lock::ScrollLock;
pub use manager::{Manager, Message, OverlaySettings};
pub use registry::{normalize_target, Registry};
pub use surface::{OverlayKind, OverlaySurface, Panel, Phase};
