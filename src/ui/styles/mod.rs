// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for overlays, toasts and their controls.

pub mod button;
pub mod overlay;
pub mod toast;
