// SPDX-License-Identifier: MPL-2.0
pub mod scroll_lock_gate;

pub use scroll_lock_gate::{scroll_lock_gate, ScrollLockGate};
