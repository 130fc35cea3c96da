// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the overlay stack and the toast queue.
//!
//! # Categories
//!
//! - **Overlay**: Scroll-lock label and kind-specific transition delays
//! - **Toast**: Default duration, concurrency bound and placement margins

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Label of the scroll lock held while any overlay is open.
pub const DEFAULT_BODY_LOCK_CLASS: &str = "js-noscroll";

/// Delay before an alert receives its opening transition (milliseconds).
pub const DEFAULT_ALERT_OPEN_DELAY_MS: u64 = 80;

/// Delay before a full-page panel receives its opening transition (milliseconds).
pub const DEFAULT_FULL_OPEN_DELAY_MS: u64 = 200;

/// Delay between closing a full-page panel and removing it from layout (milliseconds).
pub const DEFAULT_FULL_CLOSE_DELAY_MS: u64 = 300;

/// Whether clicking an alert's dimmed backdrop closes it.
pub const DEFAULT_ALERT_DIM_CLOSE: bool = true;

/// Upper bound accepted for any overlay delay (milliseconds).
pub const MAX_OVERLAY_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display duration of a toast (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2_000;

/// Default number of toasts visible at once.
pub const DEFAULT_TOAST_MAX: usize = 1;

/// Minimum number of toasts visible at once.
pub const MIN_TOAST_MAX: usize = 1;

/// Longest display duration a toast accepts (milliseconds, one day).
/// Longer requests are clamped to this value.
pub const MAX_TOAST_DURATION_MS: u64 = 86_400_000;

/// Time between a toast starting to hide and its removal (milliseconds).
/// Matches the hide transition of the toast card.
pub const TOAST_HIDE_TRANSITION_MS: u64 = 250;

/// Gap kept between the toast container and the bottom edge (logical pixels).
pub const TOAST_BASE_MARGIN: f32 = 12.0;

/// Message used when a toast trigger carries no text.
pub const DEFAULT_TOAST_MESSAGE: &str = "Done";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Overlay delay validation
    assert!(DEFAULT_ALERT_OPEN_DELAY_MS <= MAX_OVERLAY_DELAY_MS);
    assert!(DEFAULT_FULL_OPEN_DELAY_MS <= MAX_OVERLAY_DELAY_MS);
    assert!(DEFAULT_FULL_CLOSE_DELAY_MS <= MAX_OVERLAY_DELAY_MS);
    assert!(DEFAULT_FULL_OPEN_DELAY_MS >= DEFAULT_ALERT_OPEN_DELAY_MS);

    // Toast validation
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(MIN_TOAST_MAX >= 1);
    assert!(DEFAULT_TOAST_MAX >= MIN_TOAST_MAX);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TOAST_HIDE_TRANSITION_MS < DEFAULT_TOAST_DURATION_MS);
    assert!(TOAST_BASE_MARGIN >= 0.0);
};
