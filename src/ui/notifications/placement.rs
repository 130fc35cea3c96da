// SPDX-License-Identifier: MPL-2.0
//! Toast container placement.
//!
//! All toasts share one container anchored to the top or bottom edge. When
//! anchored at the bottom, the container is lifted above whatever covers the
//! lower part of the layout viewport (on-screen keyboard, safe area).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge the toast container is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

impl Position {
    /// Parses a position attribute: `"top"` is top, anything else is bottom.
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("top") {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        })
    }
}

/// Viewport measurements in logical pixels.
///
/// The visual viewport is the part actually visible to the user; it shrinks
/// when an on-screen keyboard opens while the layout viewport does not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub layout_height: f32,
    pub visual_height: f32,
    pub visual_offset_top: f32,
    pub safe_area_bottom: f32,
}

impl ViewportMetrics {
    /// Metrics for a window whose visual and layout viewports coincide.
    #[must_use]
    pub fn uniform(height: f32) -> Self {
        Self {
            layout_height: height,
            visual_height: height,
            ..Self::default()
        }
    }

    /// Height of the layout viewport hidden below the visual viewport.
    #[must_use]
    pub fn keyboard_offset(&self) -> f32 {
        finite(self.layout_height - self.visual_height - self.visual_offset_top).max(0.0)
    }

    /// Bottom padding for a bottom-anchored toast container.
    #[must_use]
    pub fn bottom_offset(&self, base_margin: f32) -> f32 {
        finite(self.safe_area_bottom).max(0.0) + self.keyboard_offset() + base_margin
    }
}

fn finite(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_top_parses_as_top() {
        assert_eq!(Position::from_attr("top"), Position::Top);
        assert_eq!(Position::from_attr(" TOP "), Position::Top);
        assert_eq!(Position::from_attr("bottom"), Position::Bottom);
        assert_eq!(Position::from_attr("middle"), Position::Bottom);
        assert_eq!(Position::from_attr(""), Position::Bottom);
    }

    #[test]
    fn uniform_viewport_uses_base_margin_only() {
        let metrics = ViewportMetrics::uniform(800.0);
        assert_eq!(metrics.keyboard_offset(), 0.0);
        assert_eq!(metrics.bottom_offset(12.0), 12.0);
    }

    #[test]
    fn keyboard_and_safe_area_lift_the_container() {
        let metrics = ViewportMetrics {
            layout_height: 800.0,
            visual_height: 500.0,
            visual_offset_top: 20.0,
            safe_area_bottom: 34.0,
        };
        assert_eq!(metrics.keyboard_offset(), 280.0);
        assert_eq!(metrics.bottom_offset(12.0), 34.0 + 280.0 + 12.0);
    }

    #[test]
    fn scrolled_visual_viewport_never_goes_negative() {
        let metrics = ViewportMetrics {
            layout_height: 800.0,
            visual_height: 800.0,
            visual_offset_top: 40.0,
            safe_area_bottom: 0.0,
        };
        assert_eq!(metrics.keyboard_offset(), 0.0);
    }

    #[test]
    fn non_finite_metrics_are_ignored() {
        let metrics = ViewportMetrics {
            layout_height: f32::NAN,
            visual_height: 600.0,
            visual_offset_top: 0.0,
            safe_area_bottom: f32::INFINITY,
        };
        assert_eq!(metrics.bottom_offset(12.0), 12.0);
    }
}
