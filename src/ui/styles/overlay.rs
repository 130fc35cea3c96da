// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for backdrops and panels.
//!
//! Phases map to opacity: a surface that is laid out but not yet
//! transitioned in, or already on its way out, is drawn faded.

use crate::ui::design_tokens::{border, opacity, palette::BLACK, radius, shadow};
use crate::ui::overlay::{OverlayKind, Phase};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Alpha multiplier for a surface in the given phase.
#[must_use]
pub fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Open => opacity::OPAQUE,
        Phase::Opening | Phase::Closing => opacity::SURFACE_PENDING,
        Phase::Closed => opacity::TRANSPARENT,
    }
}

/// Dimmed backdrop behind a panel.
pub fn backdrop(phase: Phase) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * phase_alpha(phase),
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Panel surface. Full-page panels have square corners and no border.
pub fn panel(kind: OverlayKind, phase: Phase) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let alpha = phase_alpha(phase);

        let (corner, width) = match kind {
            OverlayKind::FullPage => (radius::NONE, 0.0),
            OverlayKind::Alert | OverlayKind::Plain => (radius::LG, border::WIDTH_SM),
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE * alpha,
                ..base
            })),
            text_color: Some(Color {
                a: alpha.max(opacity::OVERLAY_MEDIUM),
                ..theme.palette().text
            }),
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE * alpha,
                    ..palette.background.strong.color
                },
                width,
                radius: corner.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_phase_is_fully_opaque() {
        assert_eq!(phase_alpha(Phase::Open), opacity::OPAQUE);
        assert!(phase_alpha(Phase::Opening) < phase_alpha(Phase::Open));
        assert_eq!(phase_alpha(Phase::Opening), phase_alpha(Phase::Closing));
    }

    #[test]
    fn backdrop_dims_more_once_open() {
        let theme = Theme::Dark;
        let opening = backdrop(Phase::Opening)(&theme);
        let open = backdrop(Phase::Open)(&theme);

        let alpha = |style: container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("backdrop should have a color background"),
        };
        assert!(alpha(open) > alpha(opening));
    }

    #[test]
    fn full_page_panel_has_square_corners() {
        let theme = Theme::Light;
        let full = panel(OverlayKind::FullPage, Phase::Open)(&theme);
        let alert = panel(OverlayKind::Alert, Phase::Open)(&theme);

        assert_eq!(full.border.width, 0.0);
        assert!(alert.border.width > 0.0);
    }
}
