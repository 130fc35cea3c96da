// SPDX-License-Identifier: MPL-2.0
//! Toast card style.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::notifications::ToastPhase;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card with a severity accent border. Entering and hiding toasts are faded.
pub fn card(accent: Color, phase: ToastPhase) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let alpha = match phase {
            ToastPhase::Shown => opacity::OPAQUE,
            ToastPhase::Entering | ToastPhase::Hiding => opacity::SURFACE_PENDING,
        };
        let bg_color = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE * alpha,
                ..bg_color
            })),
            border: Border {
                color: Color {
                    a: accent.a * alpha,
                    ..accent
                },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(Color {
                a: alpha.max(opacity::OVERLAY_MEDIUM),
                ..theme.palette().text
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_uses_accent_color() {
        let theme = Theme::Dark;
        let style = card(palette::SUCCESS_500, ToastPhase::Shown)(&theme);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn hiding_card_is_faded() {
        let theme = Theme::Dark;
        let shown = card(palette::ERROR_500, ToastPhase::Shown)(&theme);
        let hiding = card(palette::ERROR_500, ToastPhase::Hiding)(&theme);

        assert!(hiding.border.color.a < shown.border.color.a);
    }
}
