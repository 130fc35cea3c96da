// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the overlay stack.
//!
//! Each stacked surface becomes one layer: a backdrop that reports clicks
//! and, centered over it, an opaque panel so clicks on the panel never reach
//! the backdrop underneath.

use super::manager::{Manager, Message};
use super::surface::{OverlayKind, OverlaySurface, Panel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// One layer per visible surface, bottom to top.
pub fn layers(manager: &Manager<Panel>) -> Vec<Element<'_, Message>> {
    manager.visible_surfaces().into_iter().map(layer).collect()
}

fn layer(panel: &Panel) -> Element<'_, Message> {
    let phase = panel.phase();
    let id = panel.id().to_string();

    let backdrop = mouse_area(
        Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(phase)),
    )
    .on_press(Message::Backdrop(id));

    iced::widget::stack![backdrop, placed(card(panel), panel.kind())].into()
}

fn card(panel: &Panel) -> Element<'_, Message> {
    let kind = panel.kind();
    let title_size = match kind {
        OverlayKind::FullPage => typography::TITLE_LG,
        OverlayKind::Alert | OverlayKind::Plain => typography::TITLE_SM,
    };

    let close = button(Text::new("Close").size(typography::BODY))
        .on_press(Message::Close(panel.id().to_string()))
        .padding(spacing::XXS)
        .style(styles::button::close);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(panel.title()).size(title_size))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let mut content = Column::new().spacing(spacing::MD).push(header);
    if !panel.body().is_empty() {
        content = content.push(Text::new(panel.body()).size(typography::BODY));
    }

    let actions = panel.actions().fold(Row::new().spacing(spacing::XS), |row, (label, message)| {
        row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(message.clone())
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
    });
    content = content.push(actions);

    let (width, height) = match kind {
        OverlayKind::FullPage => (Length::Fill, Length::Fill),
        OverlayKind::Alert => (Length::Fixed(sizing::ALERT_WIDTH), Length::Shrink),
        OverlayKind::Plain => (Length::Fixed(sizing::MODAL_WIDTH), Length::Shrink),
    };

    opaque(
        Container::new(content)
            .width(width)
            .height(height)
            .padding(spacing::LG)
            .style(styles::overlay::panel(kind, panel.phase())),
    )
}

/// Full-page panels cover the window; other kinds sit centered.
fn placed<'a>(card: Element<'a, Message>, kind: OverlayKind) -> Element<'a, Message> {
    let container = Container::new(card).width(Length::Fill).height(Length::Fill);
    match kind {
        OverlayKind::FullPage => container.into(),
        OverlayKind::Alert | OverlayKind::Plain => container
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn one_layer_per_distinct_open_surface() {
        let mut manager = Manager::default();
        manager.register(Panel::new("a", OverlayKind::Plain, "A"));
        manager.register(Panel::new("b", OverlayKind::Alert, "B").with_body("Sure?"));
        let now = Instant::now();

        assert!(layers(&manager).is_empty());

        manager.open("a", now);
        manager.open("b", now);
        manager.open("a", now);
        assert_eq!(layers(&manager).len(), 2);
    }
}
