// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page sits at the bottom of a stack, behind one layer per open overlay
//! and, on top of everything, the toast container.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::overlay::{self, Panel};
use crate::ui::styles;
use crate::ui::triggers::Trigger;
use crate::ui::widgets::scroll_lock_gate;
use iced::widget::{button, Column, Container, Row, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Filler paragraphs so the page actually scrolls.
const PAGE_PARAGRAPHS: usize = 24;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub overlays: &'a overlay::Manager<Panel>,
    pub notifications: &'a notifications::Manager,
    pub triggers: &'a [(String, Trigger)],
}

/// Renders the page, the overlay layers and the toasts.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = scroll_lock_gate(view_page(&ctx), ctx.overlays.is_locked());

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    for layer in overlay::view::layers(ctx.overlays) {
        layers = layers.push(layer.map(Message::Overlay));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controls = ctx
        .triggers
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, (label, trigger)| {
            row.push(
                button(Text::new(label.as_str()).size(typography::BODY))
                    .on_press(Message::Trigger(trigger.clone()))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            )
        })
        .wrap();

    let status = match ctx.overlays.lock().active_class() {
        Some(class) => format!(
            "{} overlay(s) open, page scrolling locked ({class})",
            ctx.overlays.stack().len()
        ),
        None => String::from("No overlay open"),
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Iced Layers").size(typography::TITLE_LG))
        .push(controls)
        .push(Text::new(status).size(typography::CAPTION));

    for index in 1..=PAGE_PARAGRAPHS {
        content = content.push(
            Text::new(format!(
                "Paragraph {index}. Scroll the page, then open an overlay: \
                 the page stays put until the last overlay has closed."
            ))
            .size(typography::BODY),
        );
    }

    Container::new(Scrollable::new(content).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
