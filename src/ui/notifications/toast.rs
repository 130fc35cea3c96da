// SPDX-License-Identifier: MPL-2.0
//! Toast presentation: the sink contract and the Iced toast widget.
//!
//! The manager never touches widgets. It reports admissions, phase changes
//! and removals to a [`NotificationSink`]; the default [`ToastShelf`] keeps
//! the rendered cards the Iced view draws from.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId};
use super::placement::Position;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, text, Column, Container, Text};
use iced::{alignment, mouse, Element, Length, Padding};

/// Visual phase of an admitted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Rendered, show transition not applied yet.
    Entering,
    Shown,
    /// Hide transition running; removal follows.
    Hiding,
}

/// What the notification manager needs from a presentation surface.
pub trait NotificationSink {
    /// A notification was admitted.
    fn render(&mut self, notification: &Notification);
    fn set_phase(&mut self, id: NotificationId, phase: ToastPhase);
    /// The hide transition is over.
    fn remove(&mut self, id: NotificationId);
}

/// Rendered toast cards in admission order.
#[derive(Debug, Clone, Default)]
pub struct ToastShelf {
    cards: Vec<(Notification, ToastPhase)>,
}

impl ToastShelf {
    pub fn iter(&self) -> impl Iterator<Item = (&Notification, ToastPhase)> {
        self.cards
            .iter()
            .map(|(notification, phase)| (notification, *phase))
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<ToastPhase> {
        self.iter()
            .find(|(notification, _)| notification.id() == id)
            .map(|(_, phase)| phase)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl NotificationSink for ToastShelf {
    fn render(&mut self, notification: &Notification) {
        self.cards.push((notification.clone(), ToastPhase::Entering));
    }

    fn set_phase(&mut self, id: NotificationId, phase: ToastPhase) {
        if let Some(card) = self.cards.iter_mut().find(|(n, _)| n.id() == id) {
            card.1 = phase;
        }
    }

    fn remove(&mut self, id: NotificationId) {
        self.cards.retain(|(notification, _)| notification.id() != id);
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast. Tapping anywhere on it dismisses it.
    pub fn view(notification: &Notification, phase: ToastPhase) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        let message_widget = Text::new(notification.message()).size(typography::BODY);

        let card = Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::toast::card(accent_color, phase));

        mouse_area(card)
            .on_press(Message::Dismiss(notification.id()))
            .interaction(mouse::Interaction::Pointer)
            .into()
    }

    /// Renders the shared toast container.
    ///
    /// Anchored to the top or bottom edge; at the bottom it is lifted by the
    /// manager's current offset.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .sink()
            .iter()
            .map(|(notification, phase)| Self::view(notification, phase))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        let (align_y, padding) = match manager.position() {
            Position::Top => (alignment::Vertical::Top, Padding::new(spacing::MD)),
            Position::Bottom => (
                alignment::Vertical::Bottom,
                Padding::new(spacing::MD).bottom(manager.bottom_offset()),
            ),
        };

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(align_y)
            .padding(padding)
            .into()
    }
}
