// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are mapped to app messages; a frame
//! tick runs only while one of the managers still has a timer pending.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resizes and unhandled Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::CloseTopOverlay),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Creates the frame tick that drives overlay transitions and toast timers.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
