// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the overlay
//! stack and the toast queue.
//!
//! The `App` struct owns both managers, feeds them the clock on every frame
//! tick and translates page triggers into manager calls. Configuration is
//! read once at startup; CLI flags win over the file.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::notifications::{self, Severity, ShowOptions, ViewportMetrics};
use crate::ui::overlay::{self, OverlayKind, Panel};
use crate::ui::triggers::Trigger;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    overlays: overlay::Manager<Panel>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Page controls and the triggers they fire.
    triggers: Vec<(String, Trigger)>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("overlay_stack", &self.overlays.stack())
            .field("active_toasts", &self.notifications.active_count())
            .field("queued_toasts", &self.notifications.queued_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Overlays available on the demo page.
fn demo_panels() -> [Panel; 3] {
    [
        Panel::new("confirm", OverlayKind::Alert, "Discard changes?")
            .with_body("Click outside this dialog or press Escape to keep editing.")
            .with_action("Discard", overlay::Message::Close("confirm".into())),
        Panel::new("settings", OverlayKind::FullPage, "Settings")
            .with_body("Full-page panels slide in after a short delay and leave the layout only once their closing transition is over.")
            .with_action("Reset everything", overlay::Message::Open("#confirm".into())),
        Panel::new("about", OverlayKind::Plain, "About")
            .with_body("Overlays stack; the page stays locked until the last one closes."),
    ]
}

/// Page controls, described the way markup would annotate its buttons.
fn demo_triggers() -> Vec<(String, Trigger)> {
    let specs: [(&str, &str, &[(&str, &str)]); 7] = [
        ("Confirm", "modal-open", &[("target", "#confirm")]),
        ("Settings", "modal-open", &[("target", "#settings")]),
        ("About", "modal-open", &[("target", "#about")]),
        ("Toast", "toast", &[]),
        (
            "Saved",
            "toast",
            &[("text", "Changes saved"), ("type", "success")],
        ),
        (
            "Failed",
            "toast",
            &[("text", "Upload failed"), ("type", "error"), ("duration", "4000")],
        ),
        (
            "Top",
            "toast",
            &[("text", "Pinned to the top"), ("type", "warning"), ("position", "top")],
        ),
    ];

    specs
        .into_iter()
        .filter_map(|(label, role, attrs)| {
            Trigger::from_attrs(role, attrs.iter().copied())
                .map(|trigger| (label.to_string(), trigger))
        })
        .collect()
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (mut config, config_warning) = config::load();

        if let Some(position) = flags.position {
            config.toast.position = Some(position);
        }
        if let Some(max) = flags.max {
            config.toast.max = Some(max);
        }

        let mut overlays = overlay::Manager::new(config.overlay.settings());
        for panel in demo_panels() {
            overlays.register(panel);
        }

        let mut notifications = notifications::Manager::new(config.toast.settings());
        notifications.update_viewport(ViewportMetrics::uniform(WINDOW_DEFAULT_HEIGHT as f32));

        tracing::info!(
            position = %notifications.position(),
            max = notifications.settings().max,
            overlays = overlays.registry().len(),
            "application started"
        );

        // Show warnings for config loading issues
        if let Some(warning) = config_warning {
            notifications.show(
                warning,
                ShowOptions::new().severity(Severity::Warning),
                Instant::now(),
            );
        }

        let app = App {
            overlays,
            notifications,
            triggers: demo_triggers(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.overlays.top().and_then(|id| self.overlays.registry().get(id)) {
            Some(panel) => format!("{} - Iced Layers", panel.title()),
            None => String::from("Iced Layers"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.overlays.has_pending_transitions() || self.notifications.has_pending_timers(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Overlay(message) => {
                self.overlays.handle_message(&message, Instant::now());
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message, Instant::now());
            }
            Message::Trigger(trigger) => {
                trigger.fire(&mut self.overlays, &mut self.notifications, Instant::now());
            }
            Message::Tick(now) => {
                self.overlays.tick(now);
                self.notifications.tick(now);
            }
            Message::WindowResized(size) => {
                self.notifications
                    .update_viewport(ViewportMetrics::uniform(size.height));
            }
            Message::CloseTopOverlay => {
                self.overlays.close_top(Instant::now());
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            overlays: &self.overlays,
            notifications: &self.notifications,
            triggers: &self.triggers,
        })
    }
}
