// SPDX-License-Identifier: MPL-2.0
//! Declarative triggers attached to page controls.
//!
//! A trigger is described by a role and a set of string attributes, the way
//! a page would annotate its buttons. Parsing never fails hard: missing or
//! malformed attributes fall back to defaults, and a trigger without a
//! usable target is simply not built.
//!
//! | Role          | Attributes                                    |
//! |---------------|-----------------------------------------------|
//! | `modal-open`  | `target`                                      |
//! | `modal-close` | `target`                                      |
//! | `modal-dim`   | `target` (the surface owning the backdrop)    |
//! | `toast`       | `text`, `type`, `duration`, `position`        |

use crate::config::DEFAULT_TOAST_MESSAGE;
use crate::ui::notifications::{self, NotificationSink, Position, Severity, ShowOptions};
use crate::ui::overlay::{self, normalize_target, OverlaySurface};
use std::time::Instant;

/// A parsed trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Overlay(overlay::Message),
    Toast(ToastTrigger),
}

impl Trigger {
    /// Builds a trigger from its role and attributes.
    ///
    /// Returns `None` for unknown roles and for overlay triggers whose
    /// target is empty.
    pub fn from_attrs<'a, I>(role: &str, attrs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attrs: Vec<(&str, &str)> = attrs.into_iter().collect();
        let attr = |name: &str| {
            attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };

        let overlay_target = || {
            attr("target")
                .and_then(normalize_target)
                .map(str::to_string)
        };

        let trigger = match role {
            "modal-open" => Self::Overlay(overlay::Message::Open(overlay_target()?)),
            "modal-close" => Self::Overlay(overlay::Message::Close(overlay_target()?)),
            "modal-dim" => Self::Overlay(overlay::Message::Backdrop(overlay_target()?)),
            "toast" => Self::Toast(ToastTrigger {
                text: attr("text").map(str::to_string),
                kind: attr("type").map(str::to_string),
                duration: attr("duration").map(str::to_string),
                position: attr("position").map(str::to_string),
            }),
            _ => {
                tracing::trace!(role, "unknown trigger role");
                return None;
            }
        };
        Some(trigger)
    }

    /// Routes the trigger to the manager it addresses.
    pub fn fire<O, N>(
        &self,
        overlays: &mut overlay::Manager<O>,
        toasts: &mut notifications::Manager<N>,
        now: Instant,
    ) -> bool
    where
        O: OverlaySurface,
        N: NotificationSink,
    {
        match self {
            Trigger::Overlay(message) => overlays.handle_message(message, now),
            Trigger::Toast(trigger) => {
                trigger.fire(toasts, now);
                true
            }
        }
    }
}

/// Raw toast trigger attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastTrigger {
    pub text: Option<String>,
    /// Severity tag (`default`, `success`, `error`, `warning`).
    pub kind: Option<String>,
    /// Display time in milliseconds, as written.
    pub duration: Option<String>,
    pub position: Option<String>,
}

impl ToastTrigger {
    /// Message text; empty or missing text shows the default message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_TOAST_MESSAGE)
    }

    /// Resolved call options.
    ///
    /// An empty duration counts as absent; text that is not a number is
    /// passed on as NaN and ends up at the default duration. The position is
    /// always set: `"top"` is top, anything else is bottom.
    #[must_use]
    pub fn options(&self) -> ShowOptions {
        let severity = self
            .kind
            .as_deref()
            .map_or(Severity::Default, Severity::from_tag);

        let duration_ms = self
            .duration
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(|value| value.trim().parse::<f64>().unwrap_or(f64::NAN));

        ShowOptions {
            severity,
            duration_ms,
            position: Some(Position::from_attr(self.position.as_deref().unwrap_or(""))),
        }
    }

    /// Shows the toast this trigger describes.
    pub fn fire<N: NotificationSink>(
        &self,
        manager: &mut notifications::Manager<N>,
        now: Instant,
    ) -> notifications::NotificationId {
        manager.show(self.message(), self.options(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::overlay::{OverlayKind, Panel, Phase};
    use std::time::Duration;

    fn toast(attrs: &[(&str, &str)]) -> ToastTrigger {
        match Trigger::from_attrs("toast", attrs.iter().copied()) {
            Some(Trigger::Toast(trigger)) => trigger,
            other => panic!("expected toast trigger, got {other:?}"),
        }
    }

    #[test]
    fn overlay_roles_normalize_targets() {
        assert_eq!(
            Trigger::from_attrs("modal-open", [("target", "#confirm")]),
            Some(Trigger::Overlay(overlay::Message::Open("confirm".into())))
        );
        assert_eq!(
            Trigger::from_attrs("modal-close", [("target", "confirm")]),
            Some(Trigger::Overlay(overlay::Message::Close("confirm".into())))
        );
        assert_eq!(
            Trigger::from_attrs("modal-dim", [("target", "#confirm")]),
            Some(Trigger::Overlay(overlay::Message::Backdrop("confirm".into())))
        );
    }

    #[test]
    fn overlay_trigger_without_target_is_not_built() {
        assert_eq!(Trigger::from_attrs("modal-open", std::iter::empty()), None);
        assert_eq!(Trigger::from_attrs("modal-close", [("target", "#")]), None);
        assert_eq!(Trigger::from_attrs("carousel", [("target", "x")]), None);
    }

    #[test]
    fn toast_defaults() {
        let trigger = toast(&[]);
        assert_eq!(trigger.message(), DEFAULT_TOAST_MESSAGE);

        let options = trigger.options();
        assert_eq!(options.severity, Severity::Default);
        assert_eq!(options.duration_ms, None);
        assert_eq!(options.position, Some(Position::Bottom));

        assert_eq!(toast(&[("text", "")]).message(), DEFAULT_TOAST_MESSAGE);
    }

    #[test]
    fn toast_attributes_are_parsed() {
        let trigger = toast(&[
            ("text", "Copied"),
            ("type", "success"),
            ("duration", "3500"),
            ("position", "top"),
        ]);
        assert_eq!(trigger.message(), "Copied");

        let options = trigger.options();
        assert_eq!(options.severity, Severity::Success);
        assert_eq!(options.duration_ms, Some(3500.0));
        assert_eq!(options.position, Some(Position::Top));
    }

    #[test]
    fn malformed_toast_attributes_fall_back() {
        let options = toast(&[("type", "fatal"), ("duration", "soon"), ("position", "left")])
            .options();
        assert_eq!(options.severity, Severity::Default);
        assert!(options.duration_ms.is_some_and(f64::is_nan));
        assert_eq!(options.position, Some(Position::Bottom));
        assert_eq!(
            options.resolve_duration(Duration::from_millis(2000)),
            Duration::from_millis(2000)
        );

        assert_eq!(toast(&[("duration", "")]).options().duration_ms, None);
    }

    #[test]
    fn fire_routes_to_the_right_manager() {
        let mut overlays = overlay::Manager::default();
        overlays.register(Panel::new("confirm", OverlayKind::Alert, "Confirm"));
        let mut toasts = notifications::Manager::default();
        let now = Instant::now();

        let open = Trigger::from_attrs("modal-open", [("target", "#confirm")]).expect("trigger");
        assert!(open.fire(&mut overlays, &mut toasts, now));
        assert_eq!(overlays.phase("confirm"), Some(Phase::Opening));

        let show = Trigger::from_attrs("toast", [("position", "top")]).expect("trigger");
        assert!(show.fire(&mut overlays, &mut toasts, now));
        assert_eq!(toasts.active_count(), 1);
        assert_eq!(toasts.position(), Position::Top);
    }
}
