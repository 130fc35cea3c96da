// SPDX-License-Identifier: MPL-2.0
//! Overlay surfaces: kinds, transition phases and the capability trait the
//! stack manager drives.

use super::manager::Message;
use std::fmt;

/// Overlay category; decides transition timing and backdrop policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayKind {
    /// Ordinary modal, opens on the next frame and closes at once.
    #[default]
    Plain,
    /// Small dialog over a dimmed backdrop; may close on backdrop click.
    Alert,
    /// Panel covering the whole window, with slide-in and slide-out timing.
    FullPage,
}

impl OverlayKind {
    /// Parses a role attribute such as `"alert"` or `"fullpage"`.
    ///
    /// Anything unrecognized is a plain overlay.
    #[must_use]
    pub fn from_role(role: &str) -> Self {
        match role.trim().to_ascii_lowercase().as_str() {
            "alert" => Self::Alert,
            "fullpage" | "full-page" => Self::FullPage,
            _ => Self::Plain,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlayKind::Plain => "plain",
            OverlayKind::Alert => "alert",
            OverlayKind::FullPage => "full-page",
        };
        f.write_str(name)
    }
}

/// Visual phase of one overlay.
///
/// `Closed → Opening → Open → Closing → Closed`. The `Opening → Open` and
/// full-page `Closing → Closed` steps are driven by timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Laid out and visible, transition not applied yet.
    Opening,
    Open,
    /// Transition removed, waiting to leave the layout.
    Closing,
}

impl Phase {
    /// Whether the surface takes part in layout.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Phase::Closed)
    }

    /// Whether the opening transition is applied.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Open)
    }
}

/// What the stack manager needs from a presentation surface.
pub trait OverlaySurface {
    fn id(&self) -> &str;
    fn kind(&self) -> OverlayKind;
    fn phase(&self) -> Phase;
    fn set_phase(&mut self, phase: Phase);
}

/// Titled panel rendered by the Iced overlay view.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    id: String,
    kind: OverlayKind,
    title: String,
    body: String,
    /// Extra buttons shown under the body, e.g. to open a nested overlay.
    actions: Vec<(String, Message)>,
    phase: Phase,
}

impl Panel {
    /// Creates a closed panel.
    pub fn new(id: impl Into<String>, kind: OverlayKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            body: String::new(),
            actions: Vec::new(),
            phase: Phase::Closed,
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a button sending `message`.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.actions.push((label.into(), message));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn actions(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.actions
            .iter()
            .map(|(label, message)| (label.as_str(), message))
    }
}

impl OverlaySurface for Panel {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> OverlayKind {
        self.kind
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_recognizes_kinds() {
        assert_eq!(OverlayKind::from_role("alert"), OverlayKind::Alert);
        assert_eq!(OverlayKind::from_role("FullPage"), OverlayKind::FullPage);
        assert_eq!(OverlayKind::from_role("full-page"), OverlayKind::FullPage);
        assert_eq!(OverlayKind::from_role("dialog"), OverlayKind::Plain);
        assert_eq!(OverlayKind::from_role(""), OverlayKind::Plain);
    }

    #[test]
    fn only_closed_phase_is_hidden() {
        assert!(!Phase::Closed.is_visible());
        assert!(Phase::Opening.is_visible());
        assert!(Phase::Open.is_visible());
        assert!(Phase::Closing.is_visible());
        assert!(Phase::Open.is_open());
        assert!(!Phase::Opening.is_open());
    }

    #[test]
    fn panel_starts_closed() {
        let panel = Panel::new("terms", OverlayKind::FullPage, "Terms")
            .with_body("Read me")
            .with_action("Accept", Message::Open("confirm".into()));
        assert_eq!(panel.phase(), Phase::Closed);
        assert_eq!(panel.actions().count(), 1);
        assert_eq!(panel.id(), "terms");
        assert_eq!(panel.body(), "Read me");
        assert_eq!(panel.kind().to_string(), "full-page");
    }
}
