// SPDX-License-Identifier: MPL-2.0
use iced_layers::config::{self, Config, CONFIG_FILE};
use iced_layers::ui::notifications::{
    self, NotificationId, NotificationSink, Notification, Position, ShowOptions, ToastPhase,
    ToastSettings,
};
use iced_layers::ui::overlay::{self, OverlayKind, Panel, Phase};
use iced_layers::ui::triggers::Trigger;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn overlays() -> overlay::Manager {
    let mut manager = overlay::Manager::default();
    manager.register(Panel::new("a", OverlayKind::Plain, "A"));
    manager.register(Panel::new("b", OverlayKind::Alert, "B"));
    manager.register(Panel::new("full", OverlayKind::FullPage, "Full"));
    manager
}

#[test]
fn nested_overlays_keep_lock_until_last_close() {
    let mut manager = overlays();
    let t0 = Instant::now();

    manager.open("#a", t0);
    manager.open("#b", t0);
    manager.close("#b", t0);

    assert!(manager.is_open("a"));
    assert!(!manager.is_open("b"));
    assert!(manager.is_locked());

    manager.close("a", t0);
    assert!(!manager.is_locked());
    assert!(manager.stack().is_empty());
}

#[test]
fn closing_outer_overlay_first_still_holds_lock() {
    let mut manager = overlays();
    let t0 = Instant::now();

    manager.open("a", t0);
    manager.open("b", t0);
    manager.close("a", t0);
    assert!(manager.is_locked());
    assert_eq!(manager.top(), Some("b"));

    manager.close("b", t0);
    assert!(!manager.is_locked());
}

#[test]
fn full_page_finalizes_only_after_close_delay() {
    let mut manager = overlays();
    let t0 = Instant::now();

    manager.open("full", t0);
    manager.tick(t0 + ms(200));
    assert_eq!(manager.phase("full"), Some(Phase::Open));

    manager.close("full", t0 + ms(1000));
    assert_eq!(manager.phase("full"), Some(Phase::Closing));
    assert!(manager.is_locked());

    manager.tick(t0 + ms(1299));
    assert!(manager.is_open("full"));

    manager.tick(t0 + ms(1300));
    assert_eq!(manager.phase("full"), Some(Phase::Closed));
    assert!(!manager.is_locked());
}

#[test]
fn plain_overlay_finalizes_immediately() {
    let mut manager = overlays();
    let t0 = Instant::now();

    manager.open("a", t0);
    manager.close("a", t0);
    assert_eq!(manager.phase("a"), Some(Phase::Closed));
    assert!(!manager.is_locked());
}

#[test]
fn backdrop_policy_applies_to_alerts_only() {
    let mut manager = overlays();
    let t0 = Instant::now();

    manager.open("a", t0);
    manager.open("full", t0);
    manager.open("b", t0);

    assert!(!manager.dismiss_backdrop("full", t0));
    assert!(!manager.dismiss_backdrop("a", t0));
    assert!(manager.dismiss_backdrop("#b", t0));
    assert!(!manager.is_open("b"));
}

#[test]
fn backdrop_policy_can_be_disabled() {
    let settings = overlay::OverlaySettings {
        alert_dim_close: false,
        ..overlay::OverlaySettings::default()
    };
    let mut manager = overlay::Manager::new(settings);
    manager.register(Panel::new("b", OverlayKind::Alert, "B"));
    let t0 = Instant::now();

    manager.open("b", t0);
    assert!(!manager.dismiss_backdrop("b", t0));
    assert!(manager.is_open("b"));
}

/// Sink counting every removal per item.
#[derive(Debug, Default)]
struct Removals(Vec<NotificationId>);

impl NotificationSink for Removals {
    fn render(&mut self, _notification: &Notification) {}

    fn set_phase(&mut self, _id: NotificationId, _phase: ToastPhase) {}

    fn remove(&mut self, id: NotificationId) {
        self.0.push(id);
    }
}

#[test]
fn queue_scenario_with_one_slot() {
    let mut manager = notifications::Manager::default();
    let t0 = Instant::now();

    let a = manager.show("A", ShowOptions::new(), t0);
    manager.show("B", ShowOptions::new(), t0);

    // Drive the queue at roughly 60 Hz and record visibility windows.
    let mut first_seen = [None, None];
    let mut last_seen = [None, None];
    let mut now = t0;
    while manager.has_notifications() && now < t0 + ms(10_000) {
        manager.tick(now);
        assert!(manager.active_count() <= 1);
        for (notification, _) in manager.active() {
            let slot = if notification.id() == a { 0 } else { 1 };
            first_seen[slot].get_or_insert(now - t0);
            last_seen[slot] = Some(now - t0);
        }
        now += ms(16);
    }

    assert_eq!(first_seen[0], Some(Duration::ZERO));
    let a_gone = last_seen[0].expect("A was shown");
    let b_start = first_seen[1].expect("B was shown");
    let b_gone = last_seen[1].expect("B was shown");

    assert!(a_gone >= ms(2000) && a_gone < ms(2266), "{a_gone:?}");
    assert!(b_start >= ms(2250) && b_start < ms(2300), "{b_start:?}");
    assert!(b_gone >= ms(4500) - ms(16) && b_gone < ms(4600), "{b_gone:?}");
    assert!(!manager.has_notifications());
}

#[test]
fn tapped_toast_is_removed_once() {
    let mut manager = notifications::Manager::with_sink(ToastSettings::default(), Removals::default());
    let t0 = Instant::now();

    let id = manager.show("Tap", ShowOptions::new(), t0);
    manager.tick(t0 + ms(16));
    assert!(manager.handle_message(&notifications::NotificationMessage::Dismiss(id), t0 + ms(100)));
    assert!(!manager.handle_message(&notifications::NotificationMessage::Dismiss(id), t0 + ms(120)));

    for step in 1..=400 {
        manager.tick(t0 + ms(16 * step));
    }
    assert_eq!(manager.sink().0, vec![id]);
}

#[test]
fn huge_duration_override_is_capped() {
    let mut manager = notifications::Manager::default();
    let t0 = Instant::now();

    let id = manager.show("A", ShowOptions::new().duration_ms(1e22), t0);
    manager.tick(t0 + ms(16));
    assert_eq!(manager.phase(id), Some(ToastPhase::Shown));

    let cap = ms(config::MAX_TOAST_DURATION_MS);
    manager.tick(t0 + cap - ms(1));
    assert_eq!(manager.phase(id), Some(ToastPhase::Shown));
    manager.tick(t0 + cap);
    assert_eq!(manager.phase(id), Some(ToastPhase::Hiding));
}

#[test]
fn huge_duration_attribute_on_trigger_is_capped() {
    let mut manager = notifications::Manager::default();
    let mut overlays = overlays();
    let t0 = Instant::now();

    let trigger = Trigger::from_attrs("toast", [("duration", "1e22")]).expect("trigger");
    trigger.fire(&mut overlays, &mut manager, t0);
    manager.tick(t0 + ms(16));

    let (notification, phase) = manager.active().next().expect("toast admitted");
    assert_eq!(notification.duration(), ms(config::MAX_TOAST_DURATION_MS));
    assert_eq!(phase, ToastPhase::Shown);
}

#[test]
fn position_switch_mid_queue_only_moves_container() {
    let mut manager = notifications::Manager::new(ToastSettings {
        max: 2,
        ..ToastSettings::default()
    });
    let t0 = Instant::now();

    manager.show("A", ShowOptions::new(), t0);
    manager.show("B", ShowOptions::new(), t0);
    manager.show("C", ShowOptions::new(), t0);
    let before: Vec<String> = manager.active().map(|(n, _)| n.message().to_string()).collect();

    let top = Trigger::from_attrs("toast", [("text", "D"), ("position", "top")]).expect("trigger");
    let mut overlays = overlays();
    top.fire(&mut overlays, &mut manager, t0);

    let after: Vec<String> = manager.active().map(|(n, _)| n.message().to_string()).collect();
    assert_eq!(manager.position(), Position::Top);
    assert_eq!(before, after);
    assert_eq!(manager.queued_count(), 2);
}

#[test]
fn config_file_drives_manager_settings() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(
        &path,
        "[overlay]\nfull_close_delay_ms = 500\nalert_dim_close = false\n\n[toast]\nposition = \"top\"\nmax = 3\nduration_ms = 1500\n",
    )
    .expect("failed to write config");

    let config: Config = config::load_from_path(&path).expect("config should load");
    let overlay_settings = config.overlay.settings();
    let toast_settings = config.toast.settings();

    assert_eq!(overlay_settings.full_close_delay, ms(500));
    assert!(!overlay_settings.alert_dim_close);
    assert_eq!(overlay_settings.body_lock_class, "js-noscroll");
    assert_eq!(toast_settings.position, Position::Top);
    assert_eq!(toast_settings.max, 3);
    assert_eq!(toast_settings.default_duration, ms(1500));
}
