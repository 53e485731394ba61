// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config};
use iced_toasts::error::Error;
use iced_toasts::ui::notifications::{
    Anchor, Manager, Severity, SlideDirection, ToastConfig, ToastMessage, ToastState,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn saved_toast_lives_for_default_duration_plus_grace() {
    let t0 = Instant::now();
    let mut manager = Manager::default();
    manager.initialize();

    let id = manager
        .build_toast()
        .message("Saved")
        .severity_named("success")
        .show(t0)
        .expect("valid toast");

    manager.tick(t0 + ms(16));
    assert_eq!(manager.state_of(id), Some(ToastState::Visible));
    assert_eq!(
        manager.get(id).map(|t| t.config().severity),
        Some(Severity::Success)
    );

    for step in (32..4500).step_by(16) {
        manager.tick(t0 + ms(step));
        assert_ne!(manager.state_of(id), Some(ToastState::Removed), "removed early at {step}ms");
    }

    manager.tick(t0 + ms(4500));
    assert_eq!(manager.state_of(id), Some(ToastState::Removed));
    assert!(!manager.has_toasts());
}

#[test]
fn empty_message_is_rejected_without_side_effects() {
    let mut manager = Manager::default();
    let before = manager.active_count();

    let result = manager.build_toast().message("").show(Instant::now());

    assert_eq!(result, Err(Error::EmptyMessage));
    assert_eq!(manager.active_count(), before);
}

#[test]
fn manual_close_before_timeout_fires_exactly_one_removal() {
    let t0 = Instant::now();
    let mut manager = Manager::default();
    let id = manager.show(ToastConfig::new("closing"), t0).expect("valid toast");

    manager.handle_message(&ToastMessage::Close(id), t0 + ms(100));
    manager.handle_message(&ToastMessage::Close(id), t0 + ms(150));

    let mut removals = 0;
    for step in (0..=5000).step_by(50) {
        removals += manager.tick(t0 + ms(step)).len();
    }
    assert_eq!(removals, 1);
}

#[test]
fn second_show_with_new_anchor_relocates_region() {
    let t0 = Instant::now();
    let mut manager = Manager::default();
    let first = manager
        .show(ToastConfig::new("first").with_anchor(Anchor::TopRight), t0)
        .expect("valid toast");
    let second = manager
        .show(ToastConfig::new("second").with_anchor(Anchor::BottomLeft), t0 + ms(200))
        .expect("valid toast");

    assert_eq!(manager.anchor(), Anchor::BottomLeft);

    manager.tick(t0 + ms(4000));
    let first_toast = manager.get(first).expect("first is leaving");
    assert_eq!(first_toast.state(), ToastState::Dismissing);
    assert_eq!(first_toast.slide_direction(), SlideDirection::Right);
    assert_eq!(
        manager.get(second).map(|t| t.slide_direction()),
        Some(SlideDirection::Left)
    );
}

#[test]
fn dismiss_all_empties_region_after_grace() {
    let t0 = Instant::now();
    let mut manager = Manager::default();
    let ids: Vec<_> = ["one", "two", "three"]
        .iter()
        .map(|m| manager.show(ToastConfig::new(*m).with_duration_ms(0), t0).expect("valid toast"))
        .collect();

    manager.handle_message(&ToastMessage::DismissAll, t0 + ms(1000));
    manager.handle_message(&ToastMessage::Tick(t0 + ms(1000) + manager.exit_grace()), t0);

    assert_eq!(manager.active_count(), 0);
    for id in ids {
        assert_eq!(manager.state_of(id), Some(ToastState::Removed));
    }
}

#[test]
fn persisted_defaults_drive_new_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        default_anchor: Some(Anchor::BottomRight),
        default_duration_ms: Some(0),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    let t0 = Instant::now();
    let mut manager = Manager::new(&loaded);
    let id = manager.build_toast().message("pinned").show(t0).expect("valid toast");

    manager.tick(t0 + Duration::from_secs(60));
    assert_eq!(manager.anchor(), Anchor::BottomRight);
    assert_eq!(manager.state_of(id), Some(ToastState::Visible));

    dir.close().expect("Failed to close temporary directory");
}
