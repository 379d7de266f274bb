//! Tests for the effect tracker
//!
//! Verifies lifetime-based reaping and idempotent toast dismissal.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use questline_types::{FloatColor, ToastKind};

use super::tracker::{EffectTracker, FLOAT_TEXT_LIFETIME_MS, TOAST_LIFETIME_MS};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn at(ms: i64) -> NaiveDateTime {
    base() + Duration::milliseconds(ms)
}

// ─────────────────────────────────────────────────────────────────────────────
// Floating texts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_float_expires_after_lifetime() {
    let mut tracker = EffectTracker::new();
    tracker.spawn_float("+50 XP", 10.0, 20.0, FloatColor::Emerald, at(0));

    // Still alive just before the lifetime elapses.
    tracker.tick(at(FLOAT_TEXT_LIFETIME_MS - 1));
    assert_eq!(tracker.floating_texts().len(), 1);

    tracker.tick(at(FLOAT_TEXT_LIFETIME_MS));
    assert!(tracker.floating_texts().is_empty());
}

#[test]
fn test_same_tick_spawns_get_distinct_ids() {
    let mut tracker = EffectTracker::new();
    let a = tracker.spawn_float("BUG SQUASHED!", 5.0, 5.0, FloatColor::Red, at(0));
    let b = tracker.spawn_float("+100 XP", 5.0, -25.0, FloatColor::Yellow, at(0));

    assert_ne!(a, b);
    assert_eq!(tracker.floating_texts().len(), 2);
}

#[test]
fn test_floats_expire_independently() {
    let mut tracker = EffectTracker::new();
    tracker.spawn_float("first", 0.0, 0.0, FloatColor::White, at(0));
    tracker.spawn_float("second", 0.0, 0.0, FloatColor::White, at(600));

    tracker.tick(at(FLOAT_TEXT_LIFETIME_MS));
    let remaining = tracker.floating_texts();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "second");

    tracker.tick(at(600 + FLOAT_TEXT_LIFETIME_MS));
    assert!(tracker.floating_texts().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Toasts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_toast_expires_after_lifetime() {
    let mut tracker = EffectTracker::new();
    tracker.spawn_toast("Bug Hunter", "Achievement Unlocked", ToastKind::Achievement, at(0));

    tracker.tick(at(TOAST_LIFETIME_MS - 1));
    assert_eq!(tracker.toasts().len(), 1);

    tracker.tick(at(TOAST_LIFETIME_MS));
    assert!(tracker.toasts().is_empty());
}

#[test]
fn test_dismiss_before_expiry_removes_immediately() {
    let mut tracker = EffectTracker::new();
    let id = tracker.spawn_toast("Level Up! 2", "", ToastKind::LevelUp, at(0));

    assert!(tracker.dismiss_toast(id));
    assert!(tracker.toasts().is_empty());

    // Double removal is a harmless no-op, as is the later expiry sweep.
    assert!(!tracker.dismiss_toast(id));
    tracker.tick(at(TOAST_LIFETIME_MS));
    assert!(tracker.toasts().is_empty());
}

#[test]
fn test_dismiss_leaves_other_toasts_alone() {
    let mut tracker = EffectTracker::new();
    let first = tracker.spawn_toast("First", "", ToastKind::Quest, at(0));
    let second = tracker.spawn_toast("Second", "", ToastKind::Quest, at(0));
    assert_ne!(first, second);

    tracker.dismiss_toast(first);
    let remaining = tracker.toasts();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Second");
}

#[test]
fn test_has_live_effects() {
    let mut tracker = EffectTracker::new();
    assert!(!tracker.has_live_effects());

    tracker.spawn_float("x", 0.0, 0.0, FloatColor::White, at(0));
    assert!(tracker.has_live_effects());

    tracker.tick(at(FLOAT_TEXT_LIFETIME_MS));
    assert!(!tracker.has_live_effects());
}
