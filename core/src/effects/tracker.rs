//! Effect lifecycle tracker.
//!
//! Maintains the live lists of floating texts and toasts that the
//! presentation layer renders each frame. There are no runtime timers:
//! the caller drives expiry by calling [`EffectTracker::tick`] with the
//! current time.

use chrono::NaiveDateTime;
use questline_types::{FloatColor, ToastKind};
use serde::Serialize;

/// How long a floating text stays alive, in milliseconds.
pub const FLOAT_TEXT_LIFETIME_MS: i64 = 1_000;

/// How long a toast stays alive unless dismissed, in milliseconds.
pub const TOAST_LIFETIME_MS: i64 = 4_000;

/// Unique handle for a spawned effect.
///
/// Ids come from a monotonic counter, so two effects spawned within the
/// same instant are still distinct and can be removed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EffectId(u64);

/// A positioned transient text marker.
#[derive(Debug, Clone, Serialize)]
pub struct FloatingText {
    pub id: EffectId,
    pub text: String,
    /// Screen coordinates supplied by the caller.
    pub x: f32,
    pub y: f32,
    pub color: FloatColor,
    spawned_at: NaiveDateTime,
}

impl FloatingText {
    pub fn spawned_at(&self) -> NaiveDateTime {
        self.spawned_at
    }

    fn is_expired(&self, now: NaiveDateTime) -> bool {
        (now - self.spawned_at).num_milliseconds() >= FLOAT_TEXT_LIFETIME_MS
    }
}

/// A transient notification banner.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: EffectId,
    pub title: String,
    pub subtitle: String,
    pub kind: ToastKind,
    spawned_at: NaiveDateTime,
}

impl Toast {
    pub fn spawned_at(&self) -> NaiveDateTime {
        self.spawned_at
    }

    fn is_expired(&self, now: NaiveDateTime) -> bool {
        (now - self.spawned_at).num_milliseconds() >= TOAST_LIFETIME_MS
    }
}

/// Owns the live effect lists and hands out monotonic ids.
#[derive(Debug, Default)]
pub struct EffectTracker {
    floats: Vec<FloatingText>,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl EffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a floating text at the given position.
    pub fn spawn_float(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        color: FloatColor,
        now: NaiveDateTime,
    ) -> EffectId {
        let id = self.next_id();
        self.floats.push(FloatingText {
            id,
            text: text.into(),
            x,
            y,
            color,
            spawned_at: now,
        });
        id
    }

    /// Spawn a toast notification.
    pub fn spawn_toast(
        &mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        kind: ToastKind,
        now: NaiveDateTime,
    ) -> EffectId {
        let id = self.next_id();
        self.toasts.push(Toast {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            kind,
            spawned_at: now,
        });
        id
    }

    /// Remove a toast immediately, regardless of elapsed time.
    ///
    /// Safe no-op if the toast is already gone (dismissed earlier, or
    /// reaped by expiry). Returns whether a toast was removed.
    pub fn dismiss_toast(&mut self, id: EffectId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Reap expired entries. Removal is independent per entry.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.floats.retain(|f| !f.is_expired(now));
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// Live floating texts, in insertion order.
    pub fn floating_texts(&self) -> &[FloatingText] {
        &self.floats
    }

    /// Live toasts, in insertion order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Cheap check for whether anything is on screen.
    pub fn has_live_effects(&self) -> bool {
        !self.floats.is_empty() || !self.toasts.is_empty()
    }
}
