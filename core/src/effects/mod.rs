//! Transient visual effect tracking
//!
//! This module provides:
//! - **Floating texts**: short positioned markers ("damage numbers")
//! - **Toasts**: notification banners for achievements, level-ups, quests
//! - **Tracker**: owns both lists and reaps expired entries on `tick`
//!
//! Entries are time-stamped at spawn and removed when their fixed lifetime
//! has elapsed at a subsequent `tick`, or (toasts only) when dismissed
//! explicitly. Whichever happens first wins; the other path is a no-op.

pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use tracker::{
    EffectId, EffectTracker, FloatingText, Toast, FLOAT_TEXT_LIFETIME_MS, TOAST_LIFETIME_MS,
};
