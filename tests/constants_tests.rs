// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use stage_core::{RESIZE_DEBOUNCE, TICK_INTERVAL, WAVE_CENTER_RATIO};
use std::time::Duration;

#[test]
fn widget_selectors_are_class_selectors() {
    for sel in [
        PLAYER_SELECTOR,
        PLAY_BUTTON_SELECTOR,
        PROGRESS_BAR_SELECTOR,
        PROGRESS_FILL_SELECTOR,
        TIME_LABEL_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
        assert!(!sel.contains(' '), "{sel} should not be a descendant selector");
    }
}

#[test]
fn widget_selectors_are_distinct() {
    let sels = [
        PLAYER_SELECTOR,
        PLAY_BUTTON_SELECTOR,
        PROGRESS_BAR_SELECTOR,
        PROGRESS_FILL_SELECTOR,
        TIME_LABEL_SELECTOR,
    ];
    for (i, a) in sels.iter().enumerate() {
        for b in &sels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn class_names_and_ids_are_bare() {
    assert!(!PLAYING_CLASS.starts_with('.'));
    assert!(!WAVEFORM_CANVAS_ID.starts_with('#'));
    assert!(TRACK_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn media_queries_are_parenthesized() {
    for q in [REDUCED_MOTION_QUERY, COARSE_POINTER_QUERY] {
        assert!(q.starts_with('(') && q.ends_with(')'), "{q}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_sane() {
    assert_eq!(TICK_INTERVAL, Duration::from_millis(100));
    assert!(RESIZE_DEBOUNCE > Duration::ZERO);
    assert!(WAVE_CENTER_RATIO > 0.0 && WAVE_CENTER_RATIO < 1.0);
}
