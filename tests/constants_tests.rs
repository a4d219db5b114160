// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its pure constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tree_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn classifier_bands_are_ordered() {
    assert!(DOUBLE_PINCH_MAX_DIST > 0.0);
    assert!(PINCH_MAX_AVG_DIST < OPEN_MIN_AVG_DIST);
    assert!(DOUBLE_PINCH_MAX_DIST < PINCH_MAX_AVG_DIST);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotation_range_is_symmetric_around_center() {
    let max = (1.0 - HAND_CENTER_X) * ROTATION_GAIN;
    let min = (0.0 - HAND_CENTER_X) * ROTATION_GAIN;
    assert!((max - 2.0).abs() < 1e-6);
    assert!((min + 2.0).abs() < 1e-6);
    assert!(IDLE_ROTATION_SPEED > 0.0 && IDLE_ROTATION_SPEED < max);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_in_range() {
    assert!(EXPLODE_RATE_PER_SEC > 0.0);
    assert!(CARD_SCALE_LERP > 0.0 && CARD_SCALE_LERP <= 1.0);
    assert!(INITIAL_HAND_POSITION.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn cursor_css_uses_viewport_units() {
    assert_eq!(
        cursor_css(0.25, 0.5),
        ("25.00vw".to_string(), "50.00vh".to_string())
    );
    assert_eq!(cursor_css(0.0, 1.0), ("0.00vw".to_string(), "100.00vh".to_string()));
}

#[test]
fn preview_point_is_mirrored() {
    assert_eq!(preview_point(0.0, 0.0, 320.0, 240.0), (320.0, 0.0));
    assert_eq!(preview_point(1.0, 1.0, 320.0, 240.0), (0.0, 240.0));
    assert_eq!(preview_point(0.25, 0.5, 320.0, 240.0), (240.0, 120.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_request_is_small_landscape() {
    assert!(VIDEO_WIDTH > VIDEO_HEIGHT);
    assert_eq!(VIDEO_FACING_MODE, "user");
    assert_ne!(STATUS_LOADING, STATUS_NO_CAMERA);
}
