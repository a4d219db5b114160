// Host-side tests for the landmark classifier.

mod common;

use common::*;
use glam::{Vec2, Vec3};
use tree_core::{classify, hand_position, observe, ClassifierThresholds, Gesture};

fn classify_default(hand: &tree_core::LandmarkSet) -> Gesture {
    classify(Some(hand), &ClassifierThresholds::default())
}

#[test]
fn no_hand_is_none() {
    assert_eq!(classify(None, &ClassifierThresholds::default()), Gesture::None);
    let obs = observe(None, &ClassifierThresholds::default());
    assert_eq!(obs.gesture, Gesture::None);
    assert_eq!(obs.hand, None);
}

#[test]
fn touching_thumb_and_index_is_double_pinch_whatever_the_spread() {
    for spread in [0.1, 0.3, 0.5] {
        assert_eq!(
            classify_default(&hand(spread, 0.02)),
            Gesture::DoublePinch,
            "spread {spread}"
        );
    }
}

#[test]
fn curled_fingers_are_pinch() {
    assert_eq!(classify_default(&hand(0.15, 0.1)), Gesture::Pinch);
    assert_eq!(classify_default(&hand(0.24, 0.07)), Gesture::Pinch);
}

#[test]
fn spread_fingers_are_open() {
    assert_eq!(classify_default(&hand(0.4, 0.2)), Gesture::Open);
    assert_eq!(classify_default(&hand(0.6, 0.3)), Gesture::Open);
}

#[test]
fn transition_band_is_unclassified() {
    assert_eq!(classify_default(&hand(0.3, 0.2)), Gesture::None);
    assert_eq!(classify_default(&hand(0.27, 0.2)), Gesture::None);
    assert_eq!(classify_default(&hand(0.33, 0.2)), Gesture::None);
}

#[test]
fn pinch_band_is_strict() {
    // Distances of exactly 0.25 are representable, so the comparison is exact.
    let edge = hand_at(
        Vec3::ZERO,
        0.25,
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert_eq!(classify_default(&edge), Gesture::None);
}

#[test]
fn double_pinch_band_is_strict() {
    // Thumb to index exactly 0.06 apart falls through to the pinch check.
    let edge = hand_at(
        Vec3::ZERO,
        0.2,
        Vec3::new(0.06, 0.0, 0.0),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert_eq!(classify_default(&edge), Gesture::Pinch);
}

#[test]
fn open_band_is_strict() {
    let edge = hand_at(
        Vec3::ZERO,
        0.35,
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert_eq!(classify_default(&edge), Gesture::None);
}

#[test]
fn pinch_distance_is_three_dimensional() {
    let deep = hand_at(
        Vec3::new(0.5, 0.9, 0.0),
        0.45,
        Vec3::new(0.0, 0.0, 0.1),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert_eq!(classify_default(&deep), Gesture::Open);

    let shallow = hand_at(
        Vec3::new(0.5, 0.9, 0.0),
        0.45,
        Vec3::new(0.0, 0.0, 0.05),
        Vec3::new(0.5, 0.5, 0.0),
    );
    assert_eq!(classify_default(&shallow), Gesture::DoublePinch);
}

#[test]
fn custom_thresholds_move_the_bands() {
    let loose = ClassifierThresholds {
        double_pinch_max: 0.06,
        pinch_max: 0.35,
        open_min: 0.5,
    };
    assert_eq!(classify(Some(&hand(0.3, 0.2)), &loose), Gesture::Pinch);
    assert_eq!(classify(Some(&hand(0.45, 0.2)), &loose), Gesture::None);
}

#[test]
fn hand_position_mirrors_x_from_middle_knuckle() {
    let h = hand_with_knuckle(0.3, 0.2, 0.2, 0.7);
    let p = hand_position(&h);
    assert!((p - Vec2::new(0.8, 0.7)).length() < 1e-6);
}

#[test]
fn position_is_reported_even_when_unclassified() {
    let obs = observe(Some(&hand(0.3, 0.2)), &ClassifierThresholds::default());
    assert_eq!(obs.gesture, Gesture::None);
    assert!(obs.hand.is_some());
}

#[test]
fn gesture_names_match_wire_labels() {
    assert_eq!(Gesture::None.as_str(), "NONE");
    assert_eq!(Gesture::Pinch.as_str(), "PINCH");
    assert_eq!(Gesture::Open.as_str(), "OPEN");
    assert_eq!(Gesture::DoublePinch.as_str(), "DOUBLE_PINCH");
}
