// Host-side tests for the gesture debouncer.

use tree_core::{Gesture, GestureDebouncer};

#[test]
fn emits_only_on_change() {
    let mut d = GestureDebouncer::new();
    let raw = [
        Gesture::Pinch,
        Gesture::Pinch,
        Gesture::Pinch,
        Gesture::Open,
        Gesture::Open,
        Gesture::None,
    ];
    let emitted: Vec<Gesture> = raw.iter().filter_map(|g| d.update(*g)).collect();
    assert_eq!(emitted, vec![Gesture::Pinch, Gesture::Open, Gesture::None]);
}

#[test]
fn initial_none_is_not_emitted() {
    let mut d = GestureDebouncer::new();
    assert_eq!(d.update(Gesture::None), None);
    assert_eq!(d.last(), Gesture::None);
}

#[test]
fn single_frame_flicker_flips_both_ways() {
    let mut d = GestureDebouncer::new();
    assert_eq!(d.update(Gesture::Open), Some(Gesture::Open));
    assert_eq!(d.update(Gesture::None), Some(Gesture::None));
    assert_eq!(d.update(Gesture::Open), Some(Gesture::Open));
}

#[test]
fn reset_returns_to_none() {
    let mut d = GestureDebouncer::new();
    d.update(Gesture::DoublePinch);
    d.reset();
    assert_eq!(d.last(), Gesture::None);
    assert_eq!(d.update(Gesture::DoublePinch), Some(Gesture::DoublePinch));
}
