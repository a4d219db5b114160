// Host-side tests for landmark sets and the blessing catalog.

use glam::Vec3;
use tree_core::landmark::{HAND_CONNECTIONS, INDEX_TIP, WRIST};
use tree_core::{
    blessing_lines, gold_palette_rgb, hex_to_rgb, LandmarkError, LandmarkSet, BLESSINGS,
    LANDMARK_COUNT,
};

#[test]
fn wrong_counts_are_rejected() {
    let short = vec![Vec3::ZERO; 5];
    assert_eq!(
        LandmarkSet::try_from(short.as_slice()),
        Err(LandmarkError::WrongCount {
            expected: 21,
            actual: 5
        })
    );
    let exact = vec![Vec3::ONE; LANDMARK_COUNT];
    assert!(LandmarkSet::try_from(exact.as_slice()).is_ok());
}

#[test]
fn distances_are_euclidean_3d() {
    let mut pts = [Vec3::ZERO; LANDMARK_COUNT];
    pts[INDEX_TIP] = Vec3::new(3.0, 4.0, 12.0);
    let set = LandmarkSet::new(pts);
    assert!((set.distance(WRIST, INDEX_TIP) - 13.0).abs() < 1e-6);
    // three tips at the wrist, one 13 away
    assert!((set.mean_tip_to_wrist() - 13.0 / 4.0).abs() < 1e-6);
}

#[test]
fn connections_cover_every_landmark() {
    let mut seen = [false; LANDMARK_COUNT];
    for (a, b) in HAND_CONNECTIONS {
        assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT);
        assert_ne!(a, b);
        seen[a] = true;
        seen[b] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn catalog_is_non_empty_and_splits_into_lines() {
    assert_eq!(BLESSINGS.len(), 13);
    for text in BLESSINGS {
        let lines = blessing_lines(text);
        assert!(!lines.is_empty(), "{text}");
        assert!(lines.iter().all(|l| !l.contains(',')));
    }
    assert_eq!(
        blessing_lines("发财,被爱,好运常在"),
        vec!["发财", "被爱", "好运常在"]
    );
}

#[test]
fn blessing_lines_handles_full_width_commas_and_blanks() {
    assert_eq!(blessing_lines("平安，喜乐"), vec!["平安", "喜乐"]);
    assert_eq!(blessing_lines(" A ,, B ,"), vec!["A", "B"]);
    assert!(blessing_lines("").is_empty());
}

#[test]
fn palette_parses() {
    assert_eq!(hex_to_rgb("#FFFFFF"), Some([1.0, 1.0, 1.0]));
    assert_eq!(hex_to_rgb("#FFD700"), Some([1.0, 215.0 / 255.0, 0.0]));
    assert_eq!(hex_to_rgb("FFD700"), None);
    assert_eq!(hex_to_rgb("#FFD70"), None);
    assert_eq!(hex_to_rgb("#GGGGGG"), None);
    assert_eq!(gold_palette_rgb()[0], [1.0, 215.0 / 255.0, 0.0]);
}

#[test]
fn palette_flattens_to_rgb_triples() {
    let flat = gold_palette_rgb().concat();
    assert_eq!(flat.len(), 15);
    assert_eq!(&flat[..3], &[1.0, 215.0 / 255.0, 0.0]);
    assert!(flat.iter().all(|c| (0.0..=1.0).contains(c)));
}
