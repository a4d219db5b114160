// Shared landmark builders for host-side tests.
#![allow(dead_code)]

use glam::Vec3;
use tree_core::landmark::*;
use tree_core::{LandmarkSet, RandomSource};

/// A synthetic hand: every fingertip sits `spread` above the wrist, the thumb
/// tip is `pinch_gap` to the side of the index tip, and the middle knuckle is
/// at `knuckle`.
pub fn hand_at(wrist: Vec3, spread: f32, pinch_gap: Vec3, knuckle: Vec3) -> LandmarkSet {
    let mut pts = [wrist; LANDMARK_COUNT];
    for tip in FINGERTIPS {
        pts[tip] = wrist - Vec3::new(0.0, spread, 0.0);
    }
    pts[THUMB_TIP] = pts[INDEX_TIP] + pinch_gap;
    pts[MIDDLE_MCP] = knuckle;
    LandmarkSet::new(pts)
}

pub fn hand(spread: f32, pinch_gap: f32) -> LandmarkSet {
    hand_at(
        Vec3::new(0.5, 0.9, 0.0),
        spread,
        Vec3::new(pinch_gap, 0.0, 0.0),
        Vec3::new(0.3, 0.6, 0.0),
    )
}

pub fn hand_with_knuckle(spread: f32, pinch_gap: f32, knuckle_x: f32, knuckle_y: f32) -> LandmarkSet {
    hand_at(
        Vec3::new(0.5, 0.9, 0.0),
        spread,
        Vec3::new(pinch_gap, 0.0, 0.0),
        Vec3::new(knuckle_x, knuckle_y, 0.0),
    )
}

pub fn open_hand() -> LandmarkSet {
    hand(0.45, 0.3)
}

pub fn fist() -> LandmarkSet {
    hand(0.15, 0.1)
}

pub fn double_pinch() -> LandmarkSet {
    hand(0.3, 0.02)
}

/// Plays back fixed values, repeating the last one.
pub struct FixedRandom {
    values: Vec<f64>,
    next: usize,
}

impl FixedRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        let i = self.next.min(self.values.len() - 1);
        self.next += 1;
        self.values[i]
    }
}
