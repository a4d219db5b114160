//! Hand landmark sets as produced by a 21-point hand detector.
//!
//! Coordinates are normalized to the video frame: `x`/`y` in \[0, 1\], `z`
//! roughly depth relative to the wrist. The point order follows the usual
//! anatomical convention (0 = wrist, then four joints per digit from thumb
//! to pinky).

use crate::error::LandmarkError;
use glam::Vec3;

pub type Landmark = Vec3;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips averaged against the wrist to judge how open the hand is.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Skeleton edges for drawing a landmark preview.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// One detected hand: exactly [`LANDMARK_COUNT`] points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    #[inline]
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// 3-D Euclidean distance between two indexed landmarks.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].distance(self.points[b])
    }

    /// Mean distance from the wrist to the four non-thumb fingertips.
    pub fn mean_tip_to_wrist(&self) -> f32 {
        let sum: f32 = FINGERTIPS.iter().map(|&tip| self.distance(tip, WRIST)).sum();
        sum / FINGERTIPS.len() as f32
    }
}

impl TryFrom<&[Landmark]> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(points: &[Landmark]) -> Result<Self, Self::Error> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| LandmarkError::WrongCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        Ok(Self { points })
    }
}
