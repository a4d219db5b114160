//! Per-frame hand shape classification.
//!
//! The classifier is memoryless: each call looks only at the landmark set it
//! is given. Suppressing repeats is the job of [`crate::debounce`].

use crate::constants::*;
use crate::landmark::{LandmarkSet, INDEX_TIP, MIDDLE_MCP, THUMB_TIP};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    #[default]
    None,
    /// Curled fingers: assemble the tree.
    Pinch,
    /// Spread fingers: explode and steer rotation.
    Open,
    /// Thumb and index tips touching: show a blessing card.
    DoublePinch,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::None => "NONE",
            Gesture::Pinch => "PINCH",
            Gesture::Open => "OPEN",
            Gesture::DoublePinch => "DOUBLE_PINCH",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierThresholds {
    /// Thumb-to-index distance below which the hand is a double pinch.
    pub double_pinch_max: f32,
    /// Mean fingertip-to-wrist distance below which the hand is a pinch.
    pub pinch_max: f32,
    /// Mean fingertip-to-wrist distance above which the hand is open.
    pub open_min: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            double_pinch_max: DOUBLE_PINCH_MAX_DIST,
            pinch_max: PINCH_MAX_AVG_DIST,
            open_min: OPEN_MIN_AVG_DIST,
        }
    }
}

/// Result of looking at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub gesture: Gesture,
    /// Mirrored middle-knuckle position; `None` when no hand was detected.
    pub hand: Option<Vec2>,
}

/// Map a landmark set to a gesture. First matching band wins; the gap
/// between `pinch_max` and `open_min` is left unclassified.
pub fn classify(landmarks: Option<&LandmarkSet>, thresholds: &ClassifierThresholds) -> Gesture {
    let Some(lm) = landmarks else {
        return Gesture::None;
    };
    let pinch_dist = lm.distance(THUMB_TIP, INDEX_TIP);
    let spread = lm.mean_tip_to_wrist();

    if pinch_dist < thresholds.double_pinch_max {
        Gesture::DoublePinch
    } else if spread < thresholds.pinch_max {
        Gesture::Pinch
    } else if spread > thresholds.open_min {
        Gesture::Open
    } else {
        Gesture::None
    }
}

/// Screen-space hand position from the middle knuckle. The preview is
/// mirrored, so x is flipped.
#[inline]
pub fn hand_position(landmarks: &LandmarkSet) -> Vec2 {
    let knuckle = landmarks.point(MIDDLE_MCP);
    Vec2::new(1.0 - knuckle.x, knuckle.y)
}

pub fn observe(landmarks: Option<&LandmarkSet>, thresholds: &ClassifierThresholds) -> Observation {
    Observation {
        gesture: classify(landmarks, thresholds),
        hand: landmarks.map(hand_position),
    }
}
