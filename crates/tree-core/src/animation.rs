//! Frame-to-frame easing of the scene snapshot into animation parameters.
//!
//! The state machine flips discrete values; the renderer wants them eased.
//! [`SceneAnimator`] turns a stream of snapshots plus frame deltas into
//! smoothly varying morph, card scale and spin values.

use crate::constants::*;
use crate::state::{Mode, SceneSnapshot};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationFrame {
    /// 0 = tree layout, 1 = scattered layout.
    pub explode_progress: f32,
    /// 0 = card hidden, 1 = card fully shown.
    pub card_scale: f32,
    /// Scene spin around the vertical axis, radians.
    pub rotation_y: f32,
    pub card_sway: f32,
    pub card_bob: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SceneAnimator {
    elapsed: f32,
    frame: AnimationFrame,
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, snapshot: &SceneSnapshot, dt_sec: f32) -> AnimationFrame {
        let dt_sec = dt_sec.max(0.0);
        self.elapsed += dt_sec;

        let target = match snapshot.mode {
            Mode::Assembled => 0.0,
            Mode::Exploded => 1.0,
        };
        let alpha = 1.0 - (-dt_sec * EXPLODE_RATE_PER_SEC).exp();
        let f = &mut self.frame;
        f.explode_progress += (target - f.explode_progress) * alpha;

        let card_target = if snapshot.card.visible { 1.0 } else { 0.0 };
        f.card_scale += (card_target - f.card_scale) * CARD_SCALE_LERP;

        f.rotation_y = self.elapsed * BASE_SPIN_PER_SEC + snapshot.rotation_speed * SPIN_FROM_SPEED;

        // Float only while shown; keep last pose during the shrink.
        if snapshot.card.visible {
            f.card_sway = self.elapsed.sin() * CARD_SWAY_AMPLITUDE;
            f.card_bob = (self.elapsed * CARD_BOB_FREQUENCY).sin() * CARD_BOB_AMPLITUDE;
        }
        self.frame
    }

    #[inline]
    pub fn current(&self) -> AnimationFrame {
        self.frame
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
