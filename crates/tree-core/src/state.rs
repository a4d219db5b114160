//! Scene state driven by gesture changes and hand movement.
//!
//! [`SceneState`] owns the coarse visual mode, the blessing-card overlay and
//! the rotation speed. It is the only writer of that state; the renderer reads
//! a [`SceneSnapshot`] once per frame.

use crate::blessings::BLESSINGS;
use crate::constants::*;
use crate::error::ConfigError;
use crate::gesture::Gesture;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Particles gathered into the tree shape.
    #[default]
    Assembled,
    /// Particles scattered outward.
    Exploded,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Assembled => "ASSEMBLED",
            Mode::Exploded => "EXPLODED",
        }
    }
}

/// Blessing card overlay. `text` keeps its last value after hiding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayCard {
    pub visible: bool,
    pub text: &'static str,
}

/// Source of uniform values in `[0, 1)` used to pick card texts.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic [`RandomSource`] backed by a seeded `StdRng`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// `floor(r * len)`, clamped so an out-of-range source can't index past the end.
#[inline]
pub fn pick_index(r: f64, len: usize) -> usize {
    let idx = (r.clamp(0.0, 1.0) * len as f64).floor() as usize;
    idx.min(len.saturating_sub(1))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub idle_rotation_speed: f32,
    pub rotation_gain: f32,
    pub catalog: &'static [&'static str],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            idle_rotation_speed: IDLE_ROTATION_SPEED,
            rotation_gain: ROTATION_GAIN,
            catalog: BLESSINGS,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (name, value) in [
            ("idle_rotation_speed", self.idle_rotation_speed),
            ("rotation_gain", self.rotation_gain),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot {
    pub mode: Mode,
    pub gesture: Gesture,
    pub rotation_speed: f32,
    pub card: OverlayCard,
    pub hand_position: Vec2,
}

impl SceneSnapshot {
    /// Pack into a GPU-uploadable uniform block.
    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms {
            hand_position: self.hand_position.to_array(),
            rotation_speed: self.rotation_speed,
            exploded: match self.mode {
                Mode::Assembled => 0.0,
                Mode::Exploded => 1.0,
            },
            card_visible: if self.card.visible { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub hand_position: [f32; 2],
    pub rotation_speed: f32,
    pub exploded: f32,
    pub card_visible: f32,
    pub _pad: [f32; 3],
}

pub struct SceneState {
    config: SceneConfig,
    rng: Box<dyn RandomSource>,
    mode: Mode,
    card: OverlayCard,
    gesture: Gesture,
    hand_position: Vec2,
    rotation_speed: f32,
}

impl SceneState {
    pub fn new(config: SceneConfig, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    /// Default configuration with a seeded random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(SceneConfig::default(), Box::new(SeededRandom::new(seed)))
    }

    fn from_parts(config: SceneConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            rotation_speed: config.idle_rotation_speed,
            config,
            rng,
            mode: Mode::Assembled,
            card: OverlayCard::default(),
            gesture: Gesture::None,
            hand_position: Vec2::from_array(INITIAL_HAND_POSITION),
        }
    }

    /// Apply a debounced gesture change.
    ///
    /// | gesture      | card hidden                 | card visible               |
    /// |--------------|-----------------------------|----------------------------|
    /// | DOUBLE_PINCH | show card with random text  | nothing                    |
    /// | OPEN         | explode                     | hide card, explode         |
    /// | PINCH        | assemble                    | hide card, assemble        |
    /// | NONE         | assemble                    | nothing                    |
    pub fn on_gesture_change(&mut self, gesture: Gesture) {
        self.gesture = gesture;
        match gesture {
            Gesture::DoublePinch => {
                if !self.card.visible {
                    let idx = pick_index(self.rng.next_unit(), self.config.catalog.len());
                    self.card = OverlayCard {
                        visible: true,
                        text: self.config.catalog[idx],
                    };
                    log::info!("[scene] card shown: {}", self.card.text);
                }
            }
            Gesture::Open => {
                self.hide_card();
                self.set_mode(Mode::Exploded);
            }
            Gesture::Pinch => {
                self.hide_card();
                self.set_mode(Mode::Assembled);
            }
            Gesture::None => {
                if !self.card.visible {
                    self.set_mode(Mode::Assembled);
                }
            }
        }
    }

    /// Record the latest hand position. Frames without a hand don't call this,
    /// so the last known position sticks.
    pub fn on_hand_move(&mut self, position: Vec2) {
        self.hand_position = position;
    }

    /// Recompute the rotation speed from the current (not debounced) gesture.
    pub fn update_rotation(&mut self, current: Gesture) -> f32 {
        self.gesture = current;
        self.rotation_speed = rotation_speed_for(
            self.mode,
            current,
            self.hand_position.x,
            &self.config,
        );
        self.rotation_speed
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            mode: self.mode,
            gesture: self.gesture,
            rotation_speed: self.rotation_speed,
            card: self.card,
            hand_position: self.hand_position,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn card(&self) -> OverlayCard {
        self.card
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("[scene] mode {} -> {}", self.mode.as_str(), mode.as_str());
            self.mode = mode;
        }
    }

    fn hide_card(&mut self) {
        if self.card.visible {
            log::info!("[scene] card dismissed");
            self.card.visible = false;
        }
    }
}

/// Open hand while exploded steers the spin; anything else idles.
pub fn rotation_speed_for(mode: Mode, gesture: Gesture, hand_x: f32, config: &SceneConfig) -> f32 {
    if mode == Mode::Exploded && gesture == Gesture::Open {
        (hand_x - HAND_CENTER_X) * config.rotation_gain
    } else {
        config.idle_rotation_speed
    }
}
