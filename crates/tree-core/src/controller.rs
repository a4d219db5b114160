//! The per-frame pipeline: classify, debounce, transition, derive rotation.

use crate::constants::DEFAULT_SEED;
use crate::debounce::GestureDebouncer;
use crate::error::ConfigError;
use crate::gesture::{observe, ClassifierThresholds, Gesture};
use crate::landmark::LandmarkSet;
use crate::state::{RandomSource, SceneConfig, SceneSnapshot, SceneState, SeededRandom};

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub thresholds: ClassifierThresholds,
    pub scene: SceneConfig,
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassifierThresholds::default(),
            scene: SceneConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("double_pinch_max", t.double_pinch_max),
            ("pinch_max", t.pinch_max),
            ("open_min", t.open_min),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if t.pinch_max > t.open_min {
            return Err(ConfigError::OverlappingBands {
                pinch: t.pinch_max,
                open: t.open_min,
            });
        }
        self.scene.validate()
    }
}

/// Outcome of one processed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Raw classification of this frame.
    pub gesture: Gesture,
    /// Set when the debouncer let a change through.
    pub changed: Option<Gesture>,
    pub landmarks: Option<LandmarkSet>,
    pub snapshot: SceneSnapshot,
}

pub struct GestureController {
    thresholds: ClassifierThresholds,
    debouncer: GestureDebouncer,
    scene: SceneState,
}

impl GestureController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        let rng = Box::new(SeededRandom::new(config.seed));
        Self::with_random(config, rng)
    }

    pub fn with_random(
        config: ControllerConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            thresholds: config.thresholds,
            debouncer: GestureDebouncer::new(),
            scene: SceneState::new(config.scene, rng)?,
        })
    }

    pub fn process_frame(&mut self, landmarks: Option<&LandmarkSet>) -> FrameReport {
        let obs = observe(landmarks, &self.thresholds);
        if let Some(pos) = obs.hand {
            self.scene.on_hand_move(pos);
        }
        let changed = self.debouncer.update(obs.gesture);
        if let Some(g) = changed {
            log::debug!("[gesture] {}", g.as_str());
            self.scene.on_gesture_change(g);
        }
        self.scene.update_rotation(obs.gesture);
        FrameReport {
            gesture: obs.gesture,
            changed,
            landmarks: landmarks.copied(),
            snapshot: self.scene.snapshot(),
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.scene.snapshot()
    }

    pub fn last_gesture(&self) -> Gesture {
        self.debouncer.last()
    }
}
