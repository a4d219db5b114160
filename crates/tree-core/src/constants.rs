// Shared gesture/scene tuning constants used by the core and the web frontend.

// Classifier thresholds (normalized landmark units)
pub const DOUBLE_PINCH_MAX_DIST: f32 = 0.06; // thumb tip to index tip
pub const PINCH_MAX_AVG_DIST: f32 = 0.25; // mean fingertip-to-wrist, curled hand
pub const OPEN_MIN_AVG_DIST: f32 = 0.35; // mean fingertip-to-wrist, spread hand

// Rotation control
pub const IDLE_ROTATION_SPEED: f32 = 0.2; // slow spin whenever the hand is not steering
pub const ROTATION_GAIN: f32 = 4.0; // (hand_x - 0.5) * gain -> roughly [-2, 2]
pub const HAND_CENTER_X: f32 = 0.5;

// Hand position before the first detection
pub const INITIAL_HAND_POSITION: [f32; 2] = [0.5, 0.5];

// Animation smoothing
pub const EXPLODE_RATE_PER_SEC: f32 = 2.5; // particle morph speed between layouts
pub const CARD_SCALE_LERP: f32 = 0.1; // per-frame card grow/shrink factor
pub const BASE_SPIN_PER_SEC: f32 = 0.1; // angle added per second regardless of control
pub const SPIN_FROM_SPEED: f32 = 5.0; // angle offset per unit of rotation speed
pub const CARD_SWAY_AMPLITUDE: f32 = 0.05;
pub const CARD_BOB_AMPLITUDE: f32 = 0.2;
pub const CARD_BOB_FREQUENCY: f32 = 0.5;

// Seed used when no explicit seed is configured
pub const DEFAULT_SEED: u64 = 0x5EED_7EE5;
