//! Gesture classification and scene state for the gesture tree.
//!
//! Nothing in this crate touches the browser; the web frontend feeds it
//! landmark sets and reads back [`SceneSnapshot`]s.

pub mod animation;
pub mod blessings;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod gesture;
pub mod landmark;
pub mod scheduler;
pub mod state;

pub use animation::*;
pub use blessings::*;
pub use controller::*;
pub use debounce::*;
pub use error::*;
pub use gesture::*;
pub use landmark::{LandmarkSet, LANDMARK_COUNT};
pub use scheduler::*;
pub use state::*;
