use thiserror::Error;

/// Rejected output from a landmark detector.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} landmarks, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("detector failed: {0}")]
    Detector(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("blessing catalog is empty")]
    EmptyCatalog,
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("pinch threshold {pinch} must not exceed open threshold {open}")]
    OverlappingBands { pinch: f32, open: f32 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("tick source unavailable: {0}")]
    Unavailable(String),
    #[error("frame loop already stopped")]
    Stopped,
}
