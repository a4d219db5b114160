/// DOM wiring and camera tuning for the web frontend.
///
/// Element ids are looked up lazily; a page that leaves one out just loses
/// that piece of UI.
// Element ids
pub const STATUS_ID: &str = "gesture-status";
pub const CURSOR_ID: &str = "hand-cursor";
pub const CARD_ID: &str = "blessing-card";
pub const PREVIEW_CANVAS_ID: &str = "gesture-preview";

// Status texts
pub const STATUS_LOADING: &str = "Loading AI...";
pub const STATUS_NO_CAMERA: &str = "Camera unavailable";

// Webcam request
pub const VIDEO_WIDTH: u32 = 320;
pub const VIDEO_HEIGHT: u32 = 240;
pub const VIDEO_FACING_MODE: &str = "user";

// Landmark preview
pub const PREVIEW_LINE_COLOR: &str = "#FFD700";
pub const PREVIEW_LINE_WIDTH: f64 = 2.0;
pub const PREVIEW_POINT_COLOR: &str = "#FFFFFF";
pub const PREVIEW_POINT_RADIUS: f64 = 2.0;

/// CSS position of the hand cursor for a normalized, already-mirrored
/// hand position.
#[inline]
pub fn cursor_css(x: f32, y: f32) -> (String, String) {
    (format!("{:.2}vw", x * 100.0), format!("{:.2}vh", y * 100.0))
}

/// Canvas pixel position of a raw (unmirrored) landmark drawn in a preview
/// that is flipped horizontally.
#[inline]
pub fn preview_point(x: f32, y: f32, width: f64, height: f64) -> (f64, f64) {
    ((1.0 - x as f64) * width, y as f64 * height)
}
