//! Landmark source backed by a JavaScript hand detector.
//!
//! The page constructs the detector (e.g. a MediaPipe `HandLandmarker` in
//! VIDEO mode with one hand) and hands it over. Only two methods are used:
//! `detectForVideo(video, timestampMs)` returning
//! `{ landmarks: [[{x, y, z}, ...]] }`, and an optional `close()`.

use crate::camera;
use glam::Vec3;
use js_sys::{Array, Function, Reflect};
use smallvec::SmallVec;
use tree_core::{LandmarkError, LandmarkSet, LandmarkSource};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct JsDetector {
    detector: JsValue,
    video: web::HtmlVideoElement,
    stream: Option<web::MediaStream>,
}

impl JsDetector {
    pub fn new(detector: JsValue, video: web::HtmlVideoElement, stream: web::MediaStream) -> Self {
        Self {
            detector,
            video,
            stream: Some(stream),
        }
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.detector, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

fn detector_err(e: JsValue) -> LandmarkError {
    LandmarkError::Detector(format!("{:?}", e))
}

fn coord(point: &JsValue, axis: &str) -> Result<f32, LandmarkError> {
    Reflect::get(point, &JsValue::from_str(axis))
        .map_err(detector_err)?
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| LandmarkError::Detector(format!("landmark missing numeric `{axis}`")))
}

/// Pull the first hand out of a detector result.
pub fn first_hand(result: &JsValue) -> Result<Option<LandmarkSet>, LandmarkError> {
    let hands = Reflect::get(result, &JsValue::from_str("landmarks")).map_err(detector_err)?;
    if hands.is_undefined() || hands.is_null() {
        return Ok(None);
    }
    let hands: Array = hands.dyn_into().map_err(detector_err)?;
    if hands.length() == 0 {
        return Ok(None);
    }
    let hand: Array = hands.get(0).dyn_into().map_err(detector_err)?;
    let mut points: SmallVec<[Vec3; 24]> = SmallVec::new();
    for p in hand.iter() {
        points.push(Vec3::new(coord(&p, "x")?, coord(&p, "y")?, coord(&p, "z")?));
    }
    LandmarkSet::try_from(points.as_slice()).map(Some)
}

impl LandmarkSource for JsDetector {
    fn is_ready(&self) -> bool {
        self.stream.is_some() && camera::has_frames(&self.video)
    }

    fn detect(&mut self, timestamp_ms: f64) -> Result<Option<LandmarkSet>, LandmarkError> {
        let detect = self
            .method("detectForVideo")
            .ok_or_else(|| LandmarkError::Detector("detector has no detectForVideo".into()))?;
        let result = detect
            .call2(&self.detector, &self.video, &JsValue::from_f64(timestamp_ms))
            .map_err(detector_err)?;
        first_hand(&result)
    }

    fn release(&mut self) {
        if let Some(stream) = self.stream.take() {
            camera::release(&self.video, &stream);
        }
        if let Some(close) = self.method("close") {
            if let Err(e) = close.call0(&self.detector) {
                log::warn!("[detector] close failed: {:?}", e);
            }
        }
    }
}
