#![cfg(target_arch = "wasm32")]
//! Browser frontend: webcam + hand detector in, scene state out.
//!
//! The page creates the hand detector and the 3-D renderer; this crate owns
//! everything in between. Call [`mount`] once the detector is loaded, feed
//! each [`FrameState`] to the renderer, and call [`TreeHandle::unmount`] when
//! the view goes away.

use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{ControllerConfig, FrameTick, GestureController, RandomSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod detector;
mod dom;
mod frame;
mod overlay;

/// `Math.random()` as a [`RandomSource`].
struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");
    if let Some(doc) = dom::window_document() {
        overlay::show_status(&doc, constants::STATUS_LOADING);
    }
    Ok(())
}

/// Renderer input for one frame.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct FrameState {
    tick: FrameTick,
}

#[wasm_bindgen]
impl FrameState {
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.tick.report.snapshot.mode.as_str().to_string()
    }
    #[wasm_bindgen(getter)]
    pub fn gesture(&self) -> String {
        self.tick.report.gesture.as_str().to_string()
    }
    #[wasm_bindgen(getter, js_name = rotationSpeed)]
    pub fn rotation_speed(&self) -> f32 {
        self.tick.report.snapshot.rotation_speed
    }
    #[wasm_bindgen(getter, js_name = cardVisible)]
    pub fn card_visible(&self) -> bool {
        self.tick.report.snapshot.card.visible
    }
    #[wasm_bindgen(getter, js_name = cardText)]
    pub fn card_text(&self) -> String {
        self.tick.report.snapshot.card.text.to_string()
    }
    #[wasm_bindgen(getter, js_name = handX)]
    pub fn hand_x(&self) -> f32 {
        self.tick.report.snapshot.hand_position.x
    }
    #[wasm_bindgen(getter, js_name = handY)]
    pub fn hand_y(&self) -> f32 {
        self.tick.report.snapshot.hand_position.y
    }
    #[wasm_bindgen(getter, js_name = handPresent)]
    pub fn hand_present(&self) -> bool {
        self.tick.report.landmarks.is_some()
    }
    #[wasm_bindgen(getter, js_name = explodeProgress)]
    pub fn explode_progress(&self) -> f32 {
        self.tick.animation.explode_progress
    }
    #[wasm_bindgen(getter, js_name = cardScale)]
    pub fn card_scale(&self) -> f32 {
        self.tick.animation.card_scale
    }
    #[wasm_bindgen(getter, js_name = rotationY)]
    pub fn rotation_y(&self) -> f32 {
        self.tick.animation.rotation_y
    }
    #[wasm_bindgen(getter, js_name = cardSway)]
    pub fn card_sway(&self) -> f32 {
        self.tick.animation.card_sway
    }
    #[wasm_bindgen(getter, js_name = cardBob)]
    pub fn card_bob(&self) -> f32 {
        self.tick.animation.card_bob
    }
    /// Scene uniforms as raw bytes, ready for a GPU buffer upload.
    #[wasm_bindgen(getter)]
    pub fn uniforms(&self) -> Vec<u8> {
        bytemuck::bytes_of(&self.tick.report.snapshot.uniforms()).to_vec()
    }
}

/// Running pipeline. `unmount`, `free()` and garbage collection all tear it
/// down.
#[wasm_bindgen]
pub struct TreeHandle {
    inner: frame::SharedTreeLoop,
}

#[wasm_bindgen]
impl TreeHandle {
    /// Cancel the pending frame, stop the camera and close the detector.
    pub fn unmount(&self) {
        self.inner.shutdown();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.is_running()
    }
}

/// Gold particle palette as flat `r, g, b` floats, five colors.
#[wasm_bindgen]
pub fn palette() -> Vec<f32> {
    tree_core::gold_palette_rgb().concat()
}

/// Start the webcam and gesture loop.
///
/// `detector` must expose `detectForVideo(video, timestampMs)`; `video_id`
/// names a `<video>` element; `on_frame` receives a [`FrameState`] per
/// processed frame.
#[wasm_bindgen]
pub async fn mount(
    detector: JsValue,
    video_id: String,
    on_frame: js_sys::Function,
) -> Result<TreeHandle, JsValue> {
    match mount_inner(detector, &video_id, on_frame).await {
        Ok(handle) => Ok(handle),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_status(&doc, constants::STATUS_NO_CAMERA);
            }
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

async fn mount_inner(
    detector: JsValue,
    video_id: &str,
    on_frame: js_sys::Function,
) -> anyhow::Result<TreeHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let video: web::HtmlVideoElement = document
        .get_element_by_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{video_id}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let controller = GestureController::with_random(ControllerConfig::default(), Box::new(JsRandom))?;
    let stream = camera::acquire(&video).await?;
    let source = detector::JsDetector::new(detector, video, stream);

    let callback: frame::TickCallback = Rc::new(RefCell::new(None));
    let ticker = frame::RafTicker::new(callback.clone());
    let frame_loop = Rc::new(RefCell::new(frame::TreeLoop::new(controller, source, ticker)));

    // Built before starting so a failed start tears down through `Drop`.
    let handle = TreeHandle {
        inner: tree_core::SharedLoop::new(frame_loop.clone(), callback.clone(), frame::dispose_callback),
    };
    frame::start_loop(frame_loop, callback, move |tick| {
        let state = FrameState { tick: *tick };
        if let Err(e) = on_frame.call1(&JsValue::NULL, &state.into()) {
            log::error!("on_frame callback error: {:?}", e);
        }
    })?;

    overlay::hide_status(&document);
    log::info!("gesture loop mounted");
    Ok(handle)
}
