//! Webcam acquisition and release.

use crate::constants::{VIDEO_FACING_MODE, VIDEO_HEIGHT, VIDEO_WIDTH};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn video_constraints() -> Result<web::MediaStreamConstraints, JsValue> {
    let video = Object::new();
    Reflect::set(&video, &"width".into(), &VIDEO_WIDTH.into())?;
    Reflect::set(&video, &"height".into(), &VIDEO_HEIGHT.into())?;
    Reflect::set(&video, &"facingMode".into(), &VIDEO_FACING_MODE.into())?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);
    Ok(constraints)
}

/// Request the user-facing camera and start playing it into `video`.
pub async fn acquire(video: &web::HtmlVideoElement) -> anyhow::Result<web::MediaStream> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window.navigator().media_devices().map_err(js_err)?;
    let constraints = video_constraints().map_err(js_err)?;
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    video.set_muted(true);
    video.set_src_object(Some(&stream));
    if let Ok(play) = video.play() {
        if let Err(e) = JsFuture::from(play).await {
            // Autoplay refusal leaves the stream attached; frames arrive once playback starts.
            log::warn!("[camera] play() rejected: {:?}", e);
        }
    }
    log::info!("[camera] stream acquired ({}x{})", VIDEO_WIDTH, VIDEO_HEIGHT);
    Ok(stream)
}

/// Stop every track and detach the stream from the video element.
pub fn release(video: &web::HtmlVideoElement, stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
    video.set_src_object(None);
    log::info!("[camera] stream released");
}

#[inline]
pub fn has_frames(video: &web::HtmlVideoElement) -> bool {
    video.video_width() > 0 && video.video_height() > 0
}
