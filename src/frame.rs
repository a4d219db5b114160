use crate::detector::JsDetector;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{FrameLoop, FrameTick, SchedulerError, SharedLoop, TickHandle, TickSource};
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed tick source. The callback slot is shared
/// with the closure itself, which re-requests through this ticker.
pub struct RafTicker {
    callback: TickCallback,
}

impl RafTicker {
    pub fn new(callback: TickCallback) -> Self {
        Self { callback }
    }
}

impl TickSource for RafTicker {
    fn request_tick(&mut self) -> Result<TickHandle, SchedulerError> {
        let window = web::window().ok_or_else(|| SchedulerError::Unavailable("no window".into()))?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref().ok_or(SchedulerError::Stopped)?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map(TickHandle)
            .map_err(|e| SchedulerError::Unavailable(format!("{:?}", e)))
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

pub type TreeLoop = FrameLoop<JsDetector, RafTicker>;
pub type SharedTreeLoop = SharedLoop<JsDetector, RafTicker, Closure<dyn FnMut()>>;

/// Drop a detached RAF closure on the next microtask; it may be the one
/// currently running.
pub fn dispose_callback(cb: Closure<dyn FnMut()>) {
    spawn_local(async move {
        drop(cb);
    });
}

/// DOM side effects for one processed frame.
struct FrameView {
    document: Option<web::Document>,
    preview: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    card_visible: bool,
}

impl FrameView {
    fn new() -> Self {
        let document = dom::window_document();
        let preview = document
            .as_ref()
            .and_then(|d| dom::preview_context(d, crate::constants::PREVIEW_CANVAS_ID));
        Self {
            document,
            preview,
            card_visible: false,
        }
    }

    fn apply(&mut self, tick: &FrameTick) {
        let Some(doc) = &self.document else {
            return;
        };
        let report = &tick.report;
        overlay::update_cursor(doc, report.landmarks.as_ref().map(|_| report.snapshot.hand_position));
        if report.snapshot.card.visible != self.card_visible {
            self.card_visible = report.snapshot.card.visible;
            overlay::update_card(doc, &report.snapshot.card);
        }
        if let Some((canvas, ctx)) = &self.preview {
            overlay::draw_preview(canvas, ctx, report.landmarks.as_ref());
        }
    }
}

/// Wire the RAF closure: each tick runs the loop, updates the DOM and hands
/// the frame to `on_frame`. Returns the callback slot so teardown can drop it.
pub fn start_loop(
    frame_loop: Rc<RefCell<TreeLoop>>,
    callback: TickCallback,
    mut on_frame: impl FnMut(&FrameTick) + 'static,
) -> Result<(), SchedulerError> {
    let loop_tick = frame_loop.clone();
    let mut view = FrameView::new();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let tick = loop_tick.borrow_mut().on_tick(instant::now());
        if let Some(tick) = tick {
            view.apply(&tick);
            on_frame(&tick);
        }
    }) as Box<dyn FnMut()>));
    let started = frame_loop.borrow_mut().start();
    started
}
