//! Frame scheduling with injectable tick and landmark sources.
//!
//! In the browser the tick source is `requestAnimationFrame` and the landmark
//! source wraps the webcam detector. Tests drive the same [`FrameLoop`] with
//! [`ManualTicker`] and [`ScriptedSource`].

use crate::animation::{AnimationFrame, SceneAnimator};
use crate::controller::{FrameReport, GestureController};
use crate::error::{LandmarkError, SchedulerError};
use crate::landmark::LandmarkSet;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Produces at most one hand per call.
pub trait LandmarkSource {
    /// `false` while the underlying video has no frames yet.
    fn is_ready(&self) -> bool {
        true
    }
    fn detect(&mut self, timestamp_ms: f64) -> Result<Option<LandmarkSet>, LandmarkError>;
    /// Release the camera/detector. Called once on teardown.
    fn release(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

pub trait TickSource {
    fn request_tick(&mut self) -> Result<TickHandle, SchedulerError>;
    fn cancel_tick(&mut self, handle: TickHandle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub report: FrameReport,
    pub animation: AnimationFrame,
}

pub struct FrameLoop<S: LandmarkSource, T: TickSource> {
    controller: GestureController,
    animator: SceneAnimator,
    source: S,
    ticker: T,
    pending: Option<TickHandle>,
    last_tick_ms: Option<f64>,
    running: bool,
    released: bool,
}

impl<S: LandmarkSource, T: TickSource> FrameLoop<S, T> {
    pub fn new(controller: GestureController, source: S, ticker: T) -> Self {
        Self {
            controller,
            animator: SceneAnimator::new(),
            source,
            ticker,
            pending: None,
            last_tick_ms: None,
            running: false,
            released: false,
        }
    }

    pub fn start(&mut self) -> Result<(), SchedulerError> {
        if self.released {
            return Err(SchedulerError::Stopped);
        }
        if self.running {
            return Ok(());
        }
        self.running = true;
        let scheduled = self.schedule_next();
        if scheduled.is_err() {
            self.running = false;
        }
        scheduled
    }

    /// Handle one tick. Returns `None` when stopped or when the source had
    /// nothing to process yet.
    pub fn on_tick(&mut self, now_ms: f64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        self.pending = None;

        let tick = if self.source.is_ready() {
            let landmarks = match self.source.detect(now_ms) {
                Ok(lm) => lm,
                Err(e) => {
                    log::warn!("[frame] dropping detector output: {e}");
                    None
                }
            };
            let report = self.controller.process_frame(landmarks.as_ref());
            let dt_sec = self
                .last_tick_ms
                .map(|prev| ((now_ms - prev) / 1000.0) as f32)
                .unwrap_or(0.0);
            self.last_tick_ms = Some(now_ms);
            let animation = self.animator.advance(&report.snapshot, dt_sec);
            Some(FrameTick { report, animation })
        } else {
            None
        };

        if let Err(e) = self.schedule_next() {
            log::error!("[frame] could not schedule next tick: {e}");
            self.running = false;
        }
        tick
    }

    /// Cancel the pending tick and release the source. Safe to call twice.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.ticker.cancel_tick(handle);
        }
        if !self.released {
            self.released = true;
            self.source.release();
            log::info!("[frame] loop stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    fn schedule_next(&mut self) -> Result<(), SchedulerError> {
        let handle = self.ticker.request_tick()?;
        self.pending = Some(handle);
        Ok(())
    }
}

impl<S: LandmarkSource, T: TickSource> Drop for FrameLoop<S, T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Owner-side handle to a loop whose tick callback also holds the loop.
///
/// The callback slot and the loop reference each other, so nothing is freed
/// until the cycle is cut. [`SharedLoop::shutdown`] (or dropping the handle)
/// stops the loop and detaches the callback. The detached callback goes to
/// `dispose`, which may defer dropping it while the callback is still on the
/// stack.
pub struct SharedLoop<S: LandmarkSource, T: TickSource, C> {
    frame_loop: Rc<RefCell<FrameLoop<S, T>>>,
    callback: Rc<RefCell<Option<C>>>,
    dispose: fn(C),
}

impl<S: LandmarkSource, T: TickSource, C> SharedLoop<S, T, C> {
    pub fn new(
        frame_loop: Rc<RefCell<FrameLoop<S, T>>>,
        callback: Rc<RefCell<Option<C>>>,
        dispose: fn(C),
    ) -> Self {
        Self {
            frame_loop,
            callback,
            dispose,
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }

    /// Stop the loop and hand the callback to `dispose`. Later calls do nothing.
    pub fn shutdown(&self) {
        self.frame_loop.borrow_mut().stop();
        let detached = self.callback.borrow_mut().take();
        if let Some(cb) = detached {
            (self.dispose)(cb);
        }
    }
}

impl<S: LandmarkSource, T: TickSource, C> Drop for SharedLoop<S, T, C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Landmark source that replays a fixed sequence, then reports no hand.
#[derive(Debug)]
pub struct ScriptedSource {
    frames: VecDeque<Result<Option<LandmarkSet>, LandmarkError>>,
    ready: bool,
    releases: usize,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Option<LandmarkSet>>) -> Self {
        Self {
            frames: frames.into_iter().map(Ok).collect(),
            ready: true,
            releases: 0,
        }
    }

    pub fn push(&mut self, frame: Option<LandmarkSet>) {
        self.frames.push_back(Ok(frame));
    }

    pub fn push_error(&mut self, err: LandmarkError) {
        self.frames.push_back(Err(err));
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl LandmarkSource for ScriptedSource {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn detect(&mut self, _timestamp_ms: f64) -> Result<Option<LandmarkSet>, LandmarkError> {
        self.frames.pop_front().unwrap_or(Ok(None))
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}

/// Tick source that only records requests; the test calls `on_tick` itself.
#[derive(Debug, Default)]
pub struct ManualTicker {
    next_id: i32,
    outstanding: Vec<TickHandle>,
    cancelled: Vec<TickHandle>,
    fail_next: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outstanding(&self) -> &[TickHandle] {
        &self.outstanding
    }

    pub fn cancelled(&self) -> &[TickHandle] {
        &self.cancelled
    }

    pub fn fail_next_request(&mut self) {
        self.fail_next = true;
    }
}

impl TickSource for ManualTicker {
    fn request_tick(&mut self) -> Result<TickHandle, SchedulerError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(SchedulerError::Unavailable("scripted failure".into()));
        }
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        // A delivered tick is no longer outstanding once the next is requested.
        self.outstanding.clear();
        self.outstanding.push(handle);
        Ok(handle)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.outstanding.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
