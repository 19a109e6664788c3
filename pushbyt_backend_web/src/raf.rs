// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] is the player's advance loop as an explicit recurring task.
//! Each callback receives a [`DOMHighResTimeStamp`][mdn] (milliseconds on the
//! `performance.now()` timeline), converts it to microsecond [`HostTime`]
//! ticks and hands a [`FrameTick`] to the user callback. The callback answers
//! with a [`LoopControl`]; [`LoopControl::Stop`] clears the running flag and
//! the loop stops rescheduling itself.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use pushbyt_core::time::HostTime;
use pushbyt_core::timing::{FrameTick, LoopControl};

// Direct global bindings instead of `web_sys::Window` methods, so a frame
// callback never has to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Converts a `performance.now()`-style millisecond value to µs ticks.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "page timestamps are small positive f64; µs fits in u64"
)]
pub(crate) fn millis_to_host_time(ms: f64) -> HostTime {
    HostTime((ms.max(0.0) * 1000.0) as u64)
}

/// A `requestAnimationFrame` loop that emits [`FrameTick`]s until its
/// callback asks it to stop.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start). The loop
/// re-registers itself each frame while the callback returns
/// [`LoopControl::Continue`], until [`stop`](Self::stop) is called, or until
/// the `RafLoop` is dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`. Created on the
    /// first `start()` and reused by later restarts, so a restart never drops
    /// a closure the browser may still call.
    closure: RefCell<Option<RafClosure>>,

    /// Receives the ticks and decides whether the loop continues.
    callback: RefCell<Box<dyn FnMut(FrameTick) -> LoopControl>>,

    /// Callbacks since the last start (becomes `FrameTick::frame_index`).
    tick_counter: Cell<u64>,

    running: Cell<bool>,

    /// ID of the pending request, for `cancelAnimationFrame`.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a loop that is **not yet running**.
    pub fn new(callback: impl FnMut(FrameTick) -> LoopControl + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                tick_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the loop. If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);
        self.inner.tick_counter.set(0);

        let mut slot = self.inner.closure.borrow_mut();
        let closure: &RafClosure = slot.get_or_insert_with(|| {
            let inner = Rc::clone(&self.inner);
            Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if !inner.running.get() {
                    return;
                }

                let frame_index = inner.tick_counter.get();
                inner.tick_counter.set(frame_index + 1);
                let tick = FrameTick {
                    now: millis_to_host_time(timestamp_ms),
                    frame_index,
                };

                // Scoped so the borrow ends before `closure` is borrowed below.
                let control = inner.callback.borrow_mut()(tick);
                if !control.is_continue() {
                    inner.running.set(false);
                }

                if inner.running.get()
                    && let Some(ref closure) = *inner.closure.borrow()
                {
                    let id = request_animation_frame(closure.as_ref().unchecked_ref());
                    inner.raf_id.set(id);
                }
            }) as Box<dyn FnMut(f64)>)
        });

        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(id);
    }

    /// Stops the loop and cancels the pending callback. Can be restarted.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    /// Returns `true` while the loop is rescheduling itself.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // The closure holds an `Rc` to `inner`; dropping it breaks the cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("tick_counter", &self.inner.tick_counter.get())
            .finish_non_exhaustive()
    }
}
