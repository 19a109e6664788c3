// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped DOM event listeners.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// An event listener that is registered for as long as the guard lives.
///
/// Dropping the guard calls `removeEventListener` with the same closure and
/// then releases the closure, so document-level listeners do not outlive the
/// player that installed them.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: ListenerClosure,
}

impl ListenerGuard {
    /// Registers `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if `addEventListener` throws.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
