// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the pushbyt frame player.
//!
//! This crate binds [`pushbyt_core`]'s player to browser APIs:
//!
//! - [`WebPlayer`]: mounts a player onto page elements and wires the toggle
//!   button, the numeric field and the document-level keyboard shortcuts
//! - [`RafLoop`]: `requestAnimationFrame` advance loop
//! - [`DomFrameView`]: class-based DOM presentation
//! - [`ListenerGuard`]: event listeners removed on drop

#![no_std]

extern crate alloc;

mod error;
mod listener;
mod mount;
mod raf;
mod view;

pub use error::MountError;
pub use listener::ListenerGuard;
pub use mount::{FRAME_COUNT_ATTRIBUTE, WebPlayer};
pub use raf::RafLoop;
pub use view::DomFrameView;

use pushbyt_core::time::{HostTime, Timebase};

/// Returns the current host time from `performance.now()`, in microsecond
/// ticks (see [`timebase`]).
#[must_use]
pub fn now() -> HostTime {
    raf::millis_to_host_time(raf::performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}
