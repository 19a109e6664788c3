// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging, recording, and Chrome trace export for pushbyt player
//! diagnostics.
//!
//! This crate provides [`TraceSink`](pushbyt_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`log_sink::LogSink`]: one `log` record per player event.
//! - [`recorder::RecorderSink`]: keeps events in memory for inspection.
//! - [`chrome::export`]: writes recorded events as Chrome Trace Event Format
//!   JSON.

pub mod chrome;
pub mod log_sink;
pub mod recorder;
