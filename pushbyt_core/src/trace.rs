// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured player events for diagnostics.
//!
//! A [`Player`](crate::player::Player) reports each state transition to its
//! [`TraceSink`]. All sink methods default to no-ops, so implementing only the
//! events you care about is fine. [`NoopSink`] is the default sink.

use crate::time::{Duration, HostTime};
use crate::view::FrameSnapshot;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted on every play, including redundant ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayEvent {
    /// Host time of the transition.
    pub now: HostTime,
    /// Frame shown when playback started.
    pub frame_index: u32,
    /// Whether the player was already playing.
    pub was_playing: bool,
}

/// Emitted on every pause, including redundant ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseEvent {
    /// Host time of the transition.
    pub now: HostTime,
    /// Frame shown when paused.
    pub frame_index: u32,
    /// Whether the player was playing before this pause.
    pub was_playing: bool,
}

/// Emitted when the numeric field seeks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeekEvent {
    /// Host time of the seek.
    pub now: HostTime,
    /// The 1-based frame number as entered.
    pub requested: i64,
    /// The zero-based frame index after wrapping.
    pub frame_index: u32,
}

/// Emitted when the keyboard steps frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepEvent {
    /// Host time of the step.
    pub now: HostTime,
    /// Requested frame delta.
    pub delta: i32,
    /// The zero-based frame index after wrapping.
    pub frame_index: u32,
}

/// Emitted when the advance loop moves to the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceEvent {
    /// Host time of the tick that advanced.
    pub now: HostTime,
    /// Time since the previous advance (or play/pause).
    pub elapsed: Duration,
    /// The frame now shown.
    pub frame_index: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives player events.
pub trait TraceSink {
    /// Called after every play.
    fn on_play(&mut self, e: &PlayEvent) {
        _ = e;
    }

    /// Called after every pause.
    fn on_pause(&mut self, e: &PauseEvent) {
        _ = e;
    }

    /// Called after a seek.
    fn on_seek(&mut self, e: &SeekEvent) {
        _ = e;
    }

    /// Called after a keyboard step.
    fn on_step(&mut self, e: &StepEvent) {
        _ = e;
    }

    /// Called after the advance loop moves a frame.
    fn on_advance(&mut self, e: &AdvanceEvent) {
        _ = e;
    }

    /// Called with every snapshot pushed to the view.
    fn on_sync(&mut self, snapshot: &FrameSnapshot) {
        _ = snapshot;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
