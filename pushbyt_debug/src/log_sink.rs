// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Player events as `log` records.

use log::Level;
use pushbyt_core::trace::{AdvanceEvent, PauseEvent, PlayEvent, SeekEvent, StepEvent, TraceSink};
use pushbyt_core::view::FrameSnapshot;

/// A [`TraceSink`] that emits one `log` record per event.
///
/// Transport changes (play, pause, seek, step) are logged at the configured
/// level; advances and syncs, which happen every frame during playback, one
/// level lower.
#[derive(Clone, Copy, Debug)]
pub struct LogSink {
    level: Level,
}

impl LogSink {
    /// Creates a sink logging transport changes at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    fn frame_level(&self) -> Level {
        match self.level {
            Level::Error => Level::Warn,
            Level::Warn => Level::Info,
            Level::Info => Level::Debug,
            Level::Debug | Level::Trace => Level::Trace,
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl TraceSink for LogSink {
    fn on_play(&mut self, e: &PlayEvent) {
        if !e.was_playing {
            log::log!(self.level, "play at frame {} t={}", e.frame_index, e.now.ticks());
        }
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        if e.was_playing {
            log::log!(self.level, "pause at frame {} t={}", e.frame_index, e.now.ticks());
        }
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        log::log!(
            self.level,
            "seek {} -> frame {} t={}",
            e.requested,
            e.frame_index,
            e.now.ticks()
        );
    }

    fn on_step(&mut self, e: &StepEvent) {
        log::log!(
            self.level,
            "step {:+} -> frame {} t={}",
            e.delta,
            e.frame_index,
            e.now.ticks()
        );
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        log::log!(
            self.frame_level(),
            "advance -> frame {} after {} ticks",
            e.frame_index,
            e.elapsed.ticks()
        );
    }

    fn on_sync(&mut self, snapshot: &FrameSnapshot) {
        log::log!(
            self.frame_level(),
            "sync frame {}/{} playing={}",
            snapshot.field_value,
            snapshot.frame_count,
            snapshot.playing
        );
    }
}
