// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! A player owns its sink, so [`RecorderSink`] writes into a shared
//! [`Recording`] that the caller keeps to read the events back.

use std::cell::RefCell;
use std::rc::Rc;

use pushbyt_core::trace::{AdvanceEvent, PauseEvent, PlayEvent, SeekEvent, StepEvent, TraceSink};
use pushbyt_core::view::FrameSnapshot;

/// One recorded player event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_play`].
    Play(PlayEvent),
    /// See [`TraceSink::on_pause`].
    Pause(PauseEvent),
    /// See [`TraceSink::on_seek`].
    Seek(SeekEvent),
    /// See [`TraceSink::on_step`].
    Step(StepEvent),
    /// See [`TraceSink::on_advance`].
    Advance(AdvanceEvent),
    /// See [`TraceSink::on_sync`].
    Sync(FrameSnapshot),
}

/// Shared handle to the events written by a [`RecorderSink`].
#[derive(Clone, Debug, Default)]
pub struct Recording {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl Recording {
    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the events recorded so far.
    pub fn take(&self) -> Vec<RecordedEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A [`TraceSink`] that appends every event to a [`Recording`].
#[derive(Debug, Default)]
pub struct RecorderSink {
    recording: Recording,
}

impl RecorderSink {
    /// Creates a recorder with an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to this recorder's recording.
    #[must_use]
    pub fn recording(&self) -> Recording {
        self.recording.clone()
    }
}

impl TraceSink for RecorderSink {
    fn on_play(&mut self, e: &PlayEvent) {
        self.recording.push(RecordedEvent::Play(*e));
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        self.recording.push(RecordedEvent::Pause(*e));
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        self.recording.push(RecordedEvent::Seek(*e));
    }

    fn on_step(&mut self, e: &StepEvent) {
        self.recording.push(RecordedEvent::Step(*e));
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.recording.push(RecordedEvent::Advance(*e));
    }

    fn on_sync(&mut self, snapshot: &FrameSnapshot) {
        self.recording.push(RecordedEvent::Sync(*snapshot));
    }
}
