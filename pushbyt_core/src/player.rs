// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame player state machine.
//!
//! [`Player`] holds the playback state for a fixed sequence of frames and
//! pushes a [`FrameSnapshot`] into its [`FrameView`] whenever that state
//! changes. It never reads a clock itself: every operation takes the current
//! [`HostTime`] from the caller, and the advance loop is driven by
//! [`FrameTick`]s from the backend's tick source.
//!
//! # Advance loop
//!
//! While playing, each tick compares the time since the last advance with
//! [`PlayerConfig::frame_duration`]. Once at least one frame duration has
//! elapsed, the player moves exactly one frame forward and restarts the
//! measurement from the tick's time. Missed frames are never caught up, so
//! playback runs at the nominal rate or slower, never faster.

use alloc::boxed::Box;
use core::fmt;

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::input::Command;
use crate::time::HostTime;
use crate::timing::{FrameTick, LoopControl};
use crate::trace::{
    AdvanceEvent, NoopSink, PauseEvent, PlayEvent, SeekEvent, StepEvent, TraceSink,
};
use crate::view::{FrameSnapshot, FrameView};

/// Plays back a fixed-length frame sequence into a [`FrameView`].
pub struct Player<V> {
    view: V,
    config: PlayerConfig,
    frame_count: u32,
    /// Always `< frame_count`.
    frame_index: u32,
    playing: bool,
    last_frame_time: HostTime,
    sink: Box<dyn TraceSink>,
}

impl<V> fmt::Debug for Player<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("frame_count", &self.frame_count)
            .field("frame_index", &self.frame_index)
            .field("playing", &self.playing)
            .field("last_frame_time", &self.last_frame_time)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<V: FrameView> Player<V> {
    /// Creates a paused player showing the first frame and syncs `view`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptySequence`] if `frame_count` is zero.
    pub fn new(
        frame_count: u32,
        view: V,
        config: PlayerConfig,
        now: HostTime,
    ) -> Result<Self, PlayerError> {
        if frame_count == 0 {
            return Err(PlayerError::EmptySequence);
        }
        let mut player = Self {
            view,
            config,
            frame_count,
            frame_index: 0,
            playing: false,
            last_frame_time: now,
            sink: Box::new(NoopSink),
        };
        player.pause(now);
        Ok(player)
    }

    /// Replaces the trace sink.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = sink;
    }

    /// Switches between playing and paused.
    pub fn toggle(&mut self, now: HostTime) {
        if self.playing {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    /// Starts playback from the current frame.
    ///
    /// The caller is responsible for starting its tick source afterwards; the
    /// player only reports, through [`on_tick`](Self::on_tick), whether ticks
    /// are still wanted.
    pub fn play(&mut self, now: HostTime) {
        let was_playing = self.playing;
        self.playing = true;
        self.last_frame_time = now;
        self.sync();
        self.sink.on_play(&PlayEvent {
            now,
            frame_index: self.frame_index,
            was_playing,
        });
    }

    /// Stops playback on the current frame. Pausing a paused player only
    /// resets the frame timer and re-syncs.
    pub fn pause(&mut self, now: HostTime) {
        let was_playing = self.playing;
        self.playing = false;
        self.last_frame_time = now;
        self.sync();
        self.sink.on_pause(&PauseEvent {
            now,
            frame_index: self.frame_index,
            was_playing,
        });
    }

    /// Pauses on the 1-based `frame_number`, wrapping values outside
    /// `1..=frame_count` around the sequence.
    pub fn seek(&mut self, frame_number: i64, now: HostTime) {
        self.frame_index = self.wrap(i128::from(frame_number) - 1);
        self.pause(now);
        self.sink.on_seek(&SeekEvent {
            now,
            requested: frame_number,
            frame_index: self.frame_index,
        });
    }

    /// Pauses, then moves `delta` frames, wrapping at both ends.
    pub fn step(&mut self, delta: i32, now: HostTime) {
        self.pause(now);
        self.frame_index = self.wrap(i128::from(self.frame_index) + i128::from(delta));
        self.sync();
        self.sink.on_step(&StepEvent {
            now,
            delta,
            frame_index: self.frame_index,
        });
    }

    /// Applies a user command.
    pub fn handle(&mut self, command: Command, now: HostTime) {
        match command {
            Command::Toggle => self.toggle(now),
            Command::Step(delta) => self.step(delta, now),
            Command::Seek(frame_number) => self.seek(frame_number, now),
        }
    }

    /// Runs one iteration of the advance loop.
    ///
    /// Returns [`LoopControl::Stop`] without touching any state once the
    /// player is paused, so a tick that was already scheduled when the user
    /// paused is harmless.
    pub fn on_tick(&mut self, tick: &FrameTick) -> LoopControl {
        if !self.playing {
            return LoopControl::Stop;
        }
        let elapsed = tick.now.saturating_duration_since(self.last_frame_time);
        if elapsed >= self.config.frame_duration {
            self.last_frame_time = tick.now;
            self.frame_index = self.wrap(i128::from(self.frame_index) + 1);
            self.sync();
            self.sink.on_advance(&AdvanceEvent {
                now: tick.now,
                elapsed,
                frame_index: self.frame_index,
            });
        }
        LoopControl::Continue
    }

    /// Pushes the current state into the view.
    pub fn sync(&mut self) {
        let snapshot = self.snapshot();
        self.view.present(&snapshot);
        self.sink.on_sync(&snapshot);
    }
}

impl<V> Player<V> {
    /// Returns the state a view should currently display.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame_index: self.frame_index,
            frame_count: self.frame_count,
            playing: self.playing,
            field_value: self.frame_index + 1,
        }
    }

    /// Zero-based index of the current frame.
    #[must_use]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Number of frames in the sequence.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Whether the advance loop is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Time of the last advance, play or pause.
    #[must_use]
    pub fn last_frame_time(&self) -> HostTime {
        self.last_frame_time
    }

    /// Returns the player configuration.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Returns the view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid by a u32 count yields a value in 0..count"
    )]
    fn wrap(&self, index: i128) -> u32 {
        index.rem_euclid(i128::from(self.frame_count)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Duration;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    /// Models the DOM the web view touches: one class flag per frame image,
    /// the controls' playing class and the numeric field.
    #[derive(Debug, Default)]
    struct DomModel {
        shown: Vec<bool>,
        playing_class: bool,
        field: Option<u32>,
        presents: usize,
    }

    impl DomModel {
        fn with_frames(count: usize) -> Self {
            Self {
                shown: vec![false; count],
                ..Self::default()
            }
        }

        fn shown_indices(&self) -> Vec<usize> {
            self.shown
                .iter()
                .enumerate()
                .filter_map(|(i, &s)| s.then_some(i))
                .collect()
        }
    }

    impl FrameView for DomModel {
        fn present(&mut self, snapshot: &FrameSnapshot) {
            self.playing_class = snapshot.playing;
            for s in &mut self.shown {
                *s = false;
            }
            self.shown[snapshot.frame_index as usize] = true;
            self.field = Some(snapshot.field_value);
            self.presents += 1;
        }
    }

    #[derive(Debug, Default)]
    struct Counts {
        plays: usize,
        redundant_plays: usize,
        pauses: usize,
        advances: Vec<u32>,
        seeks: usize,
        steps: usize,
    }

    struct CountingSink(Rc<RefCell<Counts>>);

    impl TraceSink for CountingSink {
        fn on_play(&mut self, e: &PlayEvent) {
            let mut counts = self.0.borrow_mut();
            counts.plays += 1;
            if e.was_playing {
                counts.redundant_plays += 1;
            }
        }
        fn on_pause(&mut self, _: &PauseEvent) {
            self.0.borrow_mut().pauses += 1;
        }
        fn on_seek(&mut self, _: &SeekEvent) {
            self.0.borrow_mut().seeks += 1;
        }
        fn on_step(&mut self, _: &StepEvent) {
            self.0.borrow_mut().steps += 1;
        }
        fn on_advance(&mut self, e: &AdvanceEvent) {
            self.0.borrow_mut().advances.push(e.frame_index);
        }
    }

    const FRAME: Duration = Duration(100_000);

    fn player(count: u32) -> Player<DomModel> {
        Player::new(
            count,
            DomModel::with_frames(count as usize),
            PlayerConfig::web(),
            HostTime(0),
        )
        .expect("non-empty sequence")
    }

    fn tick(now: u64) -> FrameTick {
        FrameTick {
            now: HostTime(now),
            frame_index: 0,
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = Player::new(0, DomModel::default(), PlayerConfig::web(), HostTime(0))
            .expect_err("zero frames must fail");
        assert_eq!(err, PlayerError::EmptySequence);
    }

    #[test]
    fn construction_syncs_first_frame_paused() {
        let p = player(5);
        assert_eq!(p.frame_index(), 0);
        assert!(!p.is_playing(), "starts paused");
        assert_eq!(p.view().shown_indices(), vec![0]);
        assert_eq!(p.view().field, Some(1));
        assert!(!p.view().playing_class, "no playing class while paused");
    }

    #[test]
    fn step_back_from_first_frame_wraps_to_last() {
        let mut p = player(5);
        p.step(-1, HostTime(10));
        assert_eq!(p.frame_index(), 4);
        assert_eq!(p.view().shown_indices(), vec![4]);
        assert_eq!(p.view().field, Some(5), "field is 1-based");
    }

    #[test]
    fn step_forward_from_last_frame_wraps_to_first() {
        let mut p = player(5);
        p.seek(5, HostTime(0));
        assert_eq!(p.frame_index(), 4);
        p.step(1, HostTime(10));
        p.sync();
        assert_eq!(p.frame_index(), 0);
        assert_eq!(p.view().shown_indices(), vec![0]);
        assert_eq!(p.view().field, Some(1));
    }

    #[test]
    fn steps_keep_index_in_range_with_one_frame_shown() {
        for count in 1..=7_u32 {
            let mut p = player(count);
            let deltas = [1, 1, -1, -1, -1, 1, -1, -1, -1, 1, 1, 1, 1, 1, 1, 1, 1, -1];
            for (i, delta) in deltas.into_iter().enumerate() {
                p.step(delta, HostTime(i as u64));
                assert!(p.frame_index() < count, "index in range for {count} frames");
                assert_eq!(
                    p.view().shown_indices(),
                    vec![p.frame_index() as usize],
                    "exactly one frame shown"
                );
                assert!(!p.is_playing(), "step pauses");
            }
        }
    }

    #[test]
    fn seek_wraps_and_pauses() {
        let mut p = player(5);
        p.play(HostTime(0));
        p.seek(3, HostTime(5));
        assert_eq!(p.frame_index(), 2);
        assert!(!p.is_playing(), "seek pauses");
        assert!(!p.view().playing_class, "playing class removed");

        p.seek(0, HostTime(6));
        assert_eq!(p.frame_index(), 4, "frame 0 wraps to the last frame");
        p.seek(6, HostTime(7));
        assert_eq!(p.frame_index(), 0, "one past the end wraps to the first");
        p.seek(-7, HostTime(8));
        assert_eq!(p.frame_index(), 2, "(-8) mod 5");
        p.seek(i64::MIN, HostTime(9));
        assert!(p.frame_index() < 5, "extreme input stays in range");
        assert_eq!(p.view().field, Some(p.frame_index() + 1));
    }

    #[test]
    fn toggle_twice_restores_playing() {
        let mut p = player(3);
        p.toggle(HostTime(1));
        assert!(p.is_playing(), "first toggle plays");
        assert!(p.view().playing_class, "playing class set");
        p.toggle(HostTime(2));
        assert!(!p.is_playing(), "second toggle pauses");
        assert!(!p.view().playing_class, "playing class cleared");
    }

    #[test]
    fn pause_while_paused_keeps_frame() {
        let mut p = player(5);
        p.step(1, HostTime(0));
        p.step(1, HostTime(0));
        let before = p.frame_index();
        p.pause(HostTime(50));
        assert_eq!(p.frame_index(), before);
        assert!(!p.is_playing(), "still paused");
        assert_eq!(p.last_frame_time(), HostTime(50), "timer reset");
    }

    #[test]
    fn one_frame_per_tick_at_nominal_rate() {
        let mut p = player(5);
        p.play(HostTime(0));
        for n in 1..=12_u64 {
            let control = p.on_tick(&tick(n * FRAME.ticks()));
            assert_eq!(control, LoopControl::Continue);
            assert_eq!(u64::from(p.frame_index()), n % 5, "one advance per tick");
            assert_eq!(p.view().shown_indices(), vec![p.frame_index() as usize]);
        }
    }

    #[test]
    fn late_ticks_do_not_catch_up() {
        let mut p = player(10);
        p.play(HostTime(0));
        p.on_tick(&tick(FRAME.ticks() * 5));
        assert_eq!(p.frame_index(), 1, "a long gap still advances only one frame");
        assert_eq!(p.last_frame_time(), HostTime(FRAME.ticks() * 5));
    }

    #[test]
    fn early_ticks_do_not_advance() {
        let mut p = player(5);
        p.play(HostTime(1_000));
        for t in [1_000, 20_000, 60_000, 100_999] {
            assert_eq!(p.on_tick(&tick(t)), LoopControl::Continue);
            assert_eq!(p.frame_index(), 0, "no advance before a full frame at {t}");
        }
        p.on_tick(&tick(101_000));
        assert_eq!(p.frame_index(), 1);
    }

    #[test]
    fn paused_tick_stops_loop_without_touching_state() {
        let mut p = player(5);
        p.play(HostTime(0));
        p.pause(HostTime(10));
        let presents = p.view().presents;
        assert_eq!(p.on_tick(&tick(FRAME.ticks() * 3)), LoopControl::Stop);
        assert_eq!(p.frame_index(), 0);
        assert_eq!(p.view().presents, presents, "no extra sync");
    }

    #[test]
    fn commands_dispatch() {
        let mut p = player(4);
        p.handle(Command::Step(-1), HostTime(0));
        assert_eq!(p.frame_index(), 3);
        p.handle(Command::Seek(2), HostTime(0));
        assert_eq!(p.frame_index(), 1);
        p.handle(Command::Toggle, HostTime(0));
        assert!(p.is_playing(), "toggle plays");
    }

    #[test]
    fn sync_is_idempotent() {
        let mut p = player(3);
        p.step(1, HostTime(0));
        let snapshot = p.snapshot();
        p.sync();
        p.sync();
        assert_eq!(p.snapshot(), snapshot);
        assert_eq!(p.view().shown_indices(), vec![1]);
    }

    #[test]
    fn trace_sink_sees_transitions() {
        let counts = Rc::new(RefCell::new(Counts::default()));
        let mut p = player(3);
        p.set_trace_sink(Box::new(CountingSink(Rc::clone(&counts))));

        p.play(HostTime(0));
        p.on_tick(&tick(FRAME.ticks()));
        p.on_tick(&tick(FRAME.ticks() * 2));
        p.step(1, HostTime(FRAME.ticks() * 2));
        p.seek(1, HostTime(FRAME.ticks() * 3));

        let c = counts.borrow();
        assert_eq!(c.plays, 1);
        assert_eq!(c.redundant_plays, 0);
        assert_eq!(c.advances, vec![1, 2]);
        assert_eq!(c.steps, 1);
        assert_eq!(c.seeks, 1);
        assert_eq!(c.pauses, 2, "step and seek each pause once");
    }

    #[test]
    fn second_play_is_reported_as_redundant() {
        let counts = Rc::new(RefCell::new(Counts::default()));
        let mut p = player(3);
        p.set_trace_sink(Box::new(CountingSink(Rc::clone(&counts))));

        p.play(HostTime(0));
        p.play(HostTime(10));
        assert!(p.is_playing(), "still playing");
        assert_eq!(p.last_frame_time(), HostTime(10), "timer reset");

        let c = counts.borrow();
        assert_eq!(c.plays, 2);
        assert_eq!(c.redundant_plays, 1, "only the second play was redundant");
    }
}
