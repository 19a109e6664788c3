// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Player configuration.

use crate::time::{Duration, Timebase};

/// Nominal time between frames, matching the 100 ms frame time the animation
/// generator bakes into the rendered sequences.
pub const FRAME_DURATION_MS: u64 = 100;

/// Configuration for a [`Player`](crate::player::Player) and the DOM it binds
/// to.
///
/// The class and selector fields are only read by DOM backends; the core
/// state machine uses `frame_duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Minimum elapsed time before the advance loop moves to the next frame.
    pub frame_duration: Duration,
    /// Class marking the single visible frame.
    pub shown_class: &'static str,
    /// Class set on the controls element while playing.
    pub playing_class: &'static str,
    /// Selector for the frame elements inside the player element.
    pub frame_selector: &'static str,
    /// Selector for the play/pause button inside the controls element.
    pub toggle_selector: &'static str,
    /// Selector for the 1-based numeric frame field inside the controls
    /// element.
    pub field_selector: &'static str,
}

impl PlayerConfig {
    /// Default configuration in microsecond ticks (web backend).
    #[must_use]
    pub const fn web() -> Self {
        Self::with_timebase(Timebase::MICROS)
    }

    /// Default configuration with the frame duration expressed in `timebase`
    /// ticks.
    #[must_use]
    pub const fn with_timebase(timebase: Timebase) -> Self {
        Self {
            frame_duration: Duration::from_millis(FRAME_DURATION_MS, timebase),
            shown_class: "shown",
            playing_class: "playing",
            frame_selector: "img",
            toggle_selector: "button[name=\"play-pause\"]",
            field_selector: "input[name=\"inputField\"]",
        }
    }

    /// Overrides the frame duration.
    #[must_use]
    pub const fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    /// Overrides the shown and playing marker classes.
    #[must_use]
    pub const fn with_classes(mut self, shown: &'static str, playing: &'static str) -> Self {
        self.shown_class = shown;
        self.playing_class = playing;
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::web()
    }
}
