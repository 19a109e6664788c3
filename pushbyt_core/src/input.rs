// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from raw page input to player commands.
//!
//! Backends translate keyboard codes and field text with the constructors on
//! [`Command`] and pass the result to
//! [`Player::handle`](crate::player::Player::handle).

/// A user-initiated player operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch between playing and paused.
    Toggle,
    /// Pause, then move by the given number of frames (wrapping).
    Step(i32),
    /// Pause on the given 1-based frame number (wrapping).
    Seek(i64),
}

impl Command {
    /// Maps a `KeyboardEvent.code` value to a command.
    ///
    /// Modifier keys are not considered.
    #[must_use]
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Self::Toggle),
            "ArrowLeft" => Some(Self::Step(-1)),
            "ArrowRight" => Some(Self::Step(1)),
            _ => None,
        }
    }

    /// Maps the text of the numeric frame field to a seek.
    ///
    /// Returns `None` for text that is not an integer, such as the empty
    /// field left behind while the user retypes a number.
    #[must_use]
    pub fn from_field_value(text: &str) -> Option<Self> {
        text.trim().parse::<i64>().ok().map(Self::Seek)
    }
}
