// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors from [`Player`](crate::player::Player) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerError {
    /// The frame sequence has no frames, so nothing can ever be shown.
    EmptySequence,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => f.write_str("frame sequence is empty"),
        }
    }
}

impl core::error::Error for PlayerError {}
