// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString as _};
use core::fmt;

use pushbyt_core::PlayerError;
use wasm_bindgen::{JsError, JsValue};

use crate::mount::FRAME_COUNT_ATTRIBUTE;

/// Errors from [`WebPlayer::mount`](crate::WebPlayer::mount).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// No `window.document` (not running in a page).
    NoDocument,
    /// No element with the given id.
    MissingElement {
        /// The id that was looked up.
        id: String,
    },
    /// The controls element has no (suitable) element for the selector.
    MissingControl {
        /// The selector that was queried.
        selector: &'static str,
    },
    /// The player element's `data-frame-count` is not a frame count.
    InvalidFrameCount {
        /// The attribute value as found.
        value: String,
    },
    /// The player element holds a different number of frames than declared.
    FrameCountMismatch {
        /// Declared frame count.
        expected: u32,
        /// Frame elements found.
        found: u32,
    },
    /// The player state machine rejected the sequence.
    Player(PlayerError),
    /// A DOM call threw.
    Dom(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no document available"),
            Self::MissingElement { id } => write!(f, "no element with id `{id}`"),
            Self::MissingControl { selector } => {
                write!(f, "controls element has no `{selector}`")
            }
            Self::InvalidFrameCount { value } => {
                write!(f, "invalid {FRAME_COUNT_ATTRIBUTE} `{value}`")
            }
            Self::FrameCountMismatch { expected, found } => {
                write!(f, "expected {expected} frames, found {found}")
            }
            Self::Player(err) => write!(f, "{err}"),
            Self::Dom(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl core::error::Error for MountError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Player(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlayerError> for MountError {
    fn from(err: PlayerError) -> Self {
        Self::Player(err)
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
