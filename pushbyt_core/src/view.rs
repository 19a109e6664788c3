// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation contract for frame players.
//!
//! The [`Player`](crate::player::Player) owns all state; a [`FrameView`]
//! only reflects it. Every sync hands the view a complete [`FrameSnapshot`]
//! rather than a diff, so presenting the same snapshot twice leaves the view
//! unchanged.
//!
//! A DOM view is expected to:
//!
//! - toggle the playing marker class on the controls element,
//! - remove the shown marker class from every frame that carries it and add
//!   it to `frame_index`,
//! - write `field_value` into the numeric frame field.

/// Everything a view needs to render the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    /// Zero-based index of the frame to show, always `< frame_count`.
    pub frame_index: u32,
    /// Total number of frames in the sequence.
    pub frame_count: u32,
    /// Whether the advance loop is running.
    pub playing: bool,
    /// 1-based frame number for the numeric field (`frame_index + 1`).
    pub field_value: u32,
}

/// Reflects a [`FrameSnapshot`] into a presentation tree.
///
/// Implemented by the DOM backend and by test doubles.
pub trait FrameView {
    /// Presents `snapshot`.
    fn present(&mut self, snapshot: &FrameSnapshot);
}

impl<V: FrameView + ?Sized> FrameView for &mut V {
    fn present(&mut self, snapshot: &FrameSnapshot) {
        (**self).present(snapshot);
    }
}
