// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presentation of player state.
//!
//! [`DomFrameView`] reflects each [`FrameSnapshot`] into the page through CSS
//! classes and the numeric field. The stylesheet decides what "shown" and
//! "playing" look like.

use alloc::string::ToString as _;
use alloc::vec::Vec;

use pushbyt_core::config::PlayerConfig;
use pushbyt_core::view::{FrameSnapshot, FrameView};
use web_sys::{Element, HtmlInputElement};

/// Maps player state onto a frame container and a controls element.
pub struct DomFrameView {
    controls: Element,
    frames: Vec<Element>,
    field: HtmlInputElement,
    shown_class: &'static str,
    playing_class: &'static str,
}

impl core::fmt::Debug for DomFrameView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomFrameView")
            .field("frames_len", &self.frames.len())
            .field("shown_class", &self.shown_class)
            .field("playing_class", &self.playing_class)
            .finish_non_exhaustive()
    }
}

impl DomFrameView {
    /// Creates a view over already-resolved elements.
    ///
    /// `frames` are the frame images in display order.
    #[must_use]
    pub fn new(
        controls: Element,
        frames: Vec<Element>,
        field: HtmlInputElement,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            controls,
            frames,
            field,
            shown_class: config.shown_class,
            playing_class: config.playing_class,
        }
    }

    fn clear_shown(&self) {
        for frame in &self.frames {
            let _ = frame.class_list().remove_1(self.shown_class);
        }
    }
}

impl FrameView for DomFrameView {
    fn present(&mut self, snapshot: &FrameSnapshot) {
        let _ = self
            .controls
            .class_list()
            .toggle_with_force(self.playing_class, snapshot.playing);

        // Also clears frames the page markup marked as shown.
        self.clear_shown();
        if let Some(frame) = self.frames.get(snapshot.frame_index as usize) {
            let _ = frame.class_list().add_1(self.shown_class);
        }

        self.field.set_value(&snapshot.field_value.to_string());
    }
}
