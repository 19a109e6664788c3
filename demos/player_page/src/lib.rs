// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard page bindings for the pushbyt frame player.
//!
//! Exposes a `Player` class to page scripts:
//!
//! ```js
//! import init, { Player } from "./pkg/player_page.js";
//! await init();
//! const player = new Player("player", "controls", 30);
//! ```
//!
//! Build with: `wasm-pack build --target web demos/player_page`
//! Then serve `demos/player_page/` and open `index.html`.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use log::Level;
use pushbyt_backend_web::WebPlayer;
use pushbyt_core::config::PlayerConfig;
use pushbyt_debug::log_sink::LogSink;
use wasm_bindgen::prelude::*;

/// Routes panics and `log` records to the browser console.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    // A second module instance on the same page already has a logger.
    let _ = console_log::init_with_level(Level::Info);
}

/// A frame player mounted on page elements.
///
/// Calling `free()` from JavaScript unmounts it and removes its listeners.
#[wasm_bindgen(js_name = Player)]
#[derive(Debug)]
pub struct PagePlayer {
    inner: WebPlayer,
}

impl PagePlayer {
    fn with_logging(inner: WebPlayer) -> Self {
        inner.set_trace_sink(Box::new(LogSink::new(Level::Debug)));
        Self { inner }
    }
}

#[wasm_bindgen(js_class = Player)]
impl PagePlayer {
    /// Mounts on `playerId`, which must hold exactly `frameCount` images,
    /// with controls inside `controlsId`. Throws if mounting fails.
    #[wasm_bindgen(constructor)]
    pub fn new(player_id: &str, controls_id: &str, frame_count: u32) -> Result<Self, JsValue> {
        let inner = WebPlayer::mount(player_id, controls_id, frame_count, PlayerConfig::web())?;
        Ok(Self::with_logging(inner))
    }

    /// Mounts using the player element's `data-frame-count` attribute.
    #[wasm_bindgen(js_name = mountFromDataset)]
    pub fn mount_from_dataset(player_id: &str, controls_id: &str) -> Result<Self, JsValue> {
        let inner = WebPlayer::mount_from_dataset(player_id, controls_id, PlayerConfig::web())?;
        Ok(Self::with_logging(inner))
    }

    /// Switches between playing and paused.
    pub fn toggle(&self) {
        self.inner.toggle();
    }

    /// Starts playback.
    pub fn play(&self) {
        self.inner.play();
    }

    /// Pauses playback.
    pub fn pause(&self) {
        self.inner.pause();
    }

    /// Pauses on the 1-based `frameNumber`.
    pub fn seek(&self, frame_number: i32) {
        self.inner.seek(i64::from(frame_number));
    }

    /// Pauses and moves `delta` frames.
    pub fn step(&self, delta: i32) {
        self.inner.step(delta);
    }

    /// The 1-based number of the frame on screen.
    #[wasm_bindgen(js_name = frameNumber)]
    pub fn frame_number(&self) -> u32 {
        self.inner.frame_index() + 1
    }

    /// Number of frames.
    #[wasm_bindgen(js_name = frameCount)]
    pub fn frame_count(&self) -> u32 {
        self.inner.frame_count()
    }

    /// Whether the player is playing.
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }
}
