// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame player state machine and timing types for the pushbyt dashboard.
//!
//! The dashboard previews animations for the pushbyt display as a sequence of
//! pre-rendered frames. `pushbyt_core` holds the platform-independent part of
//! the player: it is `no_std` compatible (with `alloc`) and has no notion of
//! the DOM or of a real clock.
//!
//! # Architecture
//!
//! ```text
//!   Page input (keys, field, button)          Backend tick source
//!       │                                           │
//!       ▼                                           ▼
//!   Command ──► Player::handle()           FrameTick ──► Player::on_tick()
//!                      │                                        │
//!                      └──────────► Player::sync() ◄────────────┘
//!                                        │
//!                                        ▼
//!                     FrameSnapshot ──► FrameView::present()
//! ```
//!
//! **[`player`]**: The [`Player`](player::Player) state machine: play, pause,
//! toggle, seek, step, and the fixed-rate advance loop.
//!
//! **[`view`]**: The [`FrameView`](view::FrameView) trait that backends
//! implement to reflect player state.
//!
//! **[`input`]**: Mapping from key codes and field text to
//! [`Command`](input::Command)s.
//!
//! **[`timing`]**: Tick and loop-control types exchanged with tick sources.
//!
//! **[`time`]**: Host time, durations and timebase conversion.
//!
//! **[`config`]**: [`PlayerConfig`](config::PlayerConfig) with the 100 ms
//! frame duration and DOM marker names.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and player events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
mod error;
pub mod input;
pub mod player;
pub mod time;
pub mod timing;
pub mod trace;
pub mod view;

pub use error::PlayerError;
