// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Types that flow between a tick source and the player's advance loop.
//!
//! 1. The backend turns each animation-frame callback into a [`FrameTick`].
//! 2. [`Player::on_tick`](crate::player::Player::on_tick) decides whether
//!    the tick advances the sequence.
//! 3. It answers with a [`LoopControl`] telling the tick source whether to
//!    schedule another callback.

use crate::time::HostTime;

/// One animation-frame callback delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time of the callback.
    pub now: HostTime,
    /// Monotonically increasing callback counter, reset when the loop restarts.
    pub frame_index: u64,
}

/// Whether a recurring tick source should keep rescheduling itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopControl {
    /// Request another callback.
    Continue,
    /// Stop rescheduling. The loop can be started again later.
    Stop,
}

impl LoopControl {
    /// Returns `true` for [`LoopControl::Continue`].
    #[inline]
    #[must_use]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}
