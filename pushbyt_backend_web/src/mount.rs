// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a [`Player`] onto page elements.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use pushbyt_core::PlayerError;
use pushbyt_core::config::PlayerConfig;
use pushbyt_core::input::Command;
use pushbyt_core::player::Player;
use pushbyt_core::time::HostTime;
use pushbyt_core::trace::TraceSink;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::error::MountError;
use crate::listener::ListenerGuard;
use crate::raf::RafLoop;
use crate::view::DomFrameView;

/// Attribute on the player element carrying the frame count rendered by the
/// server.
pub const FRAME_COUNT_ATTRIBUTE: &str = "data-frame-count";

type SharedPlayer = Rc<RefCell<Player<DomFrameView>>>;

/// A [`Player`] bound to page elements, its advance loop and its listeners.
///
/// Dropping a `WebPlayer` stops the advance loop and removes every listener
/// it registered, including the document-level keyboard listener.
pub struct WebPlayer {
    listeners: Vec<ListenerGuard>,
    raf: Rc<RafLoop>,
    player: SharedPlayer,
}

impl core::fmt::Debug for WebPlayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebPlayer")
            .field("player", &self.player)
            .field("raf", &self.raf)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl WebPlayer {
    /// Mounts a player on the element `player_id`, which must hold exactly
    /// `frame_count` frame elements, with controls inside `controls_id`.
    ///
    /// The player starts paused on the first frame.
    ///
    /// # Errors
    ///
    /// Returns a [`MountError`] if an element or control is missing, if the
    /// number of frames differs from `frame_count`, or if `frame_count` is
    /// zero.
    pub fn mount(
        player_id: &str,
        controls_id: &str,
        frame_count: u32,
        config: PlayerConfig,
    ) -> Result<Self, MountError> {
        let result = Self::try_mount(player_id, controls_id, Some(frame_count), config);
        if let Err(err) = &result {
            log::warn!("cannot mount player `{player_id}`: {err}");
        }
        result
    }

    /// Like [`mount`](Self::mount), but takes the frame count from the
    /// player element's `data-frame-count` attribute. Without the attribute,
    /// every frame element found is played.
    ///
    /// # Errors
    ///
    /// As for [`mount`](Self::mount), and
    /// [`MountError::InvalidFrameCount`] if the attribute is not a
    /// non-negative integer.
    pub fn mount_from_dataset(
        player_id: &str,
        controls_id: &str,
        config: PlayerConfig,
    ) -> Result<Self, MountError> {
        let result = Self::try_mount(player_id, controls_id, None, config);
        if let Err(err) = &result {
            log::warn!("cannot mount player `{player_id}`: {err}");
        }
        result
    }

    fn try_mount(
        player_id: &str,
        controls_id: &str,
        frame_count: Option<u32>,
        config: PlayerConfig,
    ) -> Result<Self, MountError> {
        let document = document()?;
        let player_el = element_by_id(&document, player_id)?;
        let controls_el = element_by_id(&document, controls_id)?;

        let toggle = controls_el
            .query_selector(config.toggle_selector)?
            .ok_or(MountError::MissingControl {
                selector: config.toggle_selector,
            })?;
        let field: HtmlInputElement = controls_el
            .query_selector(config.field_selector)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or(MountError::MissingControl {
                selector: config.field_selector,
            })?;

        let frames = frame_elements(&player_el, config.frame_selector)?;
        let attribute = player_el.get_attribute(FRAME_COUNT_ATTRIBUTE);
        let expected = resolve_frame_count(frame_count, attribute.as_deref(), frames.len())?;

        let view = DomFrameView::new(controls_el, frames, field.clone(), &config);
        let player: SharedPlayer = Rc::new(RefCell::new(Player::new(
            expected,
            view,
            config,
            crate::now(),
        )?));

        let raf_player = Rc::clone(&player);
        let raf = Rc::new(RafLoop::new(move |tick| {
            raf_player.borrow_mut().on_tick(&tick)
        }));

        let mut listeners = Vec::with_capacity(3);

        let (p, r) = (Rc::clone(&player), Rc::clone(&raf));
        listeners.push(ListenerGuard::new(&toggle, "click", move |_event: Event| {
            dispatch(&p, &r, Command::Toggle);
        })?);

        let (p, r) = (Rc::clone(&player), Rc::clone(&raf));
        let input = field.clone();
        listeners.push(ListenerGuard::new(&field, "input", move |_event: Event| {
            if let Some(command) = Command::from_field_value(&input.value()) {
                dispatch(&p, &r, command);
            }
        })?);

        let (p, r) = (Rc::clone(&player), Rc::clone(&raf));
        listeners.push(ListenerGuard::new(&document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(command) = Command::from_key_code(&key.code()) else {
                return;
            };
            if command == Command::Toggle && !targets_editable(&event) {
                // Keeps Space from scrolling the page or clicking a focused
                // toggle button a second time.
                event.prevent_default();
            }
            dispatch(&p, &r, command);
        })?);

        log::info!("mounted player `{player_id}` with {expected} frames");

        Ok(Self {
            listeners,
            raf,
            player,
        })
    }

    /// Applies a command as if it came from the page controls.
    pub fn handle(&self, command: Command) {
        dispatch(&self.player, &self.raf, command);
    }

    /// Switches between playing and paused.
    pub fn toggle(&self) {
        self.handle(Command::Toggle);
    }

    /// Starts playback.
    pub fn play(&self) {
        self.drive(|player, now| player.play(now));
    }

    /// Pauses playback.
    pub fn pause(&self) {
        self.drive(|player, now| player.pause(now));
    }

    /// Pauses on the 1-based `frame_number`.
    pub fn seek(&self, frame_number: i64) {
        self.handle(Command::Seek(frame_number));
    }

    /// Pauses and moves `delta` frames.
    pub fn step(&self, delta: i32) {
        self.handle(Command::Step(delta));
    }

    /// Zero-based index of the frame on screen.
    #[must_use]
    pub fn frame_index(&self) -> u32 {
        self.player.borrow().frame_index()
    }

    /// Number of frames.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.player.borrow().frame_count()
    }

    /// Whether the player is playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.player.borrow().is_playing()
    }

    /// Routes player events to `sink`.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        self.player.borrow_mut().set_trace_sink(sink);
    }

    fn drive(&self, f: impl FnOnce(&mut Player<DomFrameView>, HostTime)) {
        f(&mut self.player.borrow_mut(), crate::now());
        start_if_playing(&self.player, &self.raf);
    }
}

impl Drop for WebPlayer {
    fn drop(&mut self) {
        self.raf.stop();
        self.listeners.clear();
        log::info!("unmounted player");
    }
}

/// Applies `command`, then makes sure the advance loop runs while playing.
///
/// The loop is never stopped here: once paused, its next tick returns
/// [`LoopControl::Stop`](pushbyt_core::timing::LoopControl::Stop).
fn dispatch(player: &SharedPlayer, raf: &RafLoop, command: Command) {
    log::debug!("player command {command:?}");
    player.borrow_mut().handle(command, crate::now());
    start_if_playing(player, raf);
}

fn start_if_playing(player: &SharedPlayer, raf: &RafLoop) {
    if player.borrow().is_playing() {
        raf.start();
    }
}

fn document() -> Result<Document, MountError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement { id: id.to_string() })
}

fn frame_elements(player: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    let nodes = player.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect())
}

/// Picks the frame count to play: the explicitly declared count, else the
/// `data-frame-count` attribute, else every frame element `found`.
fn resolve_frame_count(
    declared: Option<u32>,
    attribute: Option<&str>,
    found: usize,
) -> Result<u32, MountError> {
    let found = u32::try_from(found).unwrap_or(u32::MAX);
    let expected = match (declared, attribute) {
        (Some(count), _) => count,
        (None, Some(value)) => {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| MountError::InvalidFrameCount {
                    value: value.to_string(),
                })?
        }
        (None, None) => found,
    };
    if expected == 0 {
        return Err(PlayerError::EmptySequence.into());
    }
    if expected != found {
        return Err(MountError::FrameCountMismatch { expected, found });
    }
    Ok(expected)
}

/// Whether a keydown is headed for something the user types into.
fn targets_editable(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<HtmlElement>() else {
        return false;
    };
    is_editable(&el.tag_name(), el.is_content_editable())
}

fn is_editable(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}
