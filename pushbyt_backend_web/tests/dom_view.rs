// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `DomFrameView` against a real document. Run with
//! `wasm-pack test --headless --firefox pushbyt_backend_web`.

#![cfg(target_arch = "wasm32")]

use pushbyt_backend_web::DomFrameView;
use pushbyt_core::config::PlayerConfig;
use pushbyt_core::view::{FrameSnapshot, FrameView};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a page")
}

fn view(config: &PlayerConfig, frames: usize) -> (DomFrameView, Element, Vec<Element>) {
    let doc = document();
    let controls = doc.create_element("div").expect("div");
    let field: HtmlInputElement = doc
        .create_element("input")
        .expect("input")
        .dyn_into()
        .expect("an input element");
    let frames: Vec<Element> = (0..frames)
        .map(|_| doc.create_element("img").expect("img"))
        .collect();
    let view = DomFrameView::new(controls.clone(), frames.clone(), field, config);
    (view, controls, frames)
}

fn snapshot(frame_index: u32, playing: bool) -> FrameSnapshot {
    FrameSnapshot {
        frame_index,
        frame_count: 3,
        playing,
        field_value: frame_index + 1,
    }
}

fn shown(frames: &[Element], class: &str) -> Vec<usize> {
    frames
        .iter()
        .enumerate()
        .filter_map(|(i, el)| el.class_list().contains(class).then_some(i))
        .collect()
}

#[wasm_bindgen_test]
fn moves_shown_class_between_frames() {
    let config = PlayerConfig::web();
    let (mut view, controls, frames) = view(&config, 3);
    frames[2]
        .class_list()
        .add_1(config.shown_class)
        .expect("mark frame");

    view.present(&snapshot(0, true));
    assert_eq!(shown(&frames, config.shown_class), [0]);
    assert!(controls.class_list().contains(config.playing_class), "playing");

    view.present(&snapshot(1, false));
    assert_eq!(shown(&frames, config.shown_class), [1]);
    assert!(!controls.class_list().contains(config.playing_class), "paused");
}

#[wasm_bindgen_test]
fn class_names_need_no_css_escaping() {
    let config = PlayerConfig::web().with_classes("is:shown", "is:playing");
    let (mut view, _, frames) = view(&config, 3);

    view.present(&snapshot(0, false));
    view.present(&snapshot(2, false));
    assert_eq!(
        shown(&frames, "is:shown"),
        [2],
        "the previous frame is hidden again"
    );
}
