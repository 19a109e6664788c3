// Copyright 2026 the Pushbyt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes events from a [`Recording`](crate::recorder::Recording)
//! as [Chrome Trace Event Format][format] JSON. Playback intervals become
//! duration slices; advances, seeks and steps become instant events. Sync
//! events carry no timestamp and are skipped, as are plays and pauses that
//! did not change state, so every begin has exactly one end.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use pushbyt_core::time::{HostTime, Timebase};

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array of trace events, suitable for
/// `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using `timebase`.
pub fn export(
    events: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let trace: Vec<Value> = events
        .iter()
        .filter_map(|event| to_trace_event(event, timebase))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &trace)?;
    writer.write_all(b"\n")
}

fn to_trace_event(event: &RecordedEvent, timebase: Timebase) -> Option<Value> {
    let value = match event {
        RecordedEvent::Play(e) if !e.was_playing => json!({
            "ph": "B",
            "name": "Playing",
            "cat": "Transport",
            "ts": ts(e.now, timebase),
            "pid": 0,
            "tid": 0,
            "args": { "frame_index": e.frame_index },
        }),
        RecordedEvent::Pause(e) if e.was_playing => json!({
            "ph": "E",
            "name": "Playing",
            "cat": "Transport",
            "ts": ts(e.now, timebase),
            "pid": 0,
            "tid": 0,
            "args": { "frame_index": e.frame_index },
        }),
        RecordedEvent::Play(_) | RecordedEvent::Pause(_) | RecordedEvent::Sync(_) => return None,
        RecordedEvent::Seek(e) => json!({
            "ph": "i",
            "name": "Seek",
            "cat": "Input",
            "ts": ts(e.now, timebase),
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "requested": e.requested,
                "frame_index": e.frame_index,
            },
        }),
        RecordedEvent::Step(e) => json!({
            "ph": "i",
            "name": "Step",
            "cat": "Input",
            "ts": ts(e.now, timebase),
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "delta": e.delta,
                "frame_index": e.frame_index,
            },
        }),
        RecordedEvent::Advance(e) => json!({
            "ph": "i",
            "name": "Advance",
            "cat": "Playback",
            "ts": ts(e.now, timebase),
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "frame_index": e.frame_index,
                "elapsed_us": ticks_to_us(e.elapsed.ticks(), timebase),
            },
        }),
    };
    Some(value)
}

fn ts(t: HostTime, timebase: Timebase) -> f64 {
    ticks_to_us(t.ticks(), timebase)
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushbyt_core::time::Duration;
    use pushbyt_core::trace::{AdvanceEvent, PauseEvent, PlayEvent};
    use pushbyt_core::view::FrameSnapshot;

    #[test]
    fn export_produces_valid_json() {
        let events = [
            RecordedEvent::Sync(FrameSnapshot {
                frame_index: 0,
                frame_count: 4,
                playing: true,
                field_value: 1,
            }),
            RecordedEvent::Play(PlayEvent {
                now: HostTime(1_000),
                frame_index: 0,
                was_playing: false,
            }),
            RecordedEvent::Advance(AdvanceEvent {
                now: HostTime(101_000),
                elapsed: Duration(100_000),
                frame_index: 1,
            }),
            RecordedEvent::Pause(PauseEvent {
                now: HostTime(150_000),
                frame_index: 1,
                was_playing: true,
            }),
            RecordedEvent::Pause(PauseEvent {
                now: HostTime(160_000),
                frame_index: 1,
                was_playing: false,
            }),
        ];

        let mut out = Vec::new();
        export(&events, Timebase::MICROS, &mut out).expect("write to Vec");

        let parsed: Value = serde_json::from_slice(&out).expect("valid JSON");
        let arr = parsed.as_array().expect("top-level array");
        assert_eq!(arr.len(), 3, "sync and redundant pause are skipped");

        assert_eq!(arr[0]["ph"], "B");
        assert_eq!(arr[0]["ts"], 1_000.0);
        assert_eq!(arr[1]["name"], "Advance");
        assert_eq!(arr[1]["args"]["elapsed_us"], 100_000.0);
        assert_eq!(arr[2]["ph"], "E");
    }

    #[test]
    fn repeated_play_opens_one_slice() {
        let play = |now, was_playing| {
            RecordedEvent::Play(PlayEvent {
                now: HostTime(now),
                frame_index: 0,
                was_playing,
            })
        };
        let events = [
            play(1_000, false),
            play(2_000, true),
            RecordedEvent::Pause(PauseEvent {
                now: HostTime(3_000),
                frame_index: 0,
                was_playing: true,
            }),
        ];

        let mut out = Vec::new();
        export(&events, Timebase::MICROS, &mut out).expect("write to Vec");

        let parsed: Value = serde_json::from_slice(&out).expect("valid JSON");
        let phases: Vec<&str> = parsed
            .as_array()
            .expect("top-level array")
            .iter()
            .filter_map(|e| e["ph"].as_str())
            .collect();
        assert_eq!(phases, ["B", "E"], "begins and ends balance");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::MICROS, &mut out).expect("write to Vec");
        let parsed: Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(parsed.as_array().map(Vec::len), Some(0));
    }
}
