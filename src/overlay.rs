//! Inputs for the compositing layer: the trace as a discrete path animation
//! and the raw per-frame detection boxes.

use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltwh};
use crate::frame::Frame;
use crate::trace::{TraceHistory, TracePoint};

/// Trace length reached after a processed frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub timestamp: f32,
    pub trace_len: usize,
}

/// Whole trace as visible at one keyframe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathKeyframe {
    /// `timestamp / last timestamp`, in `[0, 1]` for non-negative timestamps.
    pub key_time: f32,
    pub points: Vec<TracePoint>,
}

/// One [`PathKeyframe`] per keyframe, points projected into `frame_size`.
pub fn path_keyframes<'a>(
    history: &'a TraceHistory,
    keyframes: &'a [Keyframe],
    frame_size: (u32, u32),
) -> impl Iterator<Item = PathKeyframe> + Clone + 'a {
    let duration = keyframes.last().map(|k| k.timestamp).unwrap_or(0.0);

    keyframes.iter().map(move |k| PathKeyframe {
        key_time: if duration > 0.0 {
            k.timestamp / duration
        } else {
            0.0
        },
        points: history
            .points(frame_size)
            .take(k.trace_len)
            .collect(),
    })
}

/// Pixel-space rects of every detection in `frame`, no selection applied.
pub fn detection_rects(frame: &Frame, (fw, fh): (u32, u32)) -> Vec<BBox<Ltwh>> {
    frame
        .iter()
        .map(|det| {
            let b = det.bbox;
            b.with_center(b.cx(), 1.0 - b.cy())
                .as_ltwh()
                .scaled(fw as f32, fh as f32)
        })
        .collect()
}
