use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Xywh};
use crate::error::Error;

/// Where an accepted head box came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadOrigin {
    Detected,
    Recovered,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub timestamp: f32,
    pub bbox: BBox<Xywh>,
    pub origin: HeadOrigin,
}

impl TraceSample {
    #[inline]
    pub fn detected(timestamp: f32, bbox: BBox<Xywh>) -> Self {
        Self {
            timestamp,
            bbox,
            origin: HeadOrigin::Detected,
        }
    }

    #[inline]
    pub fn recovered(timestamp: f32, bbox: BBox<Xywh>) -> Self {
        Self {
            timestamp,
            bbox,
            origin: HeadOrigin::Recovered,
        }
    }

    /// Projects the head center into a `(width, height)` pixel frame.
    ///
    /// Detections use a bottom-up y axis, pixels are top-down.
    #[inline]
    pub fn to_pixel(&self, (fw, fh): (u32, u32)) -> TracePoint {
        TracePoint {
            timestamp: self.timestamp,
            x: self.bbox.cx() * fw as f32,
            y: (1.0 - self.bbox.cy()) * fh as f32,
        }
    }
}

/// Head position in pixel space
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub timestamp: f32,
    pub x: f32,
    pub y: f32,
}

/// Append-only, strictly time-ordered head samples of one run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TraceHistory {
    samples: Vec<TraceSample>,
}

impl TraceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: TraceSample) -> Result<(), Error> {
        if let Some(last) = self.samples.last() {
            // also rejects NaN
            if !(sample.timestamp > last.timestamp) {
                return Err(Error::NonMonotonicTimestamp {
                    previous: last.timestamp,
                    current: sample.timestamp,
                });
            }
        }

        self.samples.push(sample);

        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&TraceSample> {
        self.samples.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[TraceSample] {
        &self.samples
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TraceSample> + Clone {
        self.samples.iter()
    }

    /// Pixel-space trace. Calling it again, or cloning the iterator, starts over.
    #[inline]
    pub fn points(&self, frame_size: (u32, u32)) -> impl Iterator<Item = TracePoint> + Clone + '_ {
        self.samples.iter().map(move |s| s.to_pixel(frame_size))
    }
}
