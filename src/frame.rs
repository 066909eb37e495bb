use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Xywh};
use crate::detection::{Detection, DetectionClass};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub timestamp: f32, // in seconds
    pub detections: Vec<Detection>,
}

/// Detections of one frame split by class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    pub clubs: Vec<BBox<Xywh>>,
    pub heads: Vec<BBox<Xywh>>,
}

impl Frame {
    #[inline]
    pub fn new(index: usize, timestamp: f32, detections: Vec<Detection>) -> Self {
        Self {
            index,
            timestamp,
            detections,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Partitions every detection into club or head candidates, keeping input order.
    pub fn candidates(&self) -> Candidates {
        let mut out = Candidates::default();

        for det in self.iter() {
            match det.class() {
                DetectionClass::Club => out.clubs.push(det.bbox),
                DetectionClass::Head => out.heads.push(det.bbox),
            }
        }

        out
    }
}
