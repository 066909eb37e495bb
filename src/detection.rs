use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Xywh};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionClass {
    Club,
    Head,
}

/// Per-class scores emitted by the detector, `(club, head)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ClassConfidence {
    pub club: f32,
    pub head: f32,
}

impl ClassConfidence {
    #[inline]
    pub fn new(club: f32, head: f32) -> Self {
        Self { club, head }
    }

    /// A detection is a head only when the head score strictly wins, ties go to the club.
    #[inline]
    pub fn class(&self) -> DetectionClass {
        if self.head > self.club {
            DetectionClass::Head
        } else {
            DetectionClass::Club
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.club.is_finite() && self.head.is_finite()
    }
}

/// Contains normalized center-based bbox and the two-class confidence pair
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub bbox: BBox<Xywh>,
    #[serde(rename = "p")]
    pub confidence: ClassConfidence,
}

impl Detection {
    #[inline]
    pub fn new(bbox: BBox<Xywh>, confidence: ClassConfidence) -> Self {
        Self { bbox, confidence }
    }

    #[inline(always)]
    pub fn class(&self) -> DetectionClass {
        self.confidence.class()
    }

    #[inline(always)]
    pub fn is_head(&self) -> bool {
        self.class() == DetectionClass::Head
    }
}
