use log::debug;
use nalgebra as na;

use crate::bbox::{BBox, Xywh};

/// Single best guess of the club box across frames.
///
/// Initialized with the club nearest to the frame center, then continued with
/// the club of maximum IoU against the previous anchor. When nothing overlaps
/// the anchor is carried over unchanged.
#[derive(Debug, Clone)]
pub struct ClubAnchor {
    bbox: Option<BBox<Xywh>>,
    frame_center: na::Point2<f32>,
}

impl ClubAnchor {
    pub fn new(frame_center: na::Point2<f32>) -> Self {
        Self {
            bbox: None,
            frame_center,
        }
    }

    #[inline]
    pub fn bbox(&self) -> Option<&BBox<Xywh>> {
        self.bbox.as_ref()
    }

    /// Returns whether a club from `clubs` was matched in this frame.
    pub fn update(&mut self, clubs: &[BBox<Xywh>]) -> bool {
        let matched = match &self.bbox {
            None => {
                let found = nearest_to(clubs, &self.frame_center);
                if let Some(club) = &found {
                    debug!("club anchor initialized at {:?}", club.as_slice());
                }
                found
            }
            Some(last) => {
                let found = best_overlap(last, clubs);
                if found.is_none() && !clubs.is_empty() {
                    debug!("no club overlaps the anchor, keeping {:?}", last.as_slice());
                }
                found
            }
        };

        match matched {
            Some(club) => {
                self.bbox = Some(club);
                true
            }
            None => false,
        }
    }

    /// Heads sharing some area with the current anchor, nothing without an anchor.
    pub fn filter_heads(&self, heads: &[BBox<Xywh>]) -> Vec<BBox<Xywh>> {
        match &self.bbox {
            Some(anchor) => heads
                .iter()
                .filter(|head| head.intersection_area(anchor) > 0.0)
                .copied()
                .collect(),
            None => Vec::new(),
        }
    }
}

/// First of the closest candidates wins.
fn nearest_to(clubs: &[BBox<Xywh>], pt: &na::Point2<f32>) -> Option<BBox<Xywh>> {
    let mut best: Option<(f32, &BBox<Xywh>)> = None;

    for club in clubs {
        let dist = club.center_distance(pt);

        match best {
            Some((min, _)) if dist >= min => {}
            _ => best = Some((dist, club)),
        }
    }

    best.map(|(_, club)| *club)
}

/// Candidate with the strictly greatest positive IoU, degenerate (NaN) IoU counts as none.
fn best_overlap(last: &BBox<Xywh>, clubs: &[BBox<Xywh>]) -> Option<BBox<Xywh>> {
    let mut max_iou = 0.0;
    let mut best = None;

    for club in clubs {
        let iou = last.iou(club);

        if iou.is_nan() {
            continue;
        }

        if iou > max_iou {
            max_iou = iou;
            best = Some(*club);
        }
    }

    best
}
