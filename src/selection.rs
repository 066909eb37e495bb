use log::trace;
use nalgebra as na;

use crate::bbox::{BBox, Xywh};
use crate::predictor::Predictor;
use crate::trace::{TraceHistory, TraceSample};

/// Head selection policy, keyed by how much trace history exists.
#[derive(Debug, Clone, Copy)]
pub enum SelectionState<'a> {
    /// No head accepted yet.
    Initializing,
    /// Exactly one head accepted.
    SingleSample(&'a TraceSample),
    /// Two or more heads accepted, enough to extrapolate.
    Established(&'a [TraceSample]),
}

impl<'a> SelectionState<'a> {
    pub fn from_history(history: &'a TraceHistory) -> Self {
        match history.as_slice() {
            [] => SelectionState::Initializing,
            [only] => SelectionState::SingleSample(only),
            samples => SelectionState::Established(samples),
        }
    }

    /// Picks one of the `candidates` for the frame at `ts`, `None` when there are none.
    pub fn select(
        &self,
        candidates: &[BBox<Xywh>],
        anchor: &BBox<Xywh>,
        ts: f32,
        predictor: &Predictor,
    ) -> Option<BBox<Xywh>> {
        match *self {
            SelectionState::Initializing => farthest_from(candidates, &anchor.center()),
            SelectionState::SingleSample(prev) => closest_to(candidates, &prev.bbox.center()),
            SelectionState::Established(samples) => {
                let predicted = predictor.predict(samples, ts)?;
                trace!("predicted head at {:?} for t={}", predicted.as_slice(), ts);

                closest_to(candidates, &predicted.center())
            }
        }
    }
}

/// The head sits at the far end of the shaft from the club box center.
fn farthest_from(candidates: &[BBox<Xywh>], pt: &na::Point2<f32>) -> Option<BBox<Xywh>> {
    pick_by(candidates, pt, |dist, best| dist > best)
}

fn closest_to(candidates: &[BBox<Xywh>], pt: &na::Point2<f32>) -> Option<BBox<Xywh>> {
    pick_by(candidates, pt, |dist, best| dist < best)
}

/// First candidate, replaced only by candidates for which `better` strictly holds.
fn pick_by<F>(candidates: &[BBox<Xywh>], pt: &na::Point2<f32>, better: F) -> Option<BBox<Xywh>>
where
    F: Fn(f32, f32) -> bool,
{
    let (first, rest) = candidates.split_first()?;
    let mut best = (first.center_distance(pt), first);

    for cand in rest {
        let dist = cand.center_distance(pt);

        if better(dist, best.0) {
            best = (dist, cand);
        }
    }

    Some(*best.1)
}
