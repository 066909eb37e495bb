use log::{debug, trace, warn};
use nalgebra as na;

use crate::anchor::ClubAnchor;
use crate::bbox::{BBox, Xywh};
use crate::config::TrackerConfig;
use crate::error::Error;
use crate::frame::Frame;
use crate::overlay::{self, Keyframe, PathKeyframe};
use crate::predictor::Predictor;
use crate::quadrant::Quadrant;
use crate::selection::SelectionState;
use crate::trace::{TraceHistory, TracePoint, TraceSample};

/// Club head tracker for a single video.
///
/// Frames have to be fed in order, each decision depends on the state left
/// by the previous frame.
#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    anchor: ClubAnchor,
    predictor: Predictor,
    history: TraceHistory,
    /// last head that was actually detected
    last_head: Option<BBox<Xywh>>,
    last_quadrant: Quadrant,
    last_ts: Option<f32>,
    keyframes: Vec<Keyframe>,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Result<Self, Error> {
        config.validate()?;

        let (cx, cy) = config.frame_center;

        Ok(Self {
            anchor: ClubAnchor::new(na::Point2::new(cx, cy)),
            predictor: Predictor::new(config.prediction_window),
            history: TraceHistory::new(),
            last_head: None,
            last_quadrant: config.initial_quadrant,
            last_ts: None,
            keyframes: Vec::new(),
            config,
        })
    }

    /// Runs one frame through classification, anchor tracking, head filtering
    /// and selection. Returns the pixel-space head position when the trace advanced.
    ///
    /// A frame not strictly later than the previous one is ignored.
    pub fn process_frame(&mut self, frame: &Frame) -> Option<TracePoint> {
        let ts = frame.timestamp;

        if !ts.is_finite() {
            warn!("frame {} has no valid timestamp, skipped", frame.index);
            return None;
        }

        if let Some(prev) = self.last_ts {
            if !(ts > prev) {
                warn!(
                    "frame {} at t={} does not follow t={}, skipped",
                    frame.index, ts, prev
                );
                return None;
            }
        }
        self.last_ts = Some(ts);

        let candidates = frame.candidates();
        let club_detected = self.anchor.update(&candidates.clubs);
        let heads = self.anchor.filter_heads(&candidates.heads);

        let sample = match self.anchor.bbox().copied() {
            Some(anchor) if !heads.is_empty() => self.select(&heads, &anchor, ts),
            Some(anchor) if club_detected => self.recover(&anchor, ts),
            _ => None,
        };

        let point = match sample {
            Some(sample) => match self.history.push(sample) {
                Ok(()) => Some(sample.to_pixel(self.config.frame_size)),
                Err(err) => {
                    warn!("frame {}: {}", frame.index, err);
                    None
                }
            },
            None => {
                trace!("frame {}: no head", frame.index);
                None
            }
        };

        self.keyframes.push(Keyframe {
            timestamp: ts,
            trace_len: self.history.len(),
        });

        point
    }

    fn select(
        &mut self,
        heads: &[BBox<Xywh>],
        anchor: &BBox<Xywh>,
        ts: f32,
    ) -> Option<TraceSample> {
        let state = SelectionState::from_history(&self.history);
        let head = state.select(heads, anchor, ts, &self.predictor)?;

        if let Some(q) = Quadrant::locate(&head, anchor) {
            self.last_quadrant = q;
        }
        self.last_head = Some(head);

        trace!("head selected at {:?}, {:?}", head.as_slice(), self.last_quadrant);

        Some(TraceSample::detected(ts, head))
    }

    /// Pins a box of the last detected head's size into the stored quadrant of the moved anchor.
    fn recover(&self, anchor: &BBox<Xywh>, ts: f32) -> Option<TraceSample> {
        let last = self.last_head.as_ref()?;
        let head = self.last_quadrant.place(anchor, last);

        debug!(
            "head occluded at t={}, recovered at {:?} in {:?}",
            ts,
            head.as_slice(),
            self.last_quadrant
        );

        Some(TraceSample::recovered(ts, head))
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn anchor(&self) -> Option<&BBox<Xywh>> {
        self.anchor.bbox()
    }

    #[inline]
    pub fn last_quadrant(&self) -> Quadrant {
        self.last_quadrant
    }

    #[inline]
    pub fn history(&self) -> &TraceHistory {
        &self.history
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    pub fn points(&self) -> impl Iterator<Item = TracePoint> + Clone + '_ {
        self.history.points(self.config.frame_size)
    }

    #[inline]
    pub fn path_keyframes(&self) -> impl Iterator<Item = PathKeyframe> + Clone + '_ {
        overlay::path_keyframes(&self.history, &self.keyframes, self.config.frame_size)
    }

    pub fn into_history(self) -> TraceHistory {
        self.history
    }
}
