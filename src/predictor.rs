use super::math::lagrange;
use crate::bbox::{BBox, Xywh};
use crate::trace::TraceSample;

/// Extrapolates the next head position from the trailing trace samples.
#[derive(Debug, Clone)]
pub struct Predictor {
    window: usize,
}

impl Predictor {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Fits a Lagrange polynomial through the last `window` samples (fewer
    /// when the history is shorter) separately for the center x and y, and
    /// evaluates it at `ts`. The box keeps the size of the newest sample.
    ///
    /// Sample timestamps have to be pairwise distinct. `None` only for an empty history.
    pub fn predict(&self, history: &[TraceSample], ts: f32) -> Option<BBox<Xywh>> {
        let last = history.last()?;
        let samples = &history[history.len().saturating_sub(self.window)..];

        let times: Vec<f64> = samples.iter().map(|s| s.timestamp as f64).collect();
        let xs: Vec<f64> = samples.iter().map(|s| s.bbox.cx() as f64).collect();
        let ys: Vec<f64> = samples.iter().map(|s| s.bbox.cy() as f64).collect();

        let at = ts as f64;
        let cx = lagrange(&times, &xs, at) as f32;
        let cy = lagrange(&times, &ys, at) as f32;

        Some(last.bbox.with_center(cx, cy))
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(3)
    }
}
