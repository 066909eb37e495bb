pub mod anchor;
pub mod bbox;
pub mod config;
pub mod decoder;
pub mod detection;
pub mod error;
pub mod frame;
pub mod math;
pub mod overlay;
pub mod quadrant;
pub mod selection;
pub mod trace;
pub mod tracker;

mod predictor;

pub use config::TrackerConfig;
pub use detection::{ClassConfidence, Detection, DetectionClass};
pub use frame::Frame;
pub use predictor::Predictor;
pub use quadrant::Quadrant;
pub use trace::{HeadOrigin, TraceHistory, TracePoint, TraceSample};
pub use tracker::Tracker;

use error::Error;
use nalgebra as na;
use std::fmt;

pub trait Float:
    num_traits::FromPrimitive + na::RealField + Copy + fmt::Debug + PartialEq + 'static
{
}

impl<T> Float for T where
    T: num_traits::FromPrimitive + na::RealField + Copy + fmt::Debug + PartialEq + 'static
{
}

/// Runs a fresh [`Tracker`] over all `frames` of one video.
pub fn trace_swing<'a, I>(frames: I, config: TrackerConfig) -> Result<TraceHistory, Error>
where
    I: IntoIterator<Item = &'a Frame>,
{
    let mut tracker = Tracker::new(config)?;

    for frame in frames {
        tracker.process_frame(frame);
    }

    Ok(tracker.into_history())
}
