use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::quadrant::Quadrant;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Pixel size `(width, height)` used to project the trace.
    pub frame_size: (u32, u32),
    /// Normalized point the first club anchor is chosen closest to.
    pub frame_center: (f32, f32),
    /// Max number of trailing samples the predictor fits through.
    pub prediction_window: usize,
    /// Quadrant assumed until a head is seen off both anchor axes.
    pub initial_quadrant: Quadrant,
}

impl TrackerConfig {
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_size: (frame_width, frame_height),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let (fw, fh) = self.frame_size;
        if fw == 0 || fh == 0 {
            return Err(Error::FrameSize(fw, fh));
        }

        if self.prediction_window < 2 {
            return Err(Error::PredictionWindow(self.prediction_window));
        }

        let (cx, cy) = self.frame_center;
        if !(cx.is_finite() && cy.is_finite()) {
            return Err(Error::FrameCenter(cx, cy));
        }

        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            frame_size: (1, 1),
            frame_center: (0.5, 0.5),
            prediction_window: 3,
            initial_quadrant: Quadrant::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TrackerConfig::default().validate().is_ok());
        assert!(TrackerConfig::new(1920, 1080).validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"frame_size":[1280,720],"initial_quadrant":"Q0"}"#).unwrap();

        assert_eq!(config.frame_size, (1280, 720));
        assert_eq!(config.initial_quadrant, Quadrant::Q0);
        assert_eq!(config.prediction_window, 3);
        assert_eq!(config.frame_center, (0.5, 0.5));
    }

    #[test]
    fn test_validate_rejects() {
        let err = TrackerConfig::new(0, 720).validate().unwrap_err();
        assert!(matches!(err, Error::FrameSize(0, 720)));

        let config = TrackerConfig {
            prediction_window: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::PredictionWindow(1))));

        let config = TrackerConfig {
            frame_center: (f32::NAN, 0.5),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::FrameCenter(..))));
    }
}
