use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Shape Error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("flat buffer of {0} values does not split into rows of {1}")]
    RaggedBuffer(usize, usize),

    #[error("box tensor must have 4 columns, got {0}")]
    BoxColumns(usize),

    #[error("confidence tensor must have 2 columns, got {0}")]
    ConfidenceColumns(usize),

    #[error("{boxes} boxes but {scores} confidence pairs")]
    CountMismatch { boxes: usize, scores: usize },

    #[error("detection {0} has a non-finite confidence score")]
    NonFiniteScore(usize),

    #[error("detection {0} has a negative or non-finite box")]
    InvalidBox(usize),

    #[error("timestamp {current} does not follow {previous}")]
    NonMonotonicTimestamp { previous: f32, current: f32 },

    #[error("frame size must be non-zero, got {0}x{1}")]
    FrameSize(u32, u32),

    #[error("prediction window must hold at least 2 samples, got {0}")]
    PredictionWindow(usize),

    #[error("frame center must be finite, got ({0}, {1})")]
    FrameCenter(f32, f32),
}
