//! Decoding of raw detector output into [`Detection`]s.
//!
//! The club detection model emits two tensors per frame: `coordinates`
//! `[N, 4]` with normalized `(cx, cy, w, h)` rows and `confidence` `[N, 2]`
//! with `(club, head)` rows.

use crate::bbox::BBox;
use crate::detection::{ClassConfidence, Detection};
use crate::error::Error;

use ndarray::prelude::*;

pub fn decode(
    coordinates: ArrayView2<'_, f32>,
    confidence: ArrayView2<'_, f32>,
) -> Result<Vec<Detection>, Error> {
    if coordinates.ncols() != 4 {
        return Err(Error::BoxColumns(coordinates.ncols()));
    }

    if confidence.ncols() != 2 {
        return Err(Error::ConfidenceColumns(confidence.ncols()));
    }

    if coordinates.nrows() != confidence.nrows() {
        return Err(Error::CountMismatch {
            boxes: coordinates.nrows(),
            scores: confidence.nrows(),
        });
    }

    coordinates
        .outer_iter()
        .zip(confidence.outer_iter())
        .enumerate()
        .map(|(index, (bbox, conf))| {
            let (cx, cy, w, h) = (bbox[0], bbox[1], bbox[2], bbox[3]);

            if !(cx.is_finite() && cy.is_finite() && w.is_finite() && h.is_finite())
                || w < 0.0
                || h < 0.0
            {
                return Err(Error::InvalidBox(index));
            }

            let confidence = ClassConfidence::new(conf[0], conf[1]);
            if !confidence.is_finite() {
                return Err(Error::NonFiniteScore(index));
            }

            Ok(Detection::new(BBox::xywh(cx, cy, w, h), confidence))
        })
        .collect()
}

/// Same as [`decode`] for flat row-major buffers.
pub fn decode_flat(coordinates: &[f32], confidence: &[f32]) -> Result<Vec<Detection>, Error> {
    if coordinates.len() % 4 != 0 {
        return Err(Error::RaggedBuffer(coordinates.len(), 4));
    }

    if confidence.len() % 2 != 0 {
        return Err(Error::RaggedBuffer(confidence.len(), 2));
    }

    let coordinates = ArrayView2::from_shape((coordinates.len() / 4, 4), coordinates)?;
    let confidence = ArrayView2::from_shape((confidence.len() / 2, 2), confidence)?;

    decode(coordinates, confidence)
}
