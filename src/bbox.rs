use nalgebra as na;
use serde_derive::{Deserialize, Serialize};
use std::marker::PhantomData;

pub trait BBoxFormat: std::fmt::Debug {}

/// Left-top-width-height format, contains left top corner and width-height
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Ltwh;
impl BBoxFormat for Ltwh {}

/// Left-top-right-bottom format, contains left top and right bottom corners
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Ltrb;
impl BBoxFormat for Ltrb {}

/// X-y-width-height format, contains coordinates of the center of bbox and width-height
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Xywh;
impl BBoxFormat for Xywh {}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(transparent)]
pub struct BBox<F: BBoxFormat>([f32; 4], #[serde(skip)] PhantomData<F>);

impl<F: BBoxFormat> From<BBox<F>> for [f32; 4] {
    fn from(bbox: BBox<F>) -> Self {
        bbox.0
    }
}

impl<F: BBoxFormat> BBox<F> {
    #[inline]
    pub fn as_slice(&self) -> &[f32; 4] {
        &self.0
    }
}

impl BBox<Ltwh> {
    #[inline]
    pub fn ltwh(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.0[3]
    }

    /// Scales a normalized rect into a `fw` x `fh` pixel frame.
    #[inline]
    pub fn scaled(&self, fw: f32, fh: f32) -> Self {
        BBox::ltwh(
            self.left() * fw,
            self.top() * fh,
            self.width() * fw,
            self.height() * fh,
        )
    }
}

impl BBox<Ltrb> {
    #[inline]
    pub fn ltrb(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.0[3]
    }
}

impl BBox<Xywh> {
    #[inline]
    pub fn xywh(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline(always)]
    pub fn as_ltrb(&self) -> BBox<Ltrb> {
        self.into()
    }

    #[inline(always)]
    pub fn as_ltwh(&self) -> BBox<Ltwh> {
        self.into()
    }

    #[inline(always)]
    pub fn cx(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn cy(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new(self.cx(), self.cy())
    }

    /// Same extent, moved to a new center.
    #[inline]
    pub fn with_center(&self, cx: f32, cy: f32) -> Self {
        BBox::xywh(cx, cy, self.width(), self.height())
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Zero when the boxes are disjoint or only touch along an edge.
    pub fn intersection_area(&self, other: &BBox<Xywh>) -> f32 {
        let a = self.as_ltrb();
        let b = other.as_ltrb();

        let w = (a.right().min(b.right()) - a.left().max(b.left())).max(0.0);
        let h = (a.bottom().min(b.bottom()) - a.top().max(b.top())).max(0.0);

        w * h
    }

    #[inline]
    pub fn union_area(&self, other: &BBox<Xywh>) -> f32 {
        self.area() + other.area() - self.intersection_area(other)
    }

    /// Intersection over union.
    ///
    /// NaN when both boxes have zero area; callers matching on IoU have to
    /// treat that as "no overlap".
    #[inline]
    pub fn iou(&self, other: &BBox<Xywh>) -> f32 {
        self.intersection_area(other) / self.union_area(other)
    }

    /// Euclidean distance between box centers.
    #[inline]
    pub fn center_distance(&self, pt: &na::Point2<f32>) -> f32 {
        na::distance(&self.center(), pt)
    }
}

impl<'a> From<&'a BBox<Xywh>> for BBox<Ltrb> {
    #[inline]
    fn from(v: &'a BBox<Xywh>) -> Self {
        Self(
            [
                v.0[0] - v.0[2] / 2.0,
                v.0[1] - v.0[3] / 2.0,
                v.0[0] + v.0[2] / 2.0,
                v.0[1] + v.0[3] / 2.0,
            ],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Xywh>> for BBox<Ltwh> {
    #[inline]
    fn from(v: &'a BBox<Xywh>) -> Self {
        Self(
            [v.0[0] - v.0[2] / 2.0, v.0[1] - v.0[3] / 2.0, v.0[2], v.0[3]],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Ltrb>> for BBox<Xywh> {
    #[inline]
    fn from(v: &'a BBox<Ltrb>) -> Self {
        Self(
            [
                v.0[0] + (v.0[2] - v.0[0]) / 2.0,
                v.0[1] + (v.0[3] - v.0[1]) / 2.0,
                v.0[2] - v.0[0],
                v.0[3] - v.0[1],
            ],
            Default::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_corners_from_center() {
        let b = BBox::xywh(0.5, 0.5, 0.2, 0.1).as_ltrb();
        assert_relative_eq!(b.left(), 0.4, epsilon = 1e-6);
        assert_relative_eq!(b.top(), 0.45, epsilon = 1e-6);
        assert_relative_eq!(b.right(), 0.6, epsilon = 1e-6);
        assert_relative_eq!(b.bottom(), 0.55, epsilon = 1e-6);
    }

    #[test]
    fn test_top_left_from_center() {
        let b = BBox::xywh(0.5, 0.25, 0.25, 0.5).as_ltwh();
        assert_eq!(b.as_slice(), &[0.375, 0.0, 0.25, 0.5]);
    }

    #[test]
    fn test_ltrb_back_to_center() {
        let b = BBox::ltrb(0.1, 0.2, 0.3, 0.6);
        let c: BBox<Xywh> = (&b).into();
        assert_relative_eq!(c.cx(), 0.2, epsilon = 1e-6);
        assert_relative_eq!(c.cy(), 0.4, epsilon = 1e-6);
        assert_relative_eq!(c.width(), 0.2, epsilon = 1e-6);
        assert_relative_eq!(c.height(), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_intersection_partial_overlap() {
        // a: [0.4,0.45]-[0.6,0.55], b: [0.42,0.45]-[0.62,0.55]
        let a = BBox::xywh(0.5, 0.5, 0.2, 0.1);
        let b = BBox::xywh(0.52, 0.5, 0.2, 0.1);
        assert_relative_eq!(a.intersection_area(&b), 0.18 * 0.1, epsilon = 1e-6);
        assert_relative_eq!(a.union_area(&b), 0.022, epsilon = 1e-6);
        assert_relative_eq!(a.iou(&b), 0.018 / 0.022, epsilon = 1e-5);
    }

    #[test]
    fn test_iou_identical() {
        let a = BBox::xywh(0.3, 0.7, 0.1, 0.25);
        assert_relative_eq!(a.iou(&a), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_iou_contained() {
        let a = BBox::xywh(0.5, 0.5, 0.4, 0.4);
        let b = BBox::xywh(0.5, 0.5, 0.2, 0.2);
        assert_relative_eq!(a.iou(&b), 0.25, epsilon = 1e-6);
    }

    #[rstest]
    #[case::disjoint(BBox::xywh(0.1, 0.1, 0.1, 0.1), BBox::xywh(0.8, 0.8, 0.1, 0.1))]
    #[case::touching_edge(BBox::xywh(0.25, 0.5, 0.5, 0.2), BBox::xywh(0.75, 0.5, 0.5, 0.2))]
    #[case::separated_vertically(BBox::xywh(0.5, 0.1, 0.4, 0.1), BBox::xywh(0.5, 0.9, 0.4, 0.1))]
    fn test_no_overlap(#[case] a: BBox<Xywh>, #[case] b: BBox<Xywh>) {
        assert_eq!(a.intersection_area(&b), 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[rstest]
    #[case(BBox::xywh(0.5, 0.5, 0.2, 0.1), BBox::xywh(0.55, 0.52, 0.3, 0.05))]
    #[case(BBox::xywh(0.1, 0.9, 0.05, 0.05), BBox::xywh(0.12, 0.88, 0.05, 0.05))]
    #[case(BBox::xywh(0.5, 0.5, 1.0, 1.0), BBox::xywh(0.9, 0.1, 0.01, 0.01))]
    fn test_iou_bounds(#[case] a: BBox<Xywh>, #[case] b: BBox<Xywh>) {
        let iou = a.iou(&b);
        assert!((0.0..=1.0).contains(&iou));
        assert_relative_eq!(iou, b.iou(&a), epsilon = 1e-6);
    }

    #[test]
    fn test_iou_degenerate_is_nan() {
        let a = BBox::xywh(0.5, 0.5, 0.0, 0.0);
        assert!(a.iou(&a).is_nan());
    }

    #[test]
    fn test_with_center_keeps_extent() {
        let b = BBox::xywh(0.5, 0.5, 0.2, 0.1).with_center(0.1, 0.9);
        assert_eq!(b.as_slice(), &[0.1, 0.9, 0.2, 0.1]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let b = BBox::xywh(0.5, 0.25, 0.125, 0.0625);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[0.5,0.25,0.125,0.0625]");

        let back: BBox<Xywh> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
