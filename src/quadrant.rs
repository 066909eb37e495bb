use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Xywh};

/// Direction of the head center relative to the club anchor center.
///
/// The y axis points up, so `Q0` is right of and above the anchor center and
/// the numbering goes counter-clockwise.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Q0,
    Q1,
    #[default]
    Q2,
    Q3,
}

impl Quadrant {
    /// `None` when the head lies exactly on one of the anchor center axes.
    pub fn locate(head: &BBox<Xywh>, anchor: &BBox<Xywh>) -> Option<Self> {
        let (right, left) = (head.cx() > anchor.cx(), head.cx() < anchor.cx());
        let (above, below) = (head.cy() > anchor.cy(), head.cy() < anchor.cy());

        match (right, left, above, below) {
            (true, _, true, _) => Some(Quadrant::Q0),
            (_, true, true, _) => Some(Quadrant::Q1),
            (_, true, _, true) => Some(Quadrant::Q2),
            (true, _, _, true) => Some(Quadrant::Q3),
            _ => None,
        }
    }

    #[inline]
    fn signs(self) -> (f32, f32) {
        match self {
            Quadrant::Q0 => (1.0, 1.0),
            Quadrant::Q1 => (-1.0, 1.0),
            Quadrant::Q2 => (-1.0, -1.0),
            Quadrant::Q3 => (1.0, -1.0),
        }
    }

    /// Places a box of `head`'s size inside `anchor`, pushed into this quadrant's corner.
    pub fn place(self, anchor: &BBox<Xywh>, head: &BBox<Xywh>) -> BBox<Xywh> {
        let (sx, sy) = self.signs();

        head.with_center(
            anchor.cx() + sx * 0.5 * (anchor.width() - head.width()),
            anchor.cy() + sy * 0.5 * (anchor.height() - head.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn anchor() -> BBox<Xywh> {
        BBox::xywh(0.5, 0.5, 0.2, 0.1)
    }

    #[rstest]
    #[case(0.58, 0.53, Some(Quadrant::Q0))]
    #[case(0.42, 0.53, Some(Quadrant::Q1))]
    #[case(0.42, 0.47, Some(Quadrant::Q2))]
    #[case(0.58, 0.47, Some(Quadrant::Q3))]
    #[case::on_vertical_axis(0.5, 0.53, None)]
    #[case::on_horizontal_axis(0.58, 0.5, None)]
    #[case::at_center(0.5, 0.5, None)]
    fn test_locate(#[case] cx: f32, #[case] cy: f32, #[case] expected: Option<Quadrant>) {
        let head = BBox::xywh(cx, cy, 0.05, 0.05);
        assert_eq!(Quadrant::locate(&head, &anchor()), expected);
    }

    #[test]
    fn test_place_q0() {
        let head = BBox::xywh(0.58, 0.53, 0.05, 0.05);
        let anchor = BBox::xywh(0.52, 0.5, 0.2, 0.1);

        let placed = Quadrant::Q0.place(&anchor, &head);
        assert_relative_eq!(placed.cx(), 0.595, epsilon = 1e-6);
        assert_relative_eq!(placed.cy(), 0.525, epsilon = 1e-6);
        assert_eq!(placed.width(), head.width());
        assert_eq!(placed.height(), head.height());
    }

    #[rstest]
    #[case(Quadrant::Q0)]
    #[case(Quadrant::Q1)]
    #[case(Quadrant::Q2)]
    #[case(Quadrant::Q3)]
    fn test_place_keeps_direction(#[case] q: Quadrant) {
        let head = BBox::xywh(0.3, 0.3, 0.04, 0.03);
        let moved = BBox::xywh(0.7, 0.2, 0.3, 0.2);

        let placed = q.place(&moved, &head);
        assert_eq!(Quadrant::locate(&placed, &moved), Some(q));
    }

    #[test]
    fn test_default_is_q2() {
        assert_eq!(Quadrant::default(), Quadrant::Q2);
    }
}
