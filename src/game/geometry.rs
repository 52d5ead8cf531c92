//! Axis-aligned bounding boxes
//!
//! Every entity the ball can touch exposes its box through [`Rectangle`],
//! so one overlap test covers ball/block, ball/paddle and anything else.

/// Anything with an axis-aligned box. `(left, top)` is the top-left corner.
pub trait Rectangle {
    fn left(&self) -> f32;
    fn top(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn center_x(&self) -> f32 {
        self.left() + self.width() / 2.0
    }

    fn center_y(&self) -> f32 {
        self.top() + self.height() / 2.0
    }
}

/// Bare rectangle value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

impl Rectangle for Aabb {
    fn left(&self) -> f32 {
        self.x
    }
    fn top(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
}

/// True when the two boxes intersect. Boxes that only share an edge do not.
///
/// Sizes must be non-negative.
pub fn overlaps(a: &impl Rectangle, b: &impl Rectangle) -> bool {
    let half_widths = a.width() / 2.0 + b.width() / 2.0;
    let half_heights = a.height() / 2.0 + b.height() / 2.0;
    let dx = a.center_x() - b.center_x();
    let dy = a.center_y() - b.center_y();

    dx.abs() < half_widths && dy.abs() < half_heights
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_separated_on_one_axis() {
        // Same column, far apart vertically
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(2.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
    }

    proptest! {
        #[test]
        fn overlaps_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            aw in 0.0f32..300.0, ah in 0.0f32..300.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            bw in 0.0f32..300.0, bh in 0.0f32..300.0
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
