use crate::rigid_body::Point;

/// Axis-aligned bounding box of a polygon.
///
/// Screen coordinates: `min.y` is the top edge, `max.y` the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn left(&self) -> f64 { self.min.x }
    pub fn right(&self) -> f64 { self.max.x }
    pub fn top(&self) -> f64 { self.min.y }
    pub fn bottom(&self) -> f64 { self.max.y }
    pub fn width(&self) -> f64 { self.max.x - self.min.x }
    pub fn height(&self) -> f64 { self.max.y - self.min.y }
}

/// Min/max over all vertex coordinates. Empty input gives a zero box.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some((&first, rest)) = points.split_first() else {
        return BoundingBox::default();
    };
    let mut min = first;
    let mut max = first;
    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    BoundingBox { min, max }
}

/// Broad-phase overlap test.
///
/// Boxes that only share an edge do not overlap; the narrow phase decides
/// exact contact for pairs that get past this.
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.right() <= b.left()
        || b.right() <= a.left()
        || a.bottom() <= b.top()
        || b.bottom() <= a.top())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
        vec![Point::new(x0, y0), Point::new(x1, y0), Point::new(x1, y1), Point::new(x0, y1)]
    }

    #[test]
    fn box_of_rotated_diamond() {
        let diamond = [Point::new(0.0, -2.0), Point::new(3.0, 0.0), Point::new(0.0, 2.0), Point::new(-1.0, 0.0)];
        let bb = bounding_box(&diamond);
        assert_eq!(bb.min, Point::new(-1.0, -2.0));
        assert_eq!(bb.max, Point::new(3.0, 2.0));
        assert_eq!((bb.width(), bb.height()), (4.0, 4.0));
    }

    #[test]
    fn overlapping_and_disjoint() {
        let a = bounding_box(&square(0.0, 0.0, 1.0, 1.0));
        let b = bounding_box(&square(0.5, 0.5, 1.5, 1.5));
        let c = bounding_box(&square(2.0, 2.0, 3.0, 3.0));
        assert!(boxes_overlap(&a, &b));
        assert!(boxes_overlap(&b, &a));
        assert!(!boxes_overlap(&a, &c));
    }

    #[test]
    fn shared_edge_is_not_overlap() {
        let a = bounding_box(&square(0.0, 0.0, 1.0, 1.0));
        let right = bounding_box(&square(1.0, 0.0, 2.0, 1.0));
        let below = bounding_box(&square(0.0, 1.0, 1.0, 2.0));
        assert!(!boxes_overlap(&a, &right));
        assert!(!boxes_overlap(&a, &below));
    }
}
