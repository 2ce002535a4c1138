//! Test a circle against a bounded line segment.
use crate::*;

/// The point of the segment closest to `point`.
pub(crate) fn closest_point_on_segment(segment: &Segment, point: &Vector) -> Vector {
    let ac = *point - segment.a;
    let ab = segment.b - segment.a;

    // Foot of the perpendicular from the point onto the segment's line.
    let d = ac.project(&ab) + segment.a;
    let ad = d - segment.a;

    // Solve `ad = k * ab` on whichever axis ab is longer in, so we never divide by a component near zero.
    let k = if ab.x.abs() > ab.y.abs() {
        ad.x / ab.x
    } else {
        ad.y / ab.y
    };

    if k <= 0.0 {
        segment.a
    } else if k >= 1.0 {
        segment.b
    } else {
        d
    }
}

/// Does the segment pass within the circle's radius of its center?
pub fn circle_segment_test(circle: &Circle, segment: &Segment) -> bool {
    let closest = closest_point_on_segment(segment, circle.get_center());
    closest.distance_squared(circle.get_center()) <= circle.get_radius().powi(2)
}

impl Circle {
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        circle_segment_test(self, segment)
    }

    /// The same as [Circle::intersects_segment], for a segment given by its endpoints.  Returns `false` if the two
    /// points are the same.
    pub fn intersects_segment_xy(&self, a: Vector, b: Vector) -> bool {
        Segment::new(a, b)
            .map(|segment| circle_segment_test(self, &segment))
            .unwrap_or(false)
    }
}
