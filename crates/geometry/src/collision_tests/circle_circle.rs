//! Test collision between two circles.
use crate::*;

/// Do the two circles overlap?  Circles which touch at a single point count.
pub fn circle_circle_test(c1: &Circle, c2: &Circle) -> bool {
    circle_point_radius_test(c1, c2.get_center(), c2.get_radius())
}

/// Like [circle_circle_test], for a second circle that isn't built yet.
pub fn circle_point_radius_test(circle: &Circle, center: &Vector, radius: f32) -> bool {
    // Avoid square root, which is generally very slow.
    let dist_squared = circle.get_center().distance_squared(center);
    let touching_dist_squared = (circle.get_radius() + radius).powi(2);
    dist_squared <= touching_dist_squared
}

impl Circle {
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        circle_circle_test(self, other)
    }

    pub fn intersects_point_radius(&self, center: &Vector, radius: f32) -> bool {
        circle_point_radius_test(self, center, radius)
    }

    pub fn intersects_xy(&self, x: f32, y: f32, radius: f32) -> bool {
        circle_point_radius_test(self, &Vector::new(x, y), radius)
    }
}
