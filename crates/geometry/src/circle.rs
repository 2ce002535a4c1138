//! A simple circle.
use crate::errors::*;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: f32,
}

impl Circle {
    pub fn new(center: Vector, radius: f32) -> Result<Circle, ShapeError> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius);
        }
        Ok(Circle { center, radius })
    }

    /// Build a circle without validating it.  A negative radius gives meaningless results from every test.
    pub fn new_unchecked(center: Vector, radius: f32) -> Circle {
        debug_assert!(radius >= 0.0, "Radius must not be negative");
        Circle { center, radius }
    }

    pub fn from_xy(x: f32, y: f32, radius: f32) -> Result<Circle, ShapeError> {
        Circle::new(Vector::new(x, y), radius)
    }

    pub fn get_center(&self) -> &Vector {
        &self.center
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    pub fn get_bounding_box(&self) -> Rectangle {
        let p1 = Vector::new(self.center.x - self.radius, self.center.y - self.radius);
        let p2 = Vector::new(self.center.x + self.radius, self.center.y + self.radius);
        Rectangle::from_points_unchecked(p1, p2)
    }

    /// Move the circle to a new position.
    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn move_circle(&self, new_center: &Vector) -> Circle {
        Circle {
            center: *new_center,
            radius: self.radius,
        }
    }
}
