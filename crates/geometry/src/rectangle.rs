//! An axis-aligned rectangle.
use crate::errors::*;
use crate::*;

/// An axis-aligned rectangle is specified by a corner and a width/height vector.
///
/// Unlike a collision box, a rectangle may have zero width or height: a rectangle built from a tile edge is still
/// something a ray can hit.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rectangle {
    position: Vector,
    /// width-height
    size: Vector,
}

impl Rectangle {
    /// Get a rectangle from a corner and a width/height pair.
    pub fn from_position_size(position: Vector, size: Vector) -> Result<Rectangle, ShapeError> {
        if !position.is_finite() || !size.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if size.x < 0.0 || size.y < 0.0 {
            return Err(ShapeError::InvalidDims);
        }
        Ok(Rectangle { position, size })
    }

    /// The `(x, y, width, height)` form.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Rectangle, ShapeError> {
        Rectangle::from_position_size(Vector::new(x, y), Vector::new(width, height))
    }

    /// Get a rectangle from two opposite corners, in any order.
    pub fn from_points(p1: Vector, p2: Vector) -> Result<Rectangle, ShapeError> {
        // `min` and `max` skip NaN, which would quietly give the wrong rectangle.
        if !p1.is_finite() || !p2.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        Ok(Rectangle::from_points_unchecked(p1, p2))
    }

    pub(crate) fn from_points_unchecked(p1: Vector, p2: Vector) -> Rectangle {
        let position = Vector::new(p1.x.min(p2.x), p1.y.min(p2.y));
        let far = Vector::new(p1.x.max(p2.x), p1.y.max(p2.y));
        Rectangle {
            position,
            size: far - position,
        }
    }

    pub fn get_position(&self) -> Vector {
        self.position
    }

    pub fn get_size(&self) -> Vector {
        self.size
    }

    pub fn get_p1(&self) -> Vector {
        self.position
    }

    pub fn get_p2(&self) -> Vector {
        self.position + self.size
    }

    pub fn get_width(&self) -> f32 {
        self.size.x
    }

    pub fn get_height(&self) -> f32 {
        self.size.y
    }

    pub fn get_center(&self) -> Vector {
        self.position + self.size / 2.0
    }

    #[must_use = "This doesn't mutate the Rectangle in-place"]
    pub fn translate(&self, offset: Vector) -> Rectangle {
        Rectangle {
            position: self.position + offset,
            size: self.size,
        }
    }

    /// get the squared distance to a specific point.
    pub fn distance_to_point_squared(&self, point: &Vector) -> f32 {
        // The closest point on a box to a point is the clamped value of the point itself.
        let p1 = self.get_p1();
        let p2 = self.get_p2();
        let x = point.x.clamp(p1.x, p2.x);
        let y = point.y.clamp(p1.y, p2.y);
        (point.x - x).powi(2) + (point.y - y).powi(2)
    }

    pub fn distance_to_point(&self, point: &Vector) -> f32 {
        self.distance_to_point_squared(point).sqrt()
    }
}
