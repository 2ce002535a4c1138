use crate::errors::*;
use crate::*;

/// A ray with no length.  Points on it are `origin + direction * t`, for `t >= 0`.
///
/// The direction need not be normalized, in which case `t` is measured in multiples of it.  Components of the direction
/// may be zero.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: Vector,
    pub(crate) direction: Vector,
}

impl Ray {
    pub fn new(origin: Vector, direction: Vector) -> Result<Ray, RayError> {
        if !origin.is_finite() || !direction.is_finite() {
            return Err(RayError::NonFinite);
        }
        if direction == Vector::zero() {
            return Err(RayError::ZeroDirection);
        }
        Ok(Ray { origin, direction })
    }

    pub fn new_unchecked(origin: Vector, direction: Vector) -> Ray {
        debug_assert!(
            direction != Vector::zero(),
            "Ray direction must not be the zero vector"
        );
        Ray { origin, direction }
    }

    /// Build a unit-direction ray pointing at angle `theta`, in radians.
    pub fn from_angle(origin: Vector, theta: f32) -> Result<Ray, RayError> {
        Ray::new(origin, Vector::new(theta.cos(), theta.sin()))
    }

    /// Build a ray from a source point toward a target point.
    ///
    /// The direction is `target - source` without normalization, so the target is at `t = 1`.
    pub fn from_points(source: Vector, target: Vector) -> Result<Ray, RayError> {
        Ray::new(source, target - source)
    }

    pub fn get_origin(&self) -> Vector {
        self.origin
    }

    pub fn get_direction(&self) -> Vector {
        self.direction
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f32) -> Vector {
        self.origin + self.direction * t
    }

    #[must_use = "This doesn't mutate the Ray in-place"]
    pub fn translate(&self, offset: Vector) -> Ray {
        Ray {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }
}
