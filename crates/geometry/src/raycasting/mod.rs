use crate::*;

pub(crate) mod ray_rectangle;

pub use ray_rectangle::*;

/// The result of a ray hitting a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Where did the ray hit the other shape?
    pub point: Vector,
    /// Which face was hit, pointing back toward the ray's origin.  Zero if the ray went exactly through a corner.
    pub normal: Vector,
    /// The `t` at which the ray enters the shape.  Negative if the ray started inside, or past, the shape.
    pub time_near: f32,
    /// The `t` at which the ray leaves the shape.
    pub time_far: f32,
}

impl Contact {
    /// All zeros, for callers who want a value rather than an `Option` when nothing was hit.
    pub const NONE: Contact = Contact {
        point: Vector::new(0.0, 0.0),
        normal: Vector::new(0.0, 0.0),
        time_near: 0.0,
        time_far: 0.0,
    };
}

/// Knobs for a raycast.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RaycastOptions {
    /// Treat the ray as an infinite line, so that shapes behind the origin are also hit.
    pub infinite: bool,
}

impl RaycastOptions {
    pub const FINITE: RaycastOptions = RaycastOptions { infinite: false };
    pub const INFINITE: RaycastOptions = RaycastOptions { infinite: true };
}
