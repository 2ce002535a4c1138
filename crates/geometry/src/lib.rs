//! Intersection tests between 2D primitives: circles, segments, lines, rays, and axis-aligned rectangles.
//!
//! Everything here is a pure function of its inputs.  Shapes are validated when they are built, and the tests
//! themselves never fail: a miss is `false` or `None`.
mod circle;
mod collision_tests;
mod errors;
mod ray;
mod raycasting;
mod rectangle;
mod segment;
mod v2;

pub use circle::*;
pub use collision_tests::*;
pub use errors::*;
pub use ray::*;
pub use raycasting::*;
pub use rectangle::*;
pub use segment::*;
pub use v2::*;
