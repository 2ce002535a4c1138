//! Line segments, and the unbounded lines through them.
use crate::errors::*;
use crate::*;

fn check_endpoints(a: &Vector, b: &Vector) -> Result<(), ShapeError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(ShapeError::NonFinite);
    }
    if a == b {
        return Err(ShapeError::DegenerateSegment);
    }
    Ok(())
}

/// The segment between `a` and `b`, inclusive of both endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub(crate) a: Vector,
    pub(crate) b: Vector,
}

impl Segment {
    pub fn new(a: Vector, b: Vector) -> Result<Segment, ShapeError> {
        check_endpoints(&a, &b)?;
        Ok(Segment { a, b })
    }

    pub fn new_unchecked(a: Vector, b: Vector) -> Segment {
        debug_assert!(a != b, "Segments must have two distinct endpoints");
        Segment { a, b }
    }

    pub fn get_a(&self) -> Vector {
        self.a
    }

    pub fn get_b(&self) -> Vector {
        self.b
    }

    /// `b - a`, not normalized.
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }

    pub fn length(&self) -> f32 {
        self.a.distance(&self.b)
    }
}

/// An unbounded line, passing through `p1` and `p2`.
///
/// The points also fix a parameterization: `p1` is at `t = 0` and `p2` at `t = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub(crate) p1: Vector,
    pub(crate) p2: Vector,
}

impl Line {
    pub fn new(p1: Vector, p2: Vector) -> Result<Line, ShapeError> {
        check_endpoints(&p1, &p2)?;
        Ok(Line { p1, p2 })
    }

    pub fn from_xy(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Line, ShapeError> {
        Line::new(Vector::new(x1, y1), Vector::new(x2, y2))
    }

    pub fn get_p1(&self) -> Vector {
        self.p1
    }

    pub fn get_p2(&self) -> Vector {
        self.p2
    }

    /// Evaluate the line at a given `t`.
    pub fn evaluate(&self, t: f32) -> Vector {
        self.p1 + (self.p2 - self.p1) * t
    }
}

/// Extend a segment to the line it lies on.
impl From<Segment> for Line {
    fn from(other: Segment) -> Line {
        Line {
            p1: other.a,
            p2: other.b,
        }
    }
}
