#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("Attempted to create a circle with a negative radius")]
    NegativeRadius,

    #[error("Attempted to create a segment or line whose endpoints are the same point")]
    DegenerateSegment,

    #[error("Attempted to create a rectangle which would have a negative width or height")]
    InvalidDims,

    #[error("Shapes must be built from finite coordinates")]
    NonFinite,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RayError {
    #[error("A ray's direction may not be the zero vector")]
    ZeroDirection,

    #[error("A ray must have a finite origin and direction")]
    NonFinite,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Shape error: {}", _0)]
    Shape(#[from] ShapeError),

    #[error("Ray error: {}", _0)]
    Ray(#[from] RayError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
