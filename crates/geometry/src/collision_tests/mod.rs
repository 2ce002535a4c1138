pub(crate) mod circle_circle;
pub(crate) mod circle_line;
pub(crate) mod circle_segment;

pub use circle_circle::*;
pub use circle_line::*;
pub use circle_segment::*;
