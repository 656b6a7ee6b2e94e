pub mod geometry;
pub mod pattern;

pub use geometry::ScreenTransform;
pub use pattern::{Segment, StarPattern};
