pub mod color;
pub mod geometry;
pub mod ids;
pub mod units;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use ids::SectionId;
pub use units::{inch, mm, POINTS_PER_INCH, POINTS_PER_MM};
