pub mod box_style;
pub mod dimension;
pub mod font;
pub mod palette;
pub mod parsers;

pub use box_style::{BoxStyle, TextOrientation};
pub use dimension::{Length, Orientation, PageSetup, PageSize};
pub use font::FontWeight;
pub use palette::{Palette, Tone};
pub use parsers::StyleParseError;
