pub mod length;
pub mod options;
pub mod parsers;

pub use length::{Length, LengthUnit};
pub use options::{Align, CaptionPlacement, ListStyle, class_option};
pub use parsers::StyleParseError;
