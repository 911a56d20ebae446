pub mod convert;
pub mod model;
pub mod parse;

pub use convert::{hsl_from_rgb, rgb_from_hsl};
pub use model::{ColorMode, ColorValue, Hsl};
pub use parse::{ColorParseError, parse_color};
