pub mod color;
pub mod consts;
pub mod download;
pub mod error;
pub mod wallpaper;

pub use color::{is_valid, parse_hex, to_rgb, RgbColor};
pub use wallpaper::render;
