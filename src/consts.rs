// Phone wallpaper, portrait
pub const WIDTH: u32 = 1080;
pub const HEIGHT: u32 = 1920;

// `#` + six digits
pub const MAX_INPUT_CHARS: usize = 7;

pub const PLACEHOLDER_HEX: &str = "#3498db";

pub const DEFAULT_LISTEN: &str = "127.0.0.1:2895";
