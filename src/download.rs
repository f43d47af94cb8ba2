//! Glue between raw user input and a downloadable wallpaper.
//!
//! Input arriving from a text box may lack the leading `#`; it is added
//! before validation and kept in the suggested file name.

use crate::{
  color::{is_valid, parse_hex, RgbColor},
  error::{ColorError, DownloadError},
  wallpaper::render,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
  pub filename: String,
  pub bytes: Vec<u8>,
}

pub fn normalize(raw: &str) -> String {
  if raw.is_empty() || raw.starts_with('#') {
    raw.to_owned()
  } else {
    format!("#{raw}")
  }
}

pub fn filename(hex: &str) -> String {
  format!("{hex}.png")
}

/// Normalize `raw` and resolve it to a color, without rendering.
pub fn check(raw: &str) -> Result<(String, RgbColor), DownloadError> {
  let hex = normalize(raw);

  if hex.is_empty() {
    return Err(DownloadError::Empty);
  }

  if !is_valid(&hex) {
    return Err(ColorError::InvalidColorFormat.into());
  }

  let color = parse_hex(&hex)?;

  Ok((hex, color))
}

pub fn prepare(raw: &str) -> Result<Download, DownloadError> {
  let (hex, color) = check(raw)?;
  let bytes = render(color)?;

  Ok(Download {
    filename: filename(&hex),
    bytes,
  })
}
