use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, ImageResult, RgbImage};

use crate::{
  color::RgbColor,
  consts::{HEIGHT, WIDTH},
};

pub fn canvas(color: RgbColor) -> RgbImage {
  RgbImage::from_pixel(WIDTH, HEIGHT, color.into())
}

/// Encode a `WIDTH`×`HEIGHT` canvas of `color` as PNG.
///
/// The encoder writes no time chunk, so equal colors give equal bytes.
pub fn render(color: RgbColor) -> ImageResult<Vec<u8>> {
  let imgbuf = canvas(color);
  let mut bytes = Vec::new();

  PngEncoder::new(&mut bytes)
    .write_image(imgbuf.as_raw(), imgbuf.width(), imgbuf.height(), ColorType::Rgb8)?;

  Ok(bytes)
}
