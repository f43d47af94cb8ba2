#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
  #[error("Please enter a valid hex color (e.g., #000 or #000000)")]
  InvalidColorFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
  #[error("Please enter a hex color")]
  Empty,

  #[error(transparent)]
  InvalidColor(#[from] ColorError),

  #[error("Error encoding wallpaper!")]
  Encode(#[from] image::ImageError),
}
