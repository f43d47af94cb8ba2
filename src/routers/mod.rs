mod color;
mod index;
mod wallpaper;

pub use color::color;
pub use index::index;
pub use wallpaper::wallpaper;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

pub fn app() -> Router {
  Router::new()
    .route("/", get(index))
    .route("/color", get(color))
    .route("/wallpaper", get(wallpaper))
}

#[derive(Deserialize)]
pub struct HexQuery {
  hex: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Resp<T> {
  code: i32,
  data: T,
}

impl<T> From<T> for Resp<T> {
  fn from(data: T) -> Self {
    Resp { code: 0, data }
  }
}

#[derive(Debug, Serialize)]
pub struct ErrResp {
  msg: String,
}

impl From<&str> for ErrResp {
  fn from(msg: &str) -> Self {
    ErrResp { msg: msg.to_owned() }
  }
}

impl From<String> for ErrResp {
  fn from(msg: String) -> Self {
    ErrResp { msg }
  }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrOr<T> {
  Err(ErrResp),
  Ok(Resp<T>),
}
