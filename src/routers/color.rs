use axum::{extract::Query, http::StatusCode, Json};
use serde::Serialize;

use hex_wallpaper::download::{check, filename};
use super::{ErrOr, HexQuery};

#[derive(Debug, Serialize)]
pub struct ColorResp {
  hex: String,
  rgb: (u8, u8, u8),
  filename: String,
}

/// Preview what `/wallpaper` would produce for the same input.
#[tracing::instrument(name = "color", skip_all, fields(hex))]
pub async fn color(
  Query(query): Query<HexQuery>,
) -> (StatusCode, Json<ErrOr<ColorResp>>) {
  let raw = query.hex.unwrap_or_default();

  tracing::Span::current()
    .record("hex", raw.as_str());

  match check(&raw) {
    Ok((hex, rgb)) => (
      StatusCode::OK,
      Json(ErrOr::Ok(ColorResp {
        hex: rgb.to_string(),
        rgb: (rgb.r, rgb.g, rgb.b),
        filename: filename(&hex),
      }.into())),
    ),
    Err(err) => {
      tracing::warn!("{err}");

      (
        StatusCode::BAD_REQUEST,
        Json(ErrOr::Err(err.to_string().into())),
      )
    }
  }
}
