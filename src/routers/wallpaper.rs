use axum::{
  extract::Query,
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};

use hex_wallpaper::{download::prepare, error::DownloadError};
use super::{ErrOr, HexQuery};

#[tracing::instrument(name = "wallpaper", skip_all, fields(hex))]
pub async fn wallpaper(Query(query): Query<HexQuery>) -> Response {
  let raw = query.hex.unwrap_or_default();

  tracing::Span::current()
    .record("hex", raw.as_str());

  let res = tokio::task::spawn_blocking(move || prepare(&raw)).await;

  let download = match res {
    Ok(Ok(download)) => download,
    Ok(Err(err)) => {
      let status = match err {
        DownloadError::Empty | DownloadError::InvalidColor(_) => {
          tracing::warn!("{err}");
          StatusCode::BAD_REQUEST
        }
        DownloadError::Encode(ref source) => {
          tracing::error!(error = %source, "Error encoding wallpaper!");
          StatusCode::INTERNAL_SERVER_ERROR
        }
      };

      return (status, Json(ErrOr::<()>::Err(err.to_string().into()))).into_response();
    }
    Err(err) => {
      tracing::error!(error = %err, "Wallpaper task failed!");

      return (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrOr::<()>::Err("Error generating wallpaper!".into())),
      ).into_response();
    }
  };

  tracing::info!(
    filename = %download.filename,
    size = download.bytes.len(),
    "Wallpaper generated.",
  );

  let disposition = format!("attachment; filename=\"{}\"", download.filename);

  (
    StatusCode::OK,
    [
      (header::CONTENT_TYPE, "image/png".to_owned()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    download.bytes,
  ).into_response()
}
