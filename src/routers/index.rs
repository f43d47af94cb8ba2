use axum::response::Html;

use hex_wallpaper::consts::{MAX_INPUT_CHARS, PLACEHOLDER_HEX};

pub async fn index() -> Html<String> {
  Html(format!(
    r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Hex Wallpaper Generator</title></head>
<body>
<h1>Background generator</h1>
<form action="/wallpaper" method="get">
<input name="hex" aria-label="Hex color" placeholder="{PLACEHOLDER_HEX}" maxlength="{MAX_INPUT_CHARS}" required>
<button type="submit">Download</button>
</form>
</body>
</html>
"#
  ))
}
