use std::process::ExitCode;

use clap::Parser;

use hex_wallpaper::download::prepare;

#[derive(Parser)]
#[command(name = "save_wallpaper")]
#[command(author = "yurzhang")]
#[command(about = "Save a solid color wallpaper to a PNG file.")]
#[command(version, long_about = None)]
struct Args {
  /// Hex color such as `3498db`, `#3498db` or `#000`
  hex: String,

  /// Defaults to `<hex>.png`
  #[arg(short, long)]
  output: Option<String>,

  #[arg(long, default_value_t = tracing::Level::INFO)]
  log_level: tracing::Level,
}

fn main() -> ExitCode {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(args.log_level)
    .with_writer(std::io::stderr)
    .init();

  let download = match prepare(&args.hex) {
    Ok(download) => download,
    Err(err) => {
      tracing::error!(hex = %args.hex, "{err}");
      return ExitCode::FAILURE;
    }
  };

  let output = args.output.unwrap_or(download.filename);

  if let Err(err) = std::fs::write(&output, &download.bytes) {
    tracing::error!(output = %output, error = %err, "Error saving wallpaper!");
    return ExitCode::FAILURE;
  }

  tracing::info!(output = %output, "Wallpaper saved.");

  ExitCode::SUCCESS
}
