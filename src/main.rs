mod routers;

use std::net::SocketAddr;

use clap::Parser;

use hex_wallpaper::consts::DEFAULT_LISTEN;

#[derive(Parser)]
#[command(name = "hex-wallpaper")]
#[command(author = "yurzhang")]
#[command(about = "Serve solid color wallpapers generated from hex colors.")]
#[command(version, long_about = None)]
struct Args {
  #[arg(short, long, default_value_t = String::from(DEFAULT_LISTEN))]
  listen: String,

  #[arg(long, default_value_t = tracing::Level::INFO)]
  log_level: tracing::Level,
}

#[tokio::main]
async fn main() {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(args.log_level)
    .init();

  let addr: SocketAddr = args.listen.parse()
    .expect("Invalid listen address!");

  let app = routers::app();

  tracing::info!("Listening on {addr}...");

  let res = axum::Server::bind(&addr)
    .serve(app.into_make_service()).await;

  if let Err(err) = res {
    tracing::error!(error = %err, "Server stopped!");
  }
}
