//! Single-route static page server for the session-replay demo.
//!
//! `GET /` returns the fixed demo document; every other path is resolved
//! against the static asset root or answered with 404. No request state is
//! interpreted and nothing is shared between requests.

use std::{net::SocketAddr, path::Path};

use axum::{response::Html, routing::get, Router};
use tower_http::services::ServeDir;
use tracing::{error, info};

mod config;

use config::load_settings;

const INDEX_HTML: &str = include_str!("../public/index.html");

fn build_router(asset_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .fallback_service(ServeDir::new(asset_dir))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let app = build_router(&settings.asset_dir);

    let addr: SocketAddr = settings.server_bind.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        error!(%addr, %err, "failed to bind listening socket; is the port already in use?");
        err
    })?;
    info!(%addr, asset_dir = %settings.asset_dir.display(), "static page server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
