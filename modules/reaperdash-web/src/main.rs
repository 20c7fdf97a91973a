use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fbreaper_client::FbReaperClient;
use reaperdash_common::Config;

mod components;
mod pages;
mod sample;
mod templates;

pub struct AppState {
    pub client: FbReaperClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("reaperdash_web=info".parse()?))
        .init();

    let config = Config::from_env();

    // Runtime override wins over the configured base URL, which in turn
    // wins over the hardcoded local default.
    let api_url = std::env::var("FBREAPER_API_URL_OVERRIDE")
        .unwrap_or_else(|_| config.api_base_url.clone());

    let state = Arc::new(AppState {
        client: FbReaperClient::new(api_url),
    });

    let app = Router::new()
        .route("/", get(|| async { Redirect::to("/search") }))
        .route("/search", get(pages::search_page))
        .route("/status", get(pages::status_page))
        .route("/data", get(pages::data_page))
        .route("/network", get(pages::network_page))
        .with_state(state.clone())
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // The dashboard always renders live data; never cache.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!(addr = %addr, backend = %state.client.base_url(), "Dashboard listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
