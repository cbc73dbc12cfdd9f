pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use answer_core::{Transliterator, WanaKana};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub transliterator: Arc<dyn Transliterator>,
}

impl AppState {
    pub fn new(transliterator: Arc<dyn Transliterator>) -> Self {
        Self { transliterator }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(WanaKana))
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/review/advise", post(routes::review::advise))
        .route("/api/review/grade", post(routes::review::grade))
        .route("/api/review/typo", post(routes::review::typo))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_router(AppState::default());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
