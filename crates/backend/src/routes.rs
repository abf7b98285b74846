use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::config::Config;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Configure every route of the application.
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = state.config.static_dir();
    tracing::info!("Serving frontend from {}", static_dir.display());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 FINANCIAL OVERVIEW
        // ========================================
        .route(
            "/api/d400/financial_overview",
            get(handlers::d400_financial_overview::get_financial_overview),
        )
        .route(
            "/api/d400/indicators/meta",
            get(handlers::d400_financial_overview::get_indicator_catalog),
        )
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
