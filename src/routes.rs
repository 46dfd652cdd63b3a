use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let frontend_dir = Path::new(&state.config.frontend_dir);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/check_text", post(handlers::check_text))
        .route("/ask_safety", post(handlers::ask_safety))
        .route("/check_image", post(handlers::check_image))
        // Static front-end
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
}

/// The complete application: routes, permissive CORS, request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
