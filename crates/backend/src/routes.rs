use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::system::{self, state::AppState};

/// Конфигурация всех роутов приложения
///
/// Everything that is not an API route is served from the built SPA directory;
/// unknown paths fall back to `index.html` so client-side sections still load.
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PUBLIC
        // ========================================
        .route(
            "/api/site/config",
            get(system::handlers::site_config::get_site_config),
        )
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        // ========================================
        // ADMIN ONLY
        // ========================================
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_admin).layer(middleware::from_fn_with_state(
                state.clone(),
                system::auth::middleware::require_admin,
            )),
        )
        .fallback_service(spa)
        .layer(cors)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .with_state(state)
}
