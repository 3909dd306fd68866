use axum::http::Method;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use contracts::shared::navigation::{MATERIALS_ROUTE, REPORT_ROUTE, SUPPLIERS_ROUTE};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::request_log::request_logger;

/// Client-side routes answered with the application bundle
const SPA_ROUTES: [&str; 4] = ["/", SUPPLIERS_ROUTE, MATERIALS_ROUTE, REPORT_ROUTE];

/// Router serving the built frontend from `static_dir`.
///
/// Unknown paths also fall back to `index.html` so the client router can
/// render its not-found page.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    let router = SPA_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route_service(route, ServeFile::new(&index))
        });

    router
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(&index)))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
