use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{domain, system};

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // BID BOARD ROUTES (protected)
        // ========================================
        .route(
            "/api/bid-notice/list",
            get(domain::b001_bid_notice::handlers::list_notices)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/bid-notice/view/:sn",
            get(domain::b001_bid_notice::handlers::get_notice_detail)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .fallback_service(ServeDir::new("dist"))
}
