use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::config::ALLOWED_ORIGIN;

pub mod health;
pub mod tournaments;

/// Assemble every route over the given pool
pub fn router(pool: SqlitePool) -> Router {
    // Cross-origin access is limited to the web client
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([HeaderValue::from_static(ALLOWED_ORIGIN)]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Tournament API - v1.0" }))
        .route("/health", get(health::health_check))

        // Tournament endpoints
        .route(
            "/api/tournaments",
            get(tournaments::get_tournaments).post(tournaments::create_tournament),
        )
        .route("/api/tournaments/{id}", get(tournaments::get_tournament_by_id))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
