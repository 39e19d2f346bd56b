use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOGS
        // ========================================
        .route(
            "/api/housing",
            get(handlers::a001_housing_facility::list_all),
        )
        .route(
            "/api/housing/:id",
            get(handlers::a001_housing_facility::get_by_id),
        )
        .route(
            "/api/care_homes",
            get(handlers::a002_care_home::list_all),
        )
        // ========================================
        // DONATIONS
        // ========================================
        .route(
            "/api/donations",
            post(handlers::a003_donation::submit),
        )
        .route(
            "/api/donations/recent",
            get(handlers::a003_donation::recent),
        )
        .route(
            "/api/donations/monthly",
            get(handlers::a003_donation::monthly),
        )
        // ========================================
        // JOBS PROFILE
        // ========================================
        .route(
            "/api/disability_profile",
            post(handlers::a004_disability_profile::create),
        )
        .route(
            "/api/disability_profile/:id",
            get(handlers::a004_disability_profile::get_by_id),
        )
}
