//! Route table.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, SharedCatalog};

/// Builds the axum router over a shared catalog.
pub fn build_router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/api/v1/product", get(handlers::product_by_code))
        .route("/api/v1/search", get(handlers::search_by_name))
        .route("/api/v1/search/gtin", get(handlers::search_by_code))
        .route("/api/v1/stats", get(handlers::statistics))
        .route(
            "/api/v1/unitbox/product",
            get(handlers::unitbox_product_by_code),
        )
        .route(
            "/api/v1/unitbox/search",
            get(handlers::unitbox_search_by_name),
        )
        .route(
            "/api/v1/unitbox/simplified",
            get(handlers::simplified_search),
        )
        .route(
            "/api/v1/unitbox/simplified/all",
            get(handlers::simplified_all),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
