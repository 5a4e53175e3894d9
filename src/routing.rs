//! Application router configuration.

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, endpoints,
    sale::{get_categories, get_month_summary, get_price_range, get_sales, get_statistics},
};

/// Return a router with all the app's routes.
///
/// The dashboard is served from a different origin than the API, so
/// cross-origin requests are allowed on every route.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(endpoints::SALES, get(get_sales))
        .route(endpoints::STATISTICS, get(get_statistics))
        .route(endpoints::ITEMS, get(get_price_range))
        .route(endpoints::CATEGORIES, get(get_categories))
        .route(endpoints::ALL_STATISTICS, get(get_month_summary))
        .fallback(get_not_found)
        .layer(cors)
        .with_state(state)
}

/// Responds with a JSON 404 body for unknown routes.
async fn get_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource could not be found" })),
    )
}
