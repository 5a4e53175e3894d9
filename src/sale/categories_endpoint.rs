//! Defines the route handler for the monthly per-category item counts.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{Error, month::parse_month};

use super::{
    SaleState,
    query::{CategoryCount, category_breakdown},
};

/// The month used when the breakdown is requested without one.
const DEFAULT_MONTH: u8 = 1;

/// The raw query parameters accepted by the categories endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesParams {
    /// The calendar month (1-12) to aggregate.
    month: Option<String>,
}

/// Handles requests for the item count of each category in one month.
pub async fn get_categories(
    State(state): State<SaleState>,
    Query(params): Query<CategoriesParams>,
) -> Result<Json<Vec<CategoryCount>>, Error> {
    let month = match &params.month {
        Some(raw) => parse_month(raw)?,
        None => DEFAULT_MONTH,
    };

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::StoreUnavailable)?;

    let categories = category_breakdown(month, &connection)?;

    Ok(Json(categories))
}
