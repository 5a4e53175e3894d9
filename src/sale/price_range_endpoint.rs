//! Defines the route handler for the monthly price-range histogram.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{Error, month::parse_month};

use super::{
    SaleState,
    query::{PriceHistogram, price_histogram},
};

/// The raw query parameters accepted by the histogram endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PriceRangeParams {
    /// The calendar month (1-12) to aggregate. Unlike the other endpoints
    /// this one has no default month.
    month: Option<String>,
}

/// Handles requests for the per-price-range item counts of one month.
pub async fn get_price_range(
    State(state): State<SaleState>,
    Query(params): Query<PriceRangeParams>,
) -> Result<Json<PriceHistogram>, Error> {
    let month = match &params.month {
        Some(raw) => parse_month(raw)?,
        None => {
            return Err(Error::InvalidParameter(
                "month is required".to_string(),
            ));
        }
    };

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::StoreUnavailable)?;

    let histogram = price_histogram(month, &connection)?;

    Ok(Json(histogram))
}
