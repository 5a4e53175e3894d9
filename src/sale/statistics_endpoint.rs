//! Defines the route handler for the monthly sales totals.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{Error, month::parse_month};

use super::{
    SaleState,
    query::{MonthlyStatistics, monthly_statistics},
};

/// The month used when the totals are requested without one.
const DEFAULT_MONTH: u8 = 1;

/// The raw query parameters accepted by the statistics endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsParams {
    /// The calendar month (1-12) to aggregate.
    month: Option<String>,
}

/// Handles requests for the sales totals of one month: the summed price over
/// sold items plus the sold and unsold item counts.
pub async fn get_statistics(
    State(state): State<SaleState>,
    Query(params): Query<StatisticsParams>,
) -> Result<Json<MonthlyStatistics>, Error> {
    let month = match &params.month {
        Some(raw) => parse_month(raw)?,
        None => DEFAULT_MONTH,
    };

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::StoreUnavailable)?;

    let statistics = monthly_statistics(month, &connection)?;

    Ok(Json(statistics))
}
