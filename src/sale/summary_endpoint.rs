//! Defines the combined statistics endpoint that backs the dashboard's
//! initial view.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    month::{month_name, parse_month},
};

use super::{
    SaleState,
    query::{
        CategoryCount, MonthlyStatistics, PriceHistogram, category_breakdown, monthly_statistics,
        price_histogram,
    },
};

/// The month used when the combined view is requested without one.
///
/// This deliberately differs from the other endpoints (which default to 1):
/// the dashboard renders its initial view from this endpoint and expects
/// March.
const DEFAULT_MONTH: u8 = 3;

/// The raw query parameters accepted by the combined endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    /// The calendar month (1-12) to aggregate.
    month: Option<String>,
}

/// The combined statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// The English name of the month the summary covers.
    #[serde(rename = "monthName")]
    pub month_name: String,
    /// The sales totals for the month.
    pub statistics: MonthlyStatistics,
    /// The per-price-range item counts for the month.
    #[serde(rename = "itemPriceRange")]
    pub item_price_range: PriceHistogram,
    /// The per-category item counts for the month.
    pub categories: Vec<CategoryCount>,
}

/// Handles requests for the combined monthly view: sales totals, price
/// histogram and category counts merged under the month's name.
///
/// The merge is all-or-nothing: the first sub-fetch that fails aborts the
/// composition and its error is surfaced, so a partial summary is never
/// returned.
pub async fn get_month_summary(
    State(state): State<SaleState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<MonthSummary>, Error> {
    let month = match &params.month {
        Some(raw) => parse_month(raw)?,
        None => DEFAULT_MONTH,
    };

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::StoreUnavailable)?;

    let statistics = monthly_statistics(month, &connection)
        .map_err(|error| upstream_failure("statistics", error))?;
    let item_price_range = price_histogram(month, &connection)
        .map_err(|error| upstream_failure("price range", error))?;
    let categories = category_breakdown(month, &connection)
        .map_err(|error| upstream_failure("categories", error))?;

    Ok(Json(MonthSummary {
        month_name: month_name(month).to_string(),
        statistics,
        item_price_range,
        categories,
    }))
}

fn upstream_failure(operation: &'static str, source: Error) -> Error {
    Error::UpstreamFailure {
        operation,
        source: Box::new(source),
    }
}

#[cfg(test)]
mod get_month_summary_tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        AppState, build_router, endpoints,
        sale::test_utils::{build_sale, connection_with_sales},
    };

    fn get_test_state(sales: &[crate::Sale]) -> AppState {
        AppState::new(connection_with_sales(sales)).expect("Could not initialize database.")
    }

    fn get_test_server(state: AppState) -> TestServer {
        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn merges_the_three_aggregates_under_the_month_name() {
        let sales = [
            build_sale(1, 3, 150.0, true, "electronics"),
            build_sale(2, 3, 40.0, false, "clothing"),
        ];
        let server = get_test_server(get_test_state(&sales));

        let response = server
            .get(endpoints::ALL_STATISTICS)
            .add_query_param("month", "3")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["monthName"], "March");
        assert_eq!(body["statistics"]["sales"], 150.0);
        assert_eq!(body["statistics"]["soldItems"], 1);
        assert_eq!(body["statistics"]["unSoldItems"], 1);
        assert_eq!(body["itemPriceRange"]["101-200"], 1);
        assert_eq!(body["categories"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn defaults_to_march() {
        let server = get_test_server(get_test_state(&[]));

        let response = server.get(endpoints::ALL_STATISTICS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["monthName"], "March");
    }

    #[tokio::test]
    async fn non_numeric_month_is_a_bad_request() {
        let server = get_test_server(get_test_state(&[]));

        let response = server
            .get(endpoints::ALL_STATISTICS)
            .add_query_param("month", "!")
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn fails_as_a_unit_when_a_sub_fetch_fails() {
        let state = get_test_state(&[build_sale(1, 3, 50.0, true, "books")]);
        // Make every query against the store fail.
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE sale", ())
            .unwrap();
        let server = get_test_server(state);

        let response = server.get(endpoints::ALL_STATISTICS).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body.get("error").is_some(), "want error body, got {body}");
        // No partial aggregation may leak out alongside the error.
        for key in ["monthName", "statistics", "itemPriceRange", "categories"] {
            assert!(
                body.get(key).is_none(),
                "want no partial {key} field, got {body}"
            );
        }
    }

    #[tokio::test]
    async fn surfaces_the_first_failed_operation() {
        let state = get_test_state(&[]);
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE sale", ())
            .unwrap();
        let server = get_test_server(state);

        let response = server.get(endpoints::ALL_STATISTICS).await;

        let body: Value = response.json();
        let message = body["error"].as_str().unwrap();
        assert!(
            message.contains("statistics"),
            "want the first failed sub-fetch in the message, got {message:?}"
        );
    }
}
