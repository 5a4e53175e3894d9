//! Defines the route handler that lists sale records.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    Error,
    month::parse_month,
    pagination::{DEFAULT_PAGE, parse_page},
};

use super::{SaleState, model::Sale, query::list_sales};

/// The month used when the listing is requested without one.
const DEFAULT_MONTH: u8 = 1;

/// The raw query parameters accepted by the sales listing.
///
/// Values arrive as strings so that non-numeric input can be reported as
/// [Error::InvalidParameter] rather than a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// The calendar month (1-12) to filter by.
    month: Option<String>,
    /// Free text matched against title, description and price.
    search_q: Option<String>,
    /// The 1-based page of results to return.
    page: Option<String>,
}

/// Handles requests that list the sale records for a month, filtered by
/// search text and windowed into fixed-size pages.
pub async fn get_sales(
    State(state): State<SaleState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Sale>>, Error> {
    let month = match &params.month {
        Some(raw) => parse_month(raw)?,
        None => DEFAULT_MONTH,
    };
    let page = match &params.page {
        Some(raw) => parse_page(raw)?,
        None => DEFAULT_PAGE,
    };
    let search = params.search_q.as_deref().unwrap_or_default();

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::StoreUnavailable)?;

    let sales = list_sales(month, search, page, &connection)?;

    Ok(Json(sales))
}

#[cfg(test)]
mod get_sales_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::Value;

    use crate::{
        AppState, build_router, endpoints,
        sale::{
            insert_sale,
            test_utils::{build_sale, connection_with_sales},
        },
    };

    fn get_test_server(connection: Connection) -> TestServer {
        let state = AppState::new(connection).expect("Could not initialize database.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn returns_records_for_the_requested_month() {
        let sales = [
            build_sale(1, 3, 50.0, true, "electronics"),
            build_sale(2, 5, 60.0, true, "electronics"),
        ];
        let server = get_test_server(connection_with_sales(&sales));

        let response = server
            .get(endpoints::SALES)
            .add_query_param("month", "3")
            .await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["id"], 1);
    }

    #[tokio::test]
    async fn serializes_the_original_field_names() {
        let sales = [build_sale(1, 3, 50.0, true, "electronics")];
        let server = get_test_server(connection_with_sales(&sales));

        let response = server
            .get(endpoints::SALES)
            .add_query_param("month", "3")
            .await;

        let body: Vec<Value> = response.json();
        let record = body[0].as_object().unwrap();
        for key in [
            "id",
            "title",
            "description",
            "price",
            "category",
            "image",
            "sold",
            "dateOfSale",
        ] {
            assert!(record.contains_key(key), "want key {key} in {record:?}");
        }
    }

    #[tokio::test]
    async fn defaults_to_january_page_one() {
        let sales = [
            build_sale(1, 1, 50.0, true, "electronics"),
            build_sale(2, 3, 60.0, true, "electronics"),
        ];
        let server = get_test_server(connection_with_sales(&sales));

        let response = server.get(endpoints::SALES).await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["id"], 1);
    }

    #[tokio::test]
    async fn second_page_returns_the_remainder() {
        let sales: Vec<_> = (1..=15)
            .map(|id| build_sale(id, 3, id as f64, false, "books"))
            .collect();
        let server = get_test_server(connection_with_sales(&sales));

        let response = server
            .get(endpoints::SALES)
            .add_query_param("month", "3")
            .add_query_param("page", "2")
            .await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        let ids: Vec<i64> = body
            .iter()
            .map(|record| record["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, (11..=15).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn search_narrows_the_listing() {
        let mut wanted = build_sale(1, 3, 50.0, true, "electronics");
        wanted.title = "Walnut chess set".to_string();
        let connection = connection_with_sales(&[build_sale(2, 3, 60.0, true, "electronics")]);
        insert_sale(&wanted, &connection).unwrap();
        let server = get_test_server(connection);

        let response = server
            .get(endpoints::SALES)
            .add_query_param("month", "3")
            .add_query_param("search_q", "chess")
            .await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["title"], "Walnut chess set");
    }

    #[tokio::test]
    async fn non_numeric_month_is_a_bad_request() {
        let server = get_test_server(connection_with_sales(&[]));

        let response = server
            .get(endpoints::SALES)
            .add_query_param("month", "march")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body.get("error").is_some(), "want error body, got {body}");
    }

    #[tokio::test]
    async fn non_numeric_page_is_a_bad_request() {
        let server = get_test_server(connection_with_sales(&[]));

        let response = server
            .get(endpoints::SALES)
            .add_query_param("page", "two")
            .await;

        response.assert_status_bad_request();
    }
}
