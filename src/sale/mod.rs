//! Sale records and the read operations over them.
//!
//! Each HTTP endpoint lives in its own file alongside the handler state it
//! needs; the SQL the endpoints run lives in [query]. The store is never
//! written by the running server; [insert_sale] exists for the seeding
//! utility and for tests.

mod categories_endpoint;
mod list_endpoint;
mod model;
mod price_range_endpoint;
mod query;
mod statistics_endpoint;
mod summary_endpoint;
#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use categories_endpoint::get_categories;
pub use list_endpoint::get_sales;
pub use model::{Sale, SaleId, insert_sale};
pub use price_range_endpoint::get_price_range;
pub use statistics_endpoint::get_statistics;
pub use summary_endpoint::get_month_summary;

/// The state needed by the sale route handlers.
#[derive(Debug, Clone)]
pub struct SaleState {
    /// The handle to the sales store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SaleState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
