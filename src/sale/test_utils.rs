//! Helpers for building populated in-memory stores in tests.

use rusqlite::Connection;
use time::{Date, Month, OffsetDateTime, Time};

use crate::db::initialize;

use super::model::{Sale, SaleId, insert_sale};

/// Build a sale record dated to the 15th of `month` in 2022.
pub(crate) fn build_sale(id: SaleId, month: u8, price: f64, sold: bool, category: &str) -> Sale {
    let date = Date::from_calendar_date(2022, Month::try_from(month).unwrap(), 15).unwrap();

    Sale {
        id,
        title: format!("item #{id}"),
        description: format!("description for item #{id}"),
        price,
        category: category.to_string(),
        image: format!("https://example.com/items/{id}.jpg"),
        sold,
        date_of_sale: OffsetDateTime::new_utc(date, Time::from_hms(12, 0, 0).unwrap()),
    }
}

/// Create an initialized in-memory store containing `sales`.
pub(crate) fn connection_with_sales(sales: &[Sale]) -> Connection {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");

    for sale in sales {
        insert_sale(sale, &connection).expect("Could not insert test sale.");
    }

    connection
}
