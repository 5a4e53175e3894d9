//! Database queries for the sale read operations.
//!
//! Every operation takes an explicit connection handle, narrows by the month
//! predicate first, and binds user input as SQL parameters only. The listing
//! orders by `id` so page windows stay stable between requests.

use rusqlite::Connection;
use serde::Serialize;

use crate::{
    Error,
    db::MapRow,
    pagination::{PAGE_SIZE, page_offset},
};

use super::model::Sale;

/// The sales totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStatistics {
    /// The summed price of all sold items. 0 when nothing was sold.
    pub sales: f64,
    /// How many items were sold.
    #[serde(rename = "soldItems")]
    pub sold_items: u64,
    /// How many items were not sold.
    #[serde(rename = "unSoldItems")]
    pub unsold_items: u64,
}

/// Counts of items per fixed price range for one calendar month.
///
/// The first bucket covers prices in `[0, 100]`, each following bucket covers
/// `(lower, upper]`, and the last bucket is open ended above 900, so every
/// non-negative price falls into exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistogram {
    /// Items priced up to 100.
    #[serde(rename = "0-100")]
    pub up_to_100: u64,
    /// Items priced above 100, up to 200.
    #[serde(rename = "101-200")]
    pub up_to_200: u64,
    /// Items priced above 200, up to 300.
    #[serde(rename = "201-300")]
    pub up_to_300: u64,
    /// Items priced above 300, up to 400.
    #[serde(rename = "301-400")]
    pub up_to_400: u64,
    /// Items priced above 400, up to 500.
    #[serde(rename = "401-500")]
    pub up_to_500: u64,
    /// Items priced above 500, up to 600.
    #[serde(rename = "501-600")]
    pub up_to_600: u64,
    /// Items priced above 600, up to 700.
    #[serde(rename = "601-700")]
    pub up_to_700: u64,
    /// Items priced above 700, up to 800.
    #[serde(rename = "701-800")]
    pub up_to_800: u64,
    /// Items priced above 800, up to 900.
    #[serde(rename = "801-900")]
    pub up_to_900: u64,
    /// Items priced above 900.
    #[serde(rename = "901-above")]
    pub above_900: u64,
}

/// How many items a category holds in the filtered month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// The store-supplied category label.
    pub category: String,
    /// The number of items in the category.
    pub items: u64,
}

/// List the sale records for `month` whose title, description or price
/// contains `search`, windowed to the 1-based `page`.
///
/// Matching is a case-insensitive substring match; the empty string matches
/// every record. Pages hold at most [PAGE_SIZE] records, ordered by `id`
/// ascending.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub fn list_sales(
    month: u8,
    search: &str,
    page: u64,
    connection: &Connection,
) -> Result<Vec<Sale>, Error> {
    let pattern = format!("%{}%", escape_like_pattern(search));

    connection
        .prepare(
            "SELECT id, title, description, price, category, image, sold, date_of_sale \
             FROM sale \
             WHERE CAST(strftime('%m', date_of_sale) AS INTEGER) = ?1 \
             AND (title LIKE ?2 ESCAPE '\\' \
                  OR description LIKE ?2 ESCAPE '\\' \
                  OR CAST(price AS TEXT) LIKE ?2 ESCAPE '\\') \
             ORDER BY id ASC \
             LIMIT ?3 OFFSET ?4",
        )?
        .query_map(
            (month, pattern, PAGE_SIZE as i64, page_offset(page) as i64),
            Sale::map_row,
        )?
        .map(|maybe_sale| maybe_sale.map_err(Error::SqlError))
        .collect()
}

/// Compute the sales totals for `month`: the summed price over sold items and
/// the sold/unsold item counts.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub fn monthly_statistics(month: u8, connection: &Connection) -> Result<MonthlyStatistics, Error> {
    let statistics = connection
        .prepare(
            "SELECT \
                 COALESCE(SUM(CASE WHEN sold THEN price END), 0), \
                 COUNT(CASE WHEN sold THEN 1 END), \
                 COUNT(CASE WHEN NOT sold THEN 1 END) \
             FROM sale \
             WHERE CAST(strftime('%m', date_of_sale) AS INTEGER) = ?1",
        )?
        .query_row([month], |row| {
            Ok(MonthlyStatistics {
                sales: row.get(0)?,
                sold_items: row.get::<_, i64>(1)? as u64,
                unsold_items: row.get::<_, i64>(2)? as u64,
            })
        })?;

    Ok(statistics)
}

/// Count the items in each fixed price range for `month`.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub fn price_histogram(month: u8, connection: &Connection) -> Result<PriceHistogram, Error> {
    let histogram = connection
        .prepare(
            "SELECT \
                 COUNT(CASE WHEN price >= 0 AND price <= 100 THEN 1 END), \
                 COUNT(CASE WHEN price > 100 AND price <= 200 THEN 1 END), \
                 COUNT(CASE WHEN price > 200 AND price <= 300 THEN 1 END), \
                 COUNT(CASE WHEN price > 300 AND price <= 400 THEN 1 END), \
                 COUNT(CASE WHEN price > 400 AND price <= 500 THEN 1 END), \
                 COUNT(CASE WHEN price > 500 AND price <= 600 THEN 1 END), \
                 COUNT(CASE WHEN price > 600 AND price <= 700 THEN 1 END), \
                 COUNT(CASE WHEN price > 700 AND price <= 800 THEN 1 END), \
                 COUNT(CASE WHEN price > 800 AND price <= 900 THEN 1 END), \
                 COUNT(CASE WHEN price > 900 THEN 1 END) \
             FROM sale \
             WHERE CAST(strftime('%m', date_of_sale) AS INTEGER) = ?1",
        )?
        .query_row([month], |row| {
            Ok(PriceHistogram {
                up_to_100: row.get::<_, i64>(0)? as u64,
                up_to_200: row.get::<_, i64>(1)? as u64,
                up_to_300: row.get::<_, i64>(2)? as u64,
                up_to_400: row.get::<_, i64>(3)? as u64,
                up_to_500: row.get::<_, i64>(4)? as u64,
                up_to_600: row.get::<_, i64>(5)? as u64,
                up_to_700: row.get::<_, i64>(6)? as u64,
                up_to_800: row.get::<_, i64>(7)? as u64,
                up_to_900: row.get::<_, i64>(8)? as u64,
                above_900: row.get::<_, i64>(9)? as u64,
            })
        })?;

    Ok(histogram)
}

/// Count the items per distinct category for `month`.
///
/// The order of the returned pairs is not specified.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub fn category_breakdown(month: u8, connection: &Connection) -> Result<Vec<CategoryCount>, Error> {
    connection
        .prepare(
            "SELECT category, COUNT(category) \
             FROM sale \
             WHERE CAST(strftime('%m', date_of_sale) AS INTEGER) = ?1 \
             GROUP BY category",
        )?
        .query_map([month], |row| {
            Ok(CategoryCount {
                category: row.get(0)?,
                items: row.get::<_, i64>(1)? as u64,
            })
        })?
        .map(|maybe_count| maybe_count.map_err(Error::SqlError))
        .collect()
}

/// Escape the LIKE wildcards in `text` so it always matches literally.
fn escape_like_pattern(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
