//! The sale record model and its database schema.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
};

/// The integer key that uniquely identifies a sale record.
pub type SaleId = i64;

/// One sold or unsold item in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    /// The unique identifier for the record.
    pub id: SaleId,
    /// Short display name of the item.
    pub title: String,
    /// Free text describing the item.
    pub description: String,
    /// The asking price. Never negative.
    pub price: f64,
    /// The store-supplied category label.
    pub category: String,
    /// URL of the product image.
    pub image: String,
    /// Whether the item has been sold.
    pub sold: bool,
    /// When the item was sold or listed. Only the month component is used
    /// for filtering.
    #[serde(rename = "dateOfSale", with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
}

impl CreateTable for Sale {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS sale (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL,
                    price REAL NOT NULL CHECK (price >= 0),
                    category TEXT NOT NULL,
                    image TEXT NOT NULL,
                    sold INTEGER NOT NULL,
                    date_of_sale TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Sale {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(offset)?,
            title: row.get(offset + 1)?,
            description: row.get(offset + 2)?,
            price: row.get(offset + 3)?,
            category: row.get(offset + 4)?,
            image: row.get(offset + 5)?,
            sold: row.get(offset + 6)?,
            date_of_sale: row.get(offset + 7)?,
        })
    }
}

/// Insert `sale` into the store.
///
/// The running server never writes to the store; this function exists for the
/// database seeding utility and for tests that need a populated store.
///
/// # Errors
/// Returns an [Error::SqlError] if the row could not be inserted, e.g. when
/// the id already exists or the price is negative.
pub fn insert_sale(sale: &Sale, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO sale (id, title, description, price, category, image, sold, date_of_sale)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            sale.id,
            &sale.title,
            &sale.description,
            sale.price,
            &sale.category,
            &sale.image,
            sale.sold,
            sale.date_of_sale,
        ),
    )?;

    Ok(())
}
