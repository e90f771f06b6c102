//! Row types mapping the `products` table.

use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::outbound::persistence::schema::products;

/// A product row as loaded from SQLite.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    /// Store-assigned primary key.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Unit price.
    pub price: f64,
    /// Units on hand.
    pub quantity: i32,
    /// Free-text description.
    pub description: String,
    /// Unique stock keeping unit.
    pub sku: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            quantity: row.quantity,
            description: row.description,
            sku: row.sku,
        }
    }
}

/// Insertable form of a validated draft; borrows from the domain type.
#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    /// Display name.
    pub name: &'a str,
    /// Category label.
    pub category: &'a str,
    /// Unit price.
    pub price: f64,
    /// Units on hand.
    pub quantity: i32,
    /// Free-text description.
    pub description: &'a str,
    /// Unique stock keeping unit.
    pub sku: &'a str,
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(draft: &'a NewProduct) -> Self {
        Self {
            name: &draft.name,
            category: &draft.category,
            price: draft.price,
            quantity: draft.quantity,
            description: &draft.description,
            sku: &draft.sku,
        }
    }
}
