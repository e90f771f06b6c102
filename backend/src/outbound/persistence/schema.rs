//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Product catalog table.
    ///
    /// One row per product; `sku` carries a UNIQUE constraint and `id` is
    /// the auto-assigned integer primary key.
    products (id) {
        /// Store-assigned integer primary key.
        id -> Integer,
        /// Display name.
        name -> Text,
        /// Category label; free text.
        category -> Text,
        /// Unit price in currency units.
        price -> Double,
        /// Units on hand.
        quantity -> Integer,
        /// Free-text description, possibly empty.
        description -> Text,
        /// Unique stock keeping unit.
        sku -> Text,
    }
}
