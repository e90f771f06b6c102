//! Wire types shared by the client and the views.
//!
//! Deliberately independent of the backend crate; the JSON contract is the
//! only coupling.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Unit price in currency units.
    pub price: f64,
    /// Units on hand.
    pub quantity: i32,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Unique stock keeping unit.
    pub sku: String,
}

/// Payload for creating a product; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Unit price in currency units.
    pub price: f64,
    /// Initial units on hand.
    pub quantity: i32,
    /// Free-text description.
    pub description: String,
    /// Unique stock keeping unit.
    pub sku: String,
}
