//! Product entity and the input shapes accepted by the catalog service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored catalog product.
///
/// `id` is assigned by the store at creation and never changes; `sku` is the
/// human-assigned business key and is globally unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "iPhone 15 Pro")]
    pub name: String,
    /// Category label; any non-empty text is accepted by the store.
    #[schema(example = "Electronics")]
    pub category: String,
    /// Unit price in currency units, two fractional digits for display.
    #[schema(example = 999.99)]
    pub price: f64,
    /// Units on hand, never negative.
    #[schema(example = 25)]
    pub quantity: i32,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Unique stock keeping unit.
    #[schema(example = "ELEC-001")]
    pub sku: String,
}

/// A validated candidate product, ready for insertion.
///
/// Produced only by [`crate::domain::CatalogService`] validation; the store
/// may assume every field already satisfies the catalog invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name, non-empty.
    pub name: String,
    /// Category label, non-empty.
    pub category: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Initial units on hand, non-negative.
    pub quantity: i32,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Unique stock keeping unit, non-empty.
    pub sku: String,
}

impl From<&seed_catalog::SeedProduct> for NewProduct {
    fn from(seed: &seed_catalog::SeedProduct) -> Self {
        Self {
            name: seed.name.to_owned(),
            category: seed.category.to_owned(),
            price: seed.price,
            quantity: seed.quantity,
            description: seed.description.to_owned(),
            sku: seed.sku.to_owned(),
        }
    }
}

/// An unvalidated create request as submitted by a client.
///
/// Absent fields stay `None`; `quantity` arrives already coerced by the wire
/// layer (absent or non-numeric becomes zero, negative values are kept for
/// the service to reject).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSubmission {
    /// Display name, required.
    pub name: Option<String>,
    /// Category label, required.
    pub category: Option<String>,
    /// Unit price, required.
    pub price: Option<f64>,
    /// Initial units on hand.
    pub quantity: i64,
    /// Free-text description; defaults to the empty string.
    pub description: Option<String>,
    /// Stock keeping unit, required.
    pub sku: Option<String>,
}
