//! Catalog service: the only gateway to the product store.
//!
//! All request-level validation lives here; the store enforces only the
//! constraints the database can express (SKU uniqueness, row atomicity).

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::error::CatalogError;
use crate::domain::ports::{ProductStore, ProductStoreError};
use crate::domain::product::{NewProduct, Product, ProductSubmission};

/// Message returned when a quantity target is missing or negative.
const QUANTITY_MESSAGE: &str = "Quantity must be >= 0";

/// Validating facade over a [`ProductStore`].
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Return the full catalog ordered by category, then name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] when the store fails.
    pub fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.store.list().map_err(map_store_error)?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    /// Validate and insert a candidate product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the missing required
    /// fields, [`CatalogError::Conflict`] when the SKU is already taken, or
    /// [`CatalogError::Store`] on persistence failure.
    pub fn create_product(&self, submission: ProductSubmission) -> Result<Product, CatalogError> {
        let draft = validate_submission(submission)?;
        let product = self.store.insert(&draft).map_err(map_store_error)?;
        info!(id = product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    /// Remove a product permanently.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the id does not exist, or
    /// [`CatalogError::Store`] on persistence failure.
    pub fn delete_product(&self, id: i32) -> Result<(), CatalogError> {
        self.store.delete(id).map_err(map_store_error)?;
        info!(id, "product deleted");
        Ok(())
    }

    /// Set a product's quantity to an absolute target value.
    ///
    /// The contract is an absolute set, not a relative delta, even though
    /// the shipped client only ever sends current ± 1.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when the target is missing or
    /// negative, [`CatalogError::NotFound`] when the id does not exist, or
    /// [`CatalogError::Store`] on persistence failure.
    pub fn set_quantity(&self, id: i32, target: Option<i64>) -> Result<Product, CatalogError> {
        let quantity = validate_quantity_target(target)?;
        let product = self
            .store
            .set_quantity(id, quantity)
            .map_err(map_store_error)?;
        info!(id, quantity, "quantity updated");
        Ok(product)
    }
}

fn validate_submission(submission: ProductSubmission) -> Result<NewProduct, CatalogError> {
    let ProductSubmission {
        name,
        category,
        price,
        quantity,
        description,
        sku,
    } = submission;

    let mut missing = Vec::new();
    let name = required_text(name, "name", &mut missing);
    let category = required_text(category, "category", &mut missing);
    if price.is_none() {
        missing.push("price");
    }
    let sku = required_text(sku, "sku", &mut missing);
    if !missing.is_empty() {
        return Err(CatalogError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let price = price.unwrap_or_default();
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::validation("Price must be >= 0"));
    }
    if quantity < 0 {
        return Err(CatalogError::validation(QUANTITY_MESSAGE));
    }
    let quantity = i32::try_from(quantity)
        .map_err(|_| CatalogError::validation("Quantity is out of range"))?;

    Ok(NewProduct {
        name,
        category,
        price,
        quantity,
        description: description.unwrap_or_default(),
        sku,
    })
}

/// Record the field as missing when absent or blank, yielding the trimmed
/// requirement the caller can keep building with.
fn required_text(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

fn validate_quantity_target(target: Option<i64>) -> Result<i32, CatalogError> {
    let Some(target) = target else {
        return Err(CatalogError::validation(QUANTITY_MESSAGE));
    };
    if target < 0 {
        return Err(CatalogError::validation(QUANTITY_MESSAGE));
    }
    i32::try_from(target).map_err(|_| CatalogError::validation("Quantity is out of range"))
}

fn map_store_error(error: ProductStoreError) -> CatalogError {
    match error {
        ProductStoreError::DuplicateSku { .. } => CatalogError::conflict("SKU already exists"),
        ProductStoreError::RowMissing { .. } => CatalogError::not_found("Product not found"),
        ProductStoreError::Connection { message } | ProductStoreError::Query { message } => {
            CatalogError::store(message)
        }
    }
}
