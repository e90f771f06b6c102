//! Outbound ports the catalog service depends on.

use crate::domain::product::{NewProduct, Product};

/// Store-level failures reported by [`ProductStore`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductStoreError {
    /// Insert violated the unique SKU constraint.
    #[error("sku already present: {sku}")]
    DuplicateSku {
        /// The conflicting stock keeping unit.
        sku: String,
    },

    /// The targeted row does not exist.
    #[error("no product with id {id}")]
    RowMissing {
        /// The id that matched nothing.
        id: i32,
    },

    /// A database connection could not be obtained.
    #[error("connection unavailable: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// The query itself failed.
    #[error("query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
}

impl ProductStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable product persistence.
///
/// Implementations must enforce SKU uniqueness atomically at insert time and
/// perform delete and quantity updates as atomic single-row operations. No
/// operation spans multiple products except [`ProductStore::insert_batch`],
/// which is a one-shot bootstrap aid and must be transactional.
pub trait ProductStore: Send + Sync {
    /// Return all products ordered by category ascending, then name
    /// ascending.
    fn list(&self) -> Result<Vec<Product>, ProductStoreError>;

    /// Insert a validated product and return the stored row including its
    /// assigned id.
    fn insert(&self, product: &NewProduct) -> Result<Product, ProductStoreError>;

    /// Remove the product with the given id.
    fn delete(&self, id: i32) -> Result<(), ProductStoreError>;

    /// Set the quantity of the product with the given id to an absolute
    /// value and return the updated row.
    fn set_quantity(&self, id: i32, quantity: i32) -> Result<Product, ProductStoreError>;

    /// Number of stored products.
    fn count(&self) -> Result<i64, ProductStoreError>;

    /// Insert several products in a single transaction, returning how many
    /// rows were written.
    fn insert_batch(&self, products: &[NewProduct]) -> Result<usize, ProductStoreError>;
}
