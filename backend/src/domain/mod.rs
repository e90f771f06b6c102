//! Transport-agnostic catalog domain: entities, validation, and ports.
//!
//! Inbound adapters translate HTTP payloads into the types here; outbound
//! adapters implement [`ports::ProductStore`] against a concrete database.
//! Nothing in this module knows about Actix or Diesel.

pub mod bootstrap;
pub mod catalog;
pub mod error;
pub mod ports;
pub mod product;

pub use catalog::CatalogService;
pub use error::CatalogError;
pub use product::{NewProduct, Product, ProductSubmission};
