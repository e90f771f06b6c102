//! REST API modules.

pub mod error;
pub mod health;
pub mod products;

pub use error::{ApiError, ApiResult};
