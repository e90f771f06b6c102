//! Inventory catalog backend library modules.

pub mod api;
pub mod doc;
pub mod domain;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-correlation middleware applied to every app.
pub use middleware::RequestTrace;
