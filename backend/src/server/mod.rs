//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpServer, web};
use tracing::info;

use crate::RequestTrace;
use crate::api::error::ApiError;
use crate::api::health::{HealthState, live, ready};
use crate::api::products::{create_product, delete_product, list_products, update_quantity};
use crate::domain::{CatalogService, bootstrap};
use crate::outbound::persistence::{
    DbPool, DieselProductStore, PoolConfig, SetupError, run_migrations,
};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Open the store, apply migrations, seed an empty catalog, and return the
/// ready-to-serve service.
///
/// # Errors
///
/// Returns [`SetupError`] when the database cannot be opened, migrated, or
/// seeded.
pub fn prepare_catalog(database_url: &str) -> Result<CatalogService, SetupError> {
    let pool = DbPool::new(&PoolConfig::new(database_url))?;
    run_migrations(&pool)?;
    let store = DieselProductStore::new(pool);
    bootstrap::ensure_reference_catalog(&store).map_err(|error| SetupError::Seed {
        message: error.to_string(),
    })?;
    Ok(CatalogService::new(Arc::new(store)))
}

/// Assemble the application with all routes, extractors, and middleware.
pub fn build_app(
    catalog: web::Data<CatalogService>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(catalog)
        .app_data(health)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(RequestTrace)
        .service(list_products)
        .service(create_product)
        .service(delete_product)
        .service(update_quantity)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server and return it ready to be awaited.
///
/// # Errors
///
/// Returns [`std::io::Error`] when store preparation fails or the address
/// cannot be bound.
pub fn run(config: &ServerConfig) -> std::io::Result<Server> {
    let catalog =
        prepare_catalog(config.database_url()).map_err(|error| std::io::Error::other(error.to_string()))?;
    let catalog = web::Data::new(catalog);
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();

    let server = HttpServer::new(move || build_app(catalog.clone(), server_health.clone()))
        .bind(config.bind_addr())?
        .run();

    health.mark_ready();
    info!(addr = %config.bind_addr(), "catalog server listening");
    Ok(server)
}

/// Reshape body-deserialisation failures into the `{"error": ...}` envelope.
fn json_error_handler(
    error: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::validation(error.to_string()).into()
}

/// Reshape path-extraction failures (e.g. a non-numeric id) likewise.
fn path_error_handler(error: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::validation(error.to_string()).into()
}
