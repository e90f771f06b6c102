//! OpenAPI documentation configuration.
//!
//! Registers the product endpoints, the health probes, and the wire schemas.
//! The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::api::error::ErrorBody;
use crate::api::products::{CreateProductRequest, DeletedResponse, QuantityUpdate};
use crate::domain::Product;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory catalog API",
        description = "CRUD interface for a persistent product catalog.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::products::list_products,
        crate::api::products::create_product,
        crate::api::products::delete_product,
        crate::api::products::update_quantity,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(Product, CreateProductRequest, QuantityUpdate, DeletedResponse, ErrorBody)),
    tags(
        (name = "products", description = "Catalog operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Structural checks on the generated document.
    #![expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]

    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::ApiDoc;

    #[test]
    fn document_lists_every_product_endpoint() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/products"));
        assert!(paths.contains_key("/api/products/{id}"));
        assert!(paths.contains_key("/api/products/{id}/quantity"));
        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }

    #[test]
    fn product_schema_exposes_the_persisted_columns() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let product = schemas.get("Product").expect("Product schema");

        match product {
            RefOr::T(Schema::Object(object)) => {
                for field in ["id", "name", "category", "price", "quantity", "description", "sku"]
                {
                    assert!(
                        object.properties.contains_key(field),
                        "schema should have field '{field}'"
                    );
                }
            }
            _ => panic!("expected Object schema"),
        }
    }
}
