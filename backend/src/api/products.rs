//! Product API handlers.
//!
//! Store calls are synchronous Diesel operations, so every handler runs them
//! on the blocking pool via `web::block`.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::error::{ApiResult, ErrorBody};
use crate::domain::{CatalogService, Product, ProductSubmission};

/// Create-request payload.
///
/// Required fields stay optional here so the service can report every
/// missing one in a single validation error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Display name, required.
    #[schema(example = "iPhone 15 Pro")]
    pub name: Option<String>,
    /// Category label, required.
    #[schema(example = "Electronics")]
    pub category: Option<String>,
    /// Unit price, required.
    #[schema(example = 999.99)]
    pub price: Option<f64>,
    /// Initial units on hand; absent or non-numeric input counts as zero.
    #[serde(default, deserialize_with = "lenient_quantity")]
    #[schema(value_type = i64, example = 25)]
    pub quantity: i64,
    /// Free-text description; defaults to the empty string.
    pub description: Option<String>,
    /// Stock keeping unit, required.
    #[schema(example = "ELEC-001")]
    pub sku: Option<String>,
}

impl CreateProductRequest {
    fn into_submission(self) -> ProductSubmission {
        ProductSubmission {
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            sku: self.sku,
        }
    }
}

/// Quantity-update payload; the target is an absolute value, not a delta.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct QuantityUpdate {
    /// Absolute target quantity.
    #[schema(example = 3)]
    pub quantity: Option<i64>,
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Confirmation text.
    #[schema(example = "Deleted successfully")]
    pub message: String,
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_quantity(&value))
}

/// Permissive numeric coercion: null or unparseable quantities become
/// zero; negative numbers survive for the service to reject.
fn coerce_quantity(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map(|float| float as i64)
            .unwrap_or(0),
        _ => 0,
    }
}

/// List the full catalog.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products ordered by category, then name", body = [Product]),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/api/products")]
pub async fn list_products(catalog: web::Data<CatalogService>) -> ApiResult<web::Json<Vec<Product>>> {
    let catalog = catalog.into_inner();
    let products = web::block(move || catalog.list_products()).await??;
    Ok(web::Json(products))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created product including its assigned id", body = Product),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "SKU already exists", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/api/products")]
pub async fn create_product(
    catalog: web::Data<CatalogService>,
    body: web::Json<CreateProductRequest>,
) -> ApiResult<HttpResponse> {
    let catalog = catalog.into_inner();
    let submission = body.into_inner().into_submission();
    let product = web::block(move || catalog.create_product(submission)).await??;
    Ok(HttpResponse::Created().json(product))
}

/// Delete a product permanently.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product removed", body = DeletedResponse),
        (status = 404, description = "Unknown id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/api/products/{id}")]
pub async fn delete_product(
    catalog: web::Data<CatalogService>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = path.into_inner();
    let catalog = catalog.into_inner();
    web::block(move || catalog.delete_product(id)).await??;
    Ok(web::Json(DeletedResponse {
        message: "Deleted successfully".to_owned(),
    }))
}

/// Set a product's quantity to an absolute target.
#[utoipa::path(
    patch,
    path = "/api/products/{id}/quantity",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = QuantityUpdate,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Quantity missing or negative", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["products"],
    operation_id = "updateQuantity"
)]
#[patch("/api/products/{id}/quantity")]
pub async fn update_quantity(
    catalog: web::Data<CatalogService>,
    path: web::Path<i32>,
    body: web::Json<QuantityUpdate>,
) -> ApiResult<web::Json<Product>> {
    let id = path.into_inner();
    let target = body.into_inner().quantity;
    let catalog = catalog.into_inner();
    let product = web::block(move || catalog.set_quantity(id, target)).await??;
    Ok(web::Json(product))
}

#[cfg(test)]
mod tests {
    //! Wire-level coercion rules.
    #![expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]

    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{CreateProductRequest, coerce_quantity};

    #[rstest]
    #[case(json!(12), 12)]
    #[case(json!(2.9), 2)]
    #[case(json!(-4), -4)]
    #[case(json!("15"), 15)]
    #[case(json!("  7 "), 7)]
    #[case(json!("plenty"), 0)]
    #[case(json!(null), 0)]
    #[case(json!(true), 0)]
    #[case(json!({}), 0)]
    fn quantity_coercion_is_permissive(#[case] value: Value, #[case] expected: i64) {
        assert_eq!(coerce_quantity(&value), expected);
    }

    #[test]
    fn absent_quantity_defaults_to_zero() {
        let request: CreateProductRequest =
            serde_json::from_value(json!({ "name": "Widget" })).expect("partial body parses");

        assert_eq!(request.quantity, 0);
        assert_eq!(request.name.as_deref(), Some("Widget"));
        assert!(request.sku.is_none());
    }

    #[test]
    fn non_numeric_quantity_is_coerced_not_rejected() {
        let request: CreateProductRequest =
            serde_json::from_value(json!({ "quantity": "lots" })).expect("body parses");

        assert_eq!(request.quantity, 0);
    }
}
