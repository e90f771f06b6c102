//! Diesel-backed [`ProductStore`] adapter.
//!
//! Every operation checks out one connection and touches at most one row;
//! the batch insert used for seeding is the only transaction.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::ports::{ProductStore, ProductStoreError};
use crate::domain::product::{NewProduct, Product};

use super::models::{NewProductRow, ProductRow};
use super::pool::{DbPool, SqlitePooledConnection};
use super::schema::products;

/// SQLite-backed product store.
#[derive(Clone)]
pub struct DieselProductStore {
    pool: DbPool,
}

impl DieselProductStore {
    /// Create a store over the given pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<SqlitePooledConnection, ProductStoreError> {
        self.pool
            .get()
            .map_err(|error| ProductStoreError::connection(error.to_string()))
    }
}

fn map_query_error(error: DieselError) -> ProductStoreError {
    ProductStoreError::query(error.to_string())
}

impl ProductStore for DieselProductStore {
    fn list(&self) -> Result<Vec<Product>, ProductStoreError> {
        let mut conn = self.conn()?;
        let rows = products::table
            .order((products::category.asc(), products::name.asc()))
            .select(ProductRow::as_select())
            .load::<ProductRow>(&mut conn)
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn insert(&self, product: &NewProduct) -> Result<Product, ProductStoreError> {
        let mut conn = self.conn()?;
        diesel::insert_into(products::table)
            .values(NewProductRow::from(product))
            .execute(&mut conn)
            .map_err(|error| match error {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ProductStoreError::DuplicateSku {
                        sku: product.sku.clone(),
                    }
                }
                other => map_query_error(other),
            })?;
        // The sku is unique, so it identifies the row just written.
        let row = products::table
            .filter(products::sku.eq(&product.sku))
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .map_err(map_query_error)?;
        Ok(row.into())
    }

    fn delete(&self, id: i32) -> Result<(), ProductStoreError> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(products::table.find(id))
            .execute(&mut conn)
            .map_err(map_query_error)?;
        if affected == 0 {
            return Err(ProductStoreError::RowMissing { id });
        }
        Ok(())
    }

    fn set_quantity(&self, id: i32, quantity: i32) -> Result<Product, ProductStoreError> {
        let mut conn = self.conn()?;
        let affected = diesel::update(products::table.find(id))
            .set(products::quantity.eq(quantity))
            .execute(&mut conn)
            .map_err(map_query_error)?;
        if affected == 0 {
            return Err(ProductStoreError::RowMissing { id });
        }
        let row = products::table
            .find(id)
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .map_err(|error| match error {
                DieselError::NotFound => ProductStoreError::RowMissing { id },
                other => map_query_error(other),
            })?;
        Ok(row.into())
    }

    fn count(&self) -> Result<i64, ProductStoreError> {
        let mut conn = self.conn()?;
        products::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(map_query_error)
    }

    fn insert_batch(&self, items: &[NewProduct]) -> Result<usize, ProductStoreError> {
        let mut conn = self.conn()?;
        let rows: Vec<NewProductRow<'_>> = items.iter().map(NewProductRow::from).collect();
        conn.transaction(|conn| {
            diesel::insert_into(products::table)
                .values(&rows)
                .execute(conn)
        })
        .map_err(map_query_error)
    }
}
