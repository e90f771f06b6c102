//! One-time catalog seeding.
//!
//! A fresh deployment starts with an empty table; seeding it with the
//! reference dataset makes the system usable without prior setup. The
//! zero-count guard makes the routine idempotent, and the batch insert is a
//! single transaction so a crash cannot leave a partial seed behind.

use tracing::{debug, info};

use crate::domain::ports::{ProductStore, ProductStoreError};
use crate::domain::product::NewProduct;

/// Insert the reference dataset when, and only when, the store is empty.
///
/// Returns how many products were inserted (zero when the store was already
/// populated).
///
/// # Errors
///
/// Propagates [`ProductStoreError`] from the count or the batch insert.
pub fn ensure_reference_catalog(store: &dyn ProductStore) -> Result<usize, ProductStoreError> {
    if store.count()? > 0 {
        debug!("catalog already populated; skipping seed");
        return Ok(0);
    }
    let drafts: Vec<NewProduct> = seed_catalog::reference_catalog()
        .iter()
        .map(NewProduct::from)
        .collect();
    let inserted = store.insert_batch(&drafts)?;
    info!(inserted, "seeded reference catalog");
    Ok(inserted)
}
