//! Diesel/SQLite persistence adapters.

mod models;
mod pool;
mod product_store;
pub mod schema;

pub use pool::{DbPool, PoolConfig, PoolError, SqlitePooledConnection};
pub use product_store::DieselProductStore;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Failures raised while preparing the store at startup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The pool could not be built or checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A migration failed to apply.
    #[error("migration failed: {message}")]
    Migration {
        /// Description of the failed migration.
        message: String,
    },

    /// The one-time seed batch failed.
    #[error("seeding failed: {message}")]
    Seed {
        /// Description of the seeding failure.
        message: String,
    },
}

/// Apply any pending migrations on a pooled connection.
///
/// # Errors
///
/// Returns [`SetupError`] when no connection is available or a migration
/// fails to apply.
pub fn run_migrations(pool: &DbPool) -> Result<(), SetupError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|error| SetupError::Migration {
            message: error.to_string(),
        })
}
