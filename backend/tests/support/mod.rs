//! Shared fixtures for the integration suites.
#![expect(clippy::expect_used, reason = "fixtures fail loudly during setup")]

use backend::outbound::persistence::{DbPool, DieselProductStore, PoolConfig, run_migrations};
use tempfile::TempDir;

/// Open a migrated, empty store on a throwaway SQLite file.
///
/// The returned [`TempDir`] must stay alive for as long as the store is
/// used.
pub fn fresh_store() -> (DieselProductStore, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("catalog.db");
    let pool = DbPool::new(&PoolConfig::new(db_path.to_string_lossy())).expect("pool builds");
    run_migrations(&pool).expect("migrations apply");
    (DieselProductStore::new(pool), dir)
}
