pub mod config;
pub mod db;
pub mod me;
pub mod month;
pub mod period;

use crate::config::Config;
use crate::core::RasService;
use crate::db::{DbPool, SqliteStore};
use crate::errors::AppResult;

/// Run one read-only request.
///
/// The connection and its read transaction live exactly as long as `f`;
/// both are released on every exit path, errors included.
pub(crate) fn with_service<T, F>(cfg: &Config, f: F) -> AppResult<T>
where
    F: FnOnce(&RasService<'_, SqliteStore<'_>>) -> AppResult<T>,
{
    let mut pool = DbPool::open_read_only(&cfg.database)?;
    let tx = pool.read_tx()?;
    let store = SqliteStore::new(&tx);
    let service = RasService::new(&store);
    f(&service)
}
