//! SQLite connection wrapper.
//!
//! Reporting commands open the database read-only and run all their
//! queries inside one deferred transaction; the admin commands (init, seed)
//! open it read-write.

use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::path::Path;
use tracing::debug;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) a database for writing. Admin paths only.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        debug!(db = path, "opened read-write connection");
        Ok(Self { conn })
    }

    /// Open an existing database for reporting.
    ///
    /// The file is opened with `SQLITE_OPEN_READ_ONLY` and `query_only` is
    /// switched on, so any write attempted on this handle fails.
    pub fn open_read_only(path: &str) -> AppResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(Path::new(path), flags)?;
        conn.pragma_update(None, "query_only", true)?;
        debug!(db = path, "opened read-only connection");
        Ok(Self { conn })
    }

    /// Start the per-request read transaction.
    ///
    /// Dropping the returned transaction rolls it back, which is all a
    /// read-only request ever needs, on success and on error alike.
    pub fn read_tx(&mut self) -> AppResult<Transaction<'_>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Deferred)?;
        Ok(tx)
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
