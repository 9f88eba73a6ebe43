pub mod initialize;
pub mod pool;
pub mod queries;
pub mod seed;
pub mod stats;

pub use pool::DbPool;
pub use queries::SqliteStore;
