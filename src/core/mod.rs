pub mod aggregator;
pub mod period;
pub mod resolver;
pub mod service;
pub mod store;

pub use service::RasService;
pub use store::{EmployeeDirectory, LineStore, MemoryStore};
