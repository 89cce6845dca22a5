pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod port;
pub mod queries;

pub use port::{MemoryPort, PersistencePort, SqlitePort};
