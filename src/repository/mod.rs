// ==========================================
// Substitute Scheduler - repository layer
// ==========================================
// Role: data access behind the SchedulingStore trait
// Red line: no business logic in the stores
// Constraint: all SQL is parameterized
// ==========================================

pub mod error;
pub mod memory_store;
pub mod sqlite_store;
pub mod store;

// Core re-exports
pub use error::{RepositoryError, RepositoryResult};
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
pub use store::SchedulingStore;
