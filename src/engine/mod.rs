// ==========================================
// Substitute Scheduler - engine layer
// ==========================================
// Role: business rules (substitute assignment)
// Red line: engines do not build SQL; data access goes through the store
// ==========================================

pub mod assignment;

// Core re-exports
pub use assignment::{AssignmentEngine, ScheduleOutcome, MAX_WORKLOAD_HOURS};
