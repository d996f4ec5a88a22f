// ==========================================
// Substitute Scheduler - core library
// ==========================================
// Stack: Rust + SQLite (in-memory store as development fallback)
// Role: school substitute-teacher scheduling backend
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// Application layer - state wiring
pub mod app;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::SubstitutionStatus;

// Domain entities
pub use domain::{Absence, ClassGroup, Subject, Substitution, Teacher};

// Engine
pub use engine::{AssignmentEngine, ScheduleOutcome, MAX_WORKLOAD_HOURS};

// Repository
pub use repository::{MemoryStore, SchedulingStore, SqliteStore};

// API
pub use api::{AbsenceApi, DashboardApi, RegistryApi, ScheduleApi};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Sistema de Escala de Professores Substitutos";
