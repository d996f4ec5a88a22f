// ==========================================
// Substitute Scheduler - application layer
// ==========================================

pub mod state;

pub use state::AppState;
