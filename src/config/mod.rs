// ==========================================
// Substitute Scheduler - configuration
// ==========================================
// Role: startup settings from environment variables
// ==========================================

use std::path::PathBuf;

/// Which store backend to run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory maps, development fallback. Nothing survives a restart.
    Memory,
    /// SQLite database at the given path.
    Sqlite(String),
}

/// Startup settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub backend: StoreBackend,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// - `SUBSTITUTE_SCHEDULER_STORE`: `memory` or `sqlite` (default `sqlite`)
    /// - `SUBSTITUTE_SCHEDULER_DB_PATH`: database path override
    pub fn from_env() -> Self {
        let backend = match std::env::var("SUBSTITUTE_SCHEDULER_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            _ => StoreBackend::Sqlite(default_db_path()),
        };
        Settings { backend }
    }
}

/// Default database path.
///
/// Development builds use a separate data directory so they never touch
/// production data.
pub fn default_db_path() -> String {
    // Explicit override for debugging/tests/CI.
    if let Ok(path) = std::env::var("SUBSTITUTE_SCHEDULER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./substitute_scheduler.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("substitute-scheduler-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("substitute-scheduler");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("substitute_scheduler.db");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
