// ==========================================
// Substitute Scheduler - application state
// ==========================================
// Role: wire store backend -> engine -> API instances
// ==========================================

use std::sync::Arc;

use crate::api::{AbsenceApi, DashboardApi, RegistryApi, ScheduleApi};
use crate::config::StoreBackend;
use crate::engine::AssignmentEngine;
use crate::repository::{MemoryStore, SchedulingStore, SqliteStore};

/// Application state: the selected store and every API instance built on it.
pub struct AppState {
    /// The data-access capability all APIs share
    pub store: Arc<dyn SchedulingStore>,

    /// Roster CRUD API
    pub registry_api: Arc<RegistryApi>,

    /// Absence recording API
    pub absence_api: Arc<AbsenceApi>,

    /// Weekly view + assignment API
    pub schedule_api: Arc<ScheduleApi>,

    /// Aggregate statistics API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// Build the application state on the backend selected at startup.
    pub fn new(backend: StoreBackend) -> Result<Self, String> {
        let store: Arc<dyn SchedulingStore> = match backend {
            StoreBackend::Memory => {
                tracing::info!("using in-memory store (development fallback)");
                Arc::new(MemoryStore::new())
            }
            StoreBackend::Sqlite(db_path) => {
                tracing::info!("using SQLite store at {}", db_path);
                Arc::new(
                    SqliteStore::new(&db_path)
                        .map_err(|e| format!("failed to open SQLite store: {}", e))?,
                )
            }
        };

        let engine = Arc::new(AssignmentEngine::new(store.clone()));

        let registry_api = Arc::new(RegistryApi::new(store.clone()));
        let absence_api = Arc::new(AbsenceApi::new(store.clone()));
        let schedule_api = Arc::new(ScheduleApi::new(store.clone(), engine));
        let dashboard_api = Arc::new(DashboardApi::new(store.clone()));

        tracing::info!("AppState initialized");

        Ok(Self {
            store,
            registry_api,
            absence_api,
            schedule_api,
            dashboard_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_on_memory_backend() {
        let state = AppState::new(StoreBackend::Memory).expect("state should build");
        assert!(state.registry_api.list_teachers().unwrap().is_empty());
    }
}
