// ==========================================
// Substitute Scheduler - API layer
// ==========================================
// Role: business interfaces for whatever transport sits on top
// ==========================================

pub mod absence_api;
pub mod dashboard_api;
pub mod error;
pub mod registry_api;
pub mod schedule_api;
pub mod validator;

// Core re-exports
pub use absence_api::AbsenceApi;
pub use dashboard_api::{AssignedTeacherCount, DashboardApi, DashboardStats, TimelinePoint};
pub use error::{ApiError, ApiResult};
pub use registry_api::RegistryApi;
pub use schedule_api::{AbsenceDetail, ScheduleApi, SubstitutionDetail, WeeklySchedule};
