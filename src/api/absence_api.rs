// ==========================================
// Substitute Scheduler - absence API
// ==========================================
// Role: absence recording; each new absence gets a pending substitution
// ==========================================

use std::sync::Arc;

use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::validate_new_absence;
use crate::domain::{Absence, NewAbsence, Substitution};
use crate::repository::store::SchedulingStore;

/// API for recording and removing absences.
///
/// Absences are immutable after creation; corrections are delete + recreate.
pub struct AbsenceApi {
    store: Arc<dyn SchedulingStore>,
}

impl AbsenceApi {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self { store }
    }

    pub fn list_absences(&self) -> ApiResult<Vec<Absence>> {
        Ok(self.store.list_absences()?)
    }

    /// Record an absence. The referenced teacher, subject and class group must
    /// exist; the store creates the pending substitution atomically.
    pub fn create_absence(&self, new: NewAbsence) -> ApiResult<Absence> {
        validate_new_absence(&new)?;

        if self.store.get_teacher(&new.teacher_id)?.is_none() {
            return Err(ApiError::ValidationError(
                "Professor não encontrado".to_string(),
            ));
        }
        if self.store.get_subject(&new.subject_id)?.is_none() {
            return Err(ApiError::ValidationError(
                "Disciplina não encontrada".to_string(),
            ));
        }
        if self.store.get_class_group(&new.class_group_id)?.is_none() {
            return Err(ApiError::ValidationError("Turma não encontrada".to_string()));
        }

        let absence = self.store.create_absence(new)?;
        info!(absence_id = %absence.id, week = absence.week, year = absence.year, "absence recorded");
        Ok(absence)
    }

    /// Delete an absence and its substitution record.
    pub fn delete_absence(&self, id: &str) -> ApiResult<()> {
        if !self.store.delete_absence(id)? {
            return Err(ApiError::NotFound("Ausência não encontrada".to_string()));
        }
        info!(absence_id = %id, "absence deleted");
        Ok(())
    }

    /// The substitution record tracking a given absence.
    pub fn substitution_for(&self, absence_id: &str) -> ApiResult<Option<Substitution>> {
        Ok(self.store.substitution_by_absence(absence_id)?)
    }
}
