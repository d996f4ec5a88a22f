// ==========================================
// Substitute Scheduler - registry API
// ==========================================
// Role: CRUD over teachers, subjects and class groups
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::validate_required_text;
use crate::domain::{
    ClassGroup, ClassGroupUpdate, NewClassGroup, NewSubject, NewTeacher, Subject, SubjectUpdate,
    Teacher, TeacherUpdate,
};
use crate::repository::store::SchedulingStore;

/// CRUD API for the three roster entities.
///
/// Teachers' accumulated workload is not writable here; only the assignment
/// engine moves it.
pub struct RegistryApi {
    store: Arc<dyn SchedulingStore>,
}

impl RegistryApi {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self { store }
    }

    // ==========================================
    // Teachers
    // ==========================================

    pub fn list_teachers(&self) -> ApiResult<Vec<Teacher>> {
        Ok(self.store.list_teachers()?)
    }

    pub fn create_teacher(&self, new: NewTeacher) -> ApiResult<Teacher> {
        validate_required_text("nome", &new.name)?;
        validate_required_text("areaConhecimento", &new.knowledge_area)?;
        Ok(self.store.create_teacher(new)?)
    }

    pub fn update_teacher(&self, id: &str, update: TeacherUpdate) -> ApiResult<Teacher> {
        if let Some(name) = &update.name {
            validate_required_text("nome", name)?;
        }
        if let Some(area) = &update.knowledge_area {
            validate_required_text("areaConhecimento", area)?;
        }
        self.store
            .update_teacher(id, update)?
            .ok_or_else(|| ApiError::NotFound("Professor não encontrado".to_string()))
    }

    pub fn delete_teacher(&self, id: &str) -> ApiResult<()> {
        if !self.store.delete_teacher(id)? {
            return Err(ApiError::NotFound("Professor não encontrado".to_string()));
        }
        Ok(())
    }

    // ==========================================
    // Subjects
    // ==========================================

    pub fn list_subjects(&self) -> ApiResult<Vec<Subject>> {
        Ok(self.store.list_subjects()?)
    }

    pub fn create_subject(&self, new: NewSubject) -> ApiResult<Subject> {
        validate_required_text("nome", &new.name)?;
        validate_required_text("areaConhecimento", &new.knowledge_area)?;
        Ok(self.store.create_subject(new)?)
    }

    pub fn update_subject(&self, id: &str, update: SubjectUpdate) -> ApiResult<Subject> {
        if let Some(name) = &update.name {
            validate_required_text("nome", name)?;
        }
        if let Some(area) = &update.knowledge_area {
            validate_required_text("areaConhecimento", area)?;
        }
        self.store
            .update_subject(id, update)?
            .ok_or_else(|| ApiError::NotFound("Disciplina não encontrada".to_string()))
    }

    pub fn delete_subject(&self, id: &str) -> ApiResult<()> {
        if !self.store.delete_subject(id)? {
            return Err(ApiError::NotFound("Disciplina não encontrada".to_string()));
        }
        Ok(())
    }

    // ==========================================
    // Class groups
    // ==========================================

    pub fn list_class_groups(&self) -> ApiResult<Vec<ClassGroup>> {
        Ok(self.store.list_class_groups()?)
    }

    pub fn create_class_group(&self, new: NewClassGroup) -> ApiResult<ClassGroup> {
        validate_required_text("nome", &new.name)?;
        Ok(self.store.create_class_group(new)?)
    }

    pub fn update_class_group(
        &self,
        id: &str,
        update: ClassGroupUpdate,
    ) -> ApiResult<ClassGroup> {
        if let Some(name) = &update.name {
            validate_required_text("nome", name)?;
        }
        self.store
            .update_class_group(id, update)?
            .ok_or_else(|| ApiError::NotFound("Turma não encontrada".to_string()))
    }

    pub fn delete_class_group(&self, id: &str) -> ApiResult<()> {
        if !self.store.delete_class_group(id)? {
            return Err(ApiError::NotFound("Turma não encontrada".to_string()));
        }
        Ok(())
    }
}
