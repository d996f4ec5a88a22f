// ==========================================
// Substitute Scheduler - data access capability
// ==========================================
// Role: single trait behind which both store backends live
// Red line: the store holds no business rules; the assignment algorithm,
// validation and aggregation live above it
// ==========================================

use crate::domain::{
    Absence, ClassGroup, ClassGroupUpdate, NewAbsence, NewClassGroup, NewSubject, NewTeacher,
    Subject, SubjectUpdate, Substitution, SubstitutionUpdate, Teacher, TeacherUpdate,
};
use crate::repository::error::RepositoryResult;

/// Abstract data-access capability for the scheduling domain.
///
/// Two implementations exist and are selected at startup:
/// - `MemoryStore`: in-memory maps, development fallback
/// - `SqliteStore`: relational store backed by SQLite
///
/// Contract notes:
/// - `create_absence` atomically creates the absence and its pending
///   substitution; `delete_absence` removes both. Every absence therefore has
///   exactly one substitution at all times.
/// - Partial updates leave `None` fields untouched and return `Ok(None)` when
///   the target row does not exist.
pub trait SchedulingStore: Send + Sync {
    // ===== teachers =====
    fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>>;
    fn get_teacher(&self, id: &str) -> RepositoryResult<Option<Teacher>>;
    fn create_teacher(&self, new: NewTeacher) -> RepositoryResult<Teacher>;
    fn update_teacher(&self, id: &str, update: TeacherUpdate)
        -> RepositoryResult<Option<Teacher>>;
    fn delete_teacher(&self, id: &str) -> RepositoryResult<bool>;
    /// Set a teacher's accumulated workload to a new absolute value.
    fn update_workload(&self, id: &str, new_hours: i32) -> RepositoryResult<()>;

    // ===== subjects =====
    fn list_subjects(&self) -> RepositoryResult<Vec<Subject>>;
    fn get_subject(&self, id: &str) -> RepositoryResult<Option<Subject>>;
    fn create_subject(&self, new: NewSubject) -> RepositoryResult<Subject>;
    fn update_subject(&self, id: &str, update: SubjectUpdate)
        -> RepositoryResult<Option<Subject>>;
    fn delete_subject(&self, id: &str) -> RepositoryResult<bool>;

    // ===== class groups =====
    fn list_class_groups(&self) -> RepositoryResult<Vec<ClassGroup>>;
    fn get_class_group(&self, id: &str) -> RepositoryResult<Option<ClassGroup>>;
    fn create_class_group(&self, new: NewClassGroup) -> RepositoryResult<ClassGroup>;
    fn update_class_group(
        &self,
        id: &str,
        update: ClassGroupUpdate,
    ) -> RepositoryResult<Option<ClassGroup>>;
    fn delete_class_group(&self, id: &str) -> RepositoryResult<bool>;

    // ===== absences =====
    fn list_absences(&self) -> RepositoryResult<Vec<Absence>>;
    fn absences_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Absence>>;
    fn get_absence(&self, id: &str) -> RepositoryResult<Option<Absence>>;
    /// Creates the absence together with its pending substitution (atomic).
    fn create_absence(&self, new: NewAbsence) -> RepositoryResult<Absence>;
    /// Deletes the absence and its substitution (atomic). Returns whether the
    /// absence existed.
    fn delete_absence(&self, id: &str) -> RepositoryResult<bool>;

    // ===== substitutions =====
    fn list_substitutions(&self) -> RepositoryResult<Vec<Substitution>>;
    fn get_substitution(&self, id: &str) -> RepositoryResult<Option<Substitution>>;
    fn substitution_by_absence(&self, absence_id: &str)
        -> RepositoryResult<Option<Substitution>>;
    fn substitutions_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Substitution>>;
    fn update_substitution(
        &self,
        id: &str,
        update: SubstitutionUpdate,
    ) -> RepositoryResult<Option<Substitution>>;
}
