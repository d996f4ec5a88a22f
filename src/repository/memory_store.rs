// ==========================================
// Substitute Scheduler - in-memory store
// ==========================================
// Role: development fallback backend, no persistence
// Iteration order of listings is unspecified (map order)
// ==========================================

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::{
    Absence, ClassGroup, ClassGroupUpdate, NewAbsence, NewClassGroup, NewSubject,
    NewSubstitution, NewTeacher, Subject, SubjectUpdate, Substitution, SubstitutionUpdate,
    Teacher, TeacherUpdate,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::store::SchedulingStore;

#[derive(Default)]
struct MemoryState {
    teachers: HashMap<String, Teacher>,
    subjects: HashMap<String, Subject>,
    class_groups: HashMap<String, ClassGroup>,
    absences: HashMap<String, Absence>,
    substitutions: HashMap<String, Substitution>,
}

/// In-memory implementation of [`SchedulingStore`].
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl SchedulingStore for MemoryStore {
    // ===== teachers =====

    fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>> {
        Ok(self.read()?.teachers.values().cloned().collect())
    }

    fn get_teacher(&self, id: &str) -> RepositoryResult<Option<Teacher>> {
        Ok(self.read()?.teachers.get(id).cloned())
    }

    fn create_teacher(&self, new: NewTeacher) -> RepositoryResult<Teacher> {
        let teacher = Teacher {
            id: new_id(),
            name: new.name,
            knowledge_area: new.knowledge_area,
            workload_hours: 0,
        };
        self.write()?
            .teachers
            .insert(teacher.id.clone(), teacher.clone());
        Ok(teacher)
    }

    fn update_teacher(
        &self,
        id: &str,
        update: TeacherUpdate,
    ) -> RepositoryResult<Option<Teacher>> {
        let mut state = self.write()?;
        let Some(teacher) = state.teachers.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            teacher.name = name;
        }
        if let Some(area) = update.knowledge_area {
            teacher.knowledge_area = area;
        }
        Ok(Some(teacher.clone()))
    }

    fn delete_teacher(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.write()?.teachers.remove(id).is_some())
    }

    fn update_workload(&self, id: &str, new_hours: i32) -> RepositoryResult<()> {
        let mut state = self.write()?;
        match state.teachers.get_mut(id) {
            Some(teacher) => {
                teacher.workload_hours = new_hours;
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity: "Teacher".to_string(),
                id: id.to_string(),
            }),
        }
    }

    // ===== subjects =====

    fn list_subjects(&self) -> RepositoryResult<Vec<Subject>> {
        Ok(self.read()?.subjects.values().cloned().collect())
    }

    fn get_subject(&self, id: &str) -> RepositoryResult<Option<Subject>> {
        Ok(self.read()?.subjects.get(id).cloned())
    }

    fn create_subject(&self, new: NewSubject) -> RepositoryResult<Subject> {
        let subject = Subject {
            id: new_id(),
            name: new.name,
            knowledge_area: new.knowledge_area,
        };
        self.write()?
            .subjects
            .insert(subject.id.clone(), subject.clone());
        Ok(subject)
    }

    fn update_subject(
        &self,
        id: &str,
        update: SubjectUpdate,
    ) -> RepositoryResult<Option<Subject>> {
        let mut state = self.write()?;
        let Some(subject) = state.subjects.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            subject.name = name;
        }
        if let Some(area) = update.knowledge_area {
            subject.knowledge_area = area;
        }
        Ok(Some(subject.clone()))
    }

    fn delete_subject(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.write()?.subjects.remove(id).is_some())
    }

    // ===== class groups =====

    fn list_class_groups(&self) -> RepositoryResult<Vec<ClassGroup>> {
        Ok(self.read()?.class_groups.values().cloned().collect())
    }

    fn get_class_group(&self, id: &str) -> RepositoryResult<Option<ClassGroup>> {
        Ok(self.read()?.class_groups.get(id).cloned())
    }

    fn create_class_group(&self, new: NewClassGroup) -> RepositoryResult<ClassGroup> {
        let class_group = ClassGroup {
            id: new_id(),
            name: new.name,
        };
        self.write()?
            .class_groups
            .insert(class_group.id.clone(), class_group.clone());
        Ok(class_group)
    }

    fn update_class_group(
        &self,
        id: &str,
        update: ClassGroupUpdate,
    ) -> RepositoryResult<Option<ClassGroup>> {
        let mut state = self.write()?;
        let Some(class_group) = state.class_groups.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            class_group.name = name;
        }
        Ok(Some(class_group.clone()))
    }

    fn delete_class_group(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.write()?.class_groups.remove(id).is_some())
    }

    // ===== absences =====

    fn list_absences(&self) -> RepositoryResult<Vec<Absence>> {
        Ok(self.read()?.absences.values().cloned().collect())
    }

    fn absences_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Absence>> {
        Ok(self
            .read()?
            .absences
            .values()
            .filter(|a| a.week == week && a.year == year)
            .cloned()
            .collect())
    }

    fn get_absence(&self, id: &str) -> RepositoryResult<Option<Absence>> {
        Ok(self.read()?.absences.get(id).cloned())
    }

    fn create_absence(&self, new: NewAbsence) -> RepositoryResult<Absence> {
        let absence = Absence {
            id: new_id(),
            teacher_id: new.teacher_id,
            subject_id: new.subject_id,
            class_group_id: new.class_group_id,
            weekday: new.weekday,
            start_time: new.start_time,
            duration_hours: new.duration_hours,
            week: new.week,
            year: new.year,
        };
        let pending = NewSubstitution::pending_for(&absence.id);
        let substitution = Substitution {
            id: new_id(),
            absence_id: pending.absence_id,
            substitute_teacher_id: pending.substitute_teacher_id,
            status: pending.status,
            message: pending.message,
        };

        // Single write-lock section keeps absence + substitution creation atomic.
        let mut state = self.write()?;
        state.absences.insert(absence.id.clone(), absence.clone());
        state
            .substitutions
            .insert(substitution.id.clone(), substitution);
        Ok(absence)
    }

    fn delete_absence(&self, id: &str) -> RepositoryResult<bool> {
        let mut state = self.write()?;
        state.substitutions.retain(|_, s| s.absence_id != id);
        Ok(state.absences.remove(id).is_some())
    }

    // ===== substitutions =====

    fn list_substitutions(&self) -> RepositoryResult<Vec<Substitution>> {
        Ok(self.read()?.substitutions.values().cloned().collect())
    }

    fn get_substitution(&self, id: &str) -> RepositoryResult<Option<Substitution>> {
        Ok(self.read()?.substitutions.get(id).cloned())
    }

    fn substitution_by_absence(
        &self,
        absence_id: &str,
    ) -> RepositoryResult<Option<Substitution>> {
        Ok(self
            .read()?
            .substitutions
            .values()
            .find(|s| s.absence_id == absence_id)
            .cloned())
    }

    fn substitutions_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Substitution>> {
        let state = self.read()?;
        Ok(state
            .substitutions
            .values()
            .filter(|s| {
                state
                    .absences
                    .get(&s.absence_id)
                    .map(|a| a.week == week && a.year == year)
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn update_substitution(
        &self,
        id: &str,
        update: SubstitutionUpdate,
    ) -> RepositoryResult<Option<Substitution>> {
        let mut state = self.write()?;
        let Some(substitution) = state.substitutions.get_mut(id) else {
            return Ok(None);
        };
        if let Some(teacher_id) = update.substitute_teacher_id {
            substitution.substitute_teacher_id = Some(teacher_id);
        }
        if let Some(status) = update.status {
            substitution.status = status;
        }
        if let Some(message) = update.message {
            substitution.message = Some(message);
        }
        Ok(Some(substitution.clone()))
    }
}
