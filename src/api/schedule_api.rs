// ==========================================
// Substitute Scheduler - schedule API
// ==========================================
// Role: weekly read model (denormalized join) and the generate operation
// Wire: {"semana", "ano", "ausencias": [...]} / {"geradas", "falhas"}
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::validator::validate_week_ref;
use crate::domain::{Absence, ClassGroup, Subject, Substitution, Teacher};
use crate::engine::{AssignmentEngine, ScheduleOutcome};
use crate::repository::store::SchedulingStore;

// ==========================================
// Read-model DTOs
// ==========================================

/// Substitution embed of the weekly view: the record plus, when assigned, the
/// substitute teacher it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionDetail {
    #[serde(flatten)]
    pub substitution: Substitution,
    #[serde(
        rename = "professorSubstituto",
        skip_serializing_if = "Option::is_none"
    )]
    pub substitute_teacher: Option<Teacher>,
}

/// One absence of the weekly grid, joined with its roster entities.
///
/// Referenced rows that no longer exist are omitted from the embed rather
/// than failing the whole view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceDetail {
    #[serde(flatten)]
    pub absence: Absence,
    #[serde(rename = "professor", skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Teacher>,
    #[serde(rename = "disciplina", skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(rename = "turma", skip_serializing_if = "Option::is_none")]
    pub class_group: Option<ClassGroup>,
    #[serde(rename = "substituicao", skip_serializing_if = "Option::is_none")]
    pub substitution: Option<SubstitutionDetail>,
}

/// The composed weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(rename = "semana")]
    pub week: i32,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "ausencias")]
    pub absences: Vec<AbsenceDetail>,
}

// ==========================================
// ScheduleApi
// ==========================================

/// Weekly schedule view + substitute assignment trigger.
pub struct ScheduleApi {
    store: Arc<dyn SchedulingStore>,
    engine: Arc<AssignmentEngine>,
}

impl ScheduleApi {
    pub fn new(store: Arc<dyn SchedulingStore>, engine: Arc<AssignmentEngine>) -> Self {
        Self { store, engine }
    }

    /// Denormalized weekly view: each absence joined with teacher, subject,
    /// class group and (if present) substitution + substitute teacher.
    pub fn weekly_schedule(&self, week: i32, year: i32) -> ApiResult<WeeklySchedule> {
        validate_week_ref(week, year)?;

        let absences = self.store.absences_by_week(week, year)?;
        let teachers = self.store.list_teachers()?;
        let subjects = self.store.list_subjects()?;
        let class_groups = self.store.list_class_groups()?;
        let substitutions = self.store.list_substitutions()?;

        let teachers_by_id: HashMap<&str, &Teacher> =
            teachers.iter().map(|t| (t.id.as_str(), t)).collect();
        let subjects_by_id: HashMap<&str, &Subject> =
            subjects.iter().map(|s| (s.id.as_str(), s)).collect();
        let class_groups_by_id: HashMap<&str, &ClassGroup> =
            class_groups.iter().map(|c| (c.id.as_str(), c)).collect();
        let substitutions_by_absence: HashMap<&str, &Substitution> = substitutions
            .iter()
            .map(|s| (s.absence_id.as_str(), s))
            .collect();

        let entries = absences
            .into_iter()
            .map(|absence| {
                let substitution =
                    substitutions_by_absence
                        .get(absence.id.as_str())
                        .map(|s| SubstitutionDetail {
                            substitution: (*s).clone(),
                            substitute_teacher: s
                                .substitute_teacher_id
                                .as_deref()
                                .and_then(|id| teachers_by_id.get(id))
                                .map(|t| (*t).clone()),
                        });
                AbsenceDetail {
                    teacher: teachers_by_id
                        .get(absence.teacher_id.as_str())
                        .map(|t| (*t).clone()),
                    subject: subjects_by_id
                        .get(absence.subject_id.as_str())
                        .map(|s| (*s).clone()),
                    class_group: class_groups_by_id
                        .get(absence.class_group_id.as_str())
                        .map(|c| (*c).clone()),
                    substitution,
                    absence,
                }
            })
            .collect();

        Ok(WeeklySchedule {
            week,
            year,
            absences: entries,
        })
    }

    /// Run the assignment engine for (week, year).
    pub fn generate_schedule(&self, week: i32, year: i32) -> ApiResult<ScheduleOutcome> {
        validate_week_ref(week, year)?;
        Ok(self.engine.generate(week, year)?)
    }
}
