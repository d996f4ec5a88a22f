// ==========================================
// Substitute Scheduler - assignment engine
// ==========================================
// Role: resolve every pending substitution of a week to a terminal status
// Input: (week, year)
// Output: counts of generated assignments and failures
// ==========================================

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::types::SubstitutionStatus;
use crate::domain::{SubstitutionUpdate, Teacher};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::store::SchedulingStore;

/// Policy cap on a teacher's accumulated substitute workload (hours).
pub const MAX_WORKLOAD_HOURS: i32 = 60;

/// Counters returned by one assignment run.
///
/// Wire format: `{"geradas": n, "falhas": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    #[serde(rename = "geradas")]
    pub generated: u32,
    #[serde(rename = "falhas")]
    pub failures: u32,
}

/// Substitution assignment engine.
///
/// One invocation processes every pending substitution of the requested week:
/// candidates share the absent teacher's knowledge area, must stay within the
/// 60h cap after taking the absence, and the least-loaded candidate wins.
/// Already-resolved substitutions are never touched, so re-running a week is
/// idempotent.
pub struct AssignmentEngine {
    store: Arc<dyn SchedulingStore>,
    // Serializes whole runs: two concurrent generate() calls on the same
    // engine would otherwise both read the same pending records and
    // double-count the chosen substitute's workload.
    run_lock: Mutex<()>,
}

impl AssignmentEngine {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self {
            store,
            run_lock: Mutex::new(()),
        }
    }

    /// Run the assignment algorithm for (week, year).
    ///
    /// Each absence's resolution is committed independently; there is no
    /// rollback. A run interrupted midway leaves the remaining substitutions
    /// pending, and a later run picks them up.
    pub fn generate(&self, week: i32, year: i32) -> RepositoryResult<ScheduleOutcome> {
        let _guard = self
            .run_lock
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let absences = self.store.absences_by_week(week, year)?;
        let mut teachers = self.store.list_teachers()?;
        let substitutions = self.store.list_substitutions()?;

        info!(
            week,
            year,
            absences = absences.len(),
            "starting assignment run"
        );

        let mut outcome = ScheduleOutcome::default();

        for absence in &absences {
            let Some(substitution) = substitutions.iter().find(|s| s.absence_id == absence.id)
            else {
                debug!(absence_id = %absence.id, "absence has no substitution record, skipping");
                continue;
            };

            // Only pending records are processed; assigned/unavailable are
            // terminal and a re-run must not disturb them.
            if substitution.status != SubstitutionStatus::Pending {
                continue;
            }

            // Data-integrity gap: the absent teacher no longer exists. Skipped
            // silently, no failure counted (distinct from "no candidate").
            let Some(absent_teacher) = teachers.iter().find(|t| t.id == absence.teacher_id)
            else {
                debug!(
                    absence_id = %absence.id,
                    teacher_id = %absence.teacher_id,
                    "absent teacher not found, skipping"
                );
                continue;
            };
            let absent_area = absent_teacher.knowledge_area.clone();

            // Candidates: same knowledge area, not the absent teacher, and
            // still under the workload cap after taking this absence.
            let mut candidates: Vec<&Teacher> = teachers
                .iter()
                .filter(|t| t.id != absence.teacher_id && t.knowledge_area == absent_area)
                .filter(|t| t.workload_hours + absence.duration_hours <= MAX_WORKLOAD_HOURS)
                .collect();

            if candidates.is_empty() {
                self.store.update_substitution(
                    &substitution.id,
                    SubstitutionUpdate {
                        substitute_teacher_id: None,
                        status: Some(SubstitutionStatus::Unavailable),
                        message: Some(
                            "Nenhum professor disponível com a área de conhecimento \
                             necessária e carga horária adequada"
                                .to_string(),
                        ),
                    },
                )?;
                outcome.failures += 1;
                debug!(absence_id = %absence.id, area = %absent_area, "no eligible substitute");
                continue;
            }

            // Least-loaded candidate wins. Order among equal workloads is
            // unspecified.
            candidates.sort_by_key(|t| t.workload_hours);
            let chosen_id = candidates[0].id.clone();
            let chosen_name = candidates[0].name.clone();
            let new_workload = candidates[0].workload_hours + absence.duration_hours;

            self.store.update_substitution(
                &substitution.id,
                SubstitutionUpdate {
                    substitute_teacher_id: Some(chosen_id.clone()),
                    status: Some(SubstitutionStatus::Assigned),
                    message: Some(format!(
                        "Professor {} escalado automaticamente",
                        chosen_name
                    )),
                },
            )?;
            self.store.update_workload(&chosen_id, new_workload)?;

            // Keep the working copy in sync so later absences in this run see
            // the incremented workload when competing for the same area.
            if let Some(teacher) = teachers.iter_mut().find(|t| t.id == chosen_id) {
                teacher.workload_hours = new_workload;
            }

            outcome.generated += 1;
            debug!(
                absence_id = %absence.id,
                substitute_id = %chosen_id,
                new_workload,
                "substitute assigned"
            );
        }

        info!(
            week,
            year,
            generated = outcome.generated,
            failures = outcome.failures,
            "assignment run finished"
        );
        Ok(outcome)
    }
}
