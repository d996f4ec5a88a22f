// ==========================================
// Substitute Scheduler - dashboard API
// ==========================================
// Role: aggregate statistics over substitutions and absences
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::domain::types::SubstitutionStatus;
use crate::repository::store::SchedulingStore;

/// How many teachers the "most assigned" ranking keeps.
const TOP_ASSIGNED_LIMIT: usize = 5;

/// How many trailing weeks the timeline keeps.
const TIMELINE_WEEKS: usize = 8;

/// One row of the "most assigned substitutes" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTeacherCount {
    #[serde(rename = "nome")]
    pub name: String,
    pub total: u32,
}

/// One point of the absences-per-week timeline. `week_label` is "Sem {n}".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(rename = "semana")]
    pub week_label: String,
    pub total: u32,
}

/// Dashboard aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalSubstituicoes")]
    pub total_substitutions: u32,
    #[serde(rename = "substituicoesAtribuidas")]
    pub assigned: u32,
    #[serde(rename = "semDisponibilidade")]
    pub unavailable: u32,
    #[serde(rename = "pendentes")]
    pub pending: u32,
    #[serde(rename = "professoresMaisEscalados")]
    pub most_assigned: Vec<AssignedTeacherCount>,
    #[serde(rename = "substituicoesTimeline")]
    pub timeline: Vec<TimelinePoint>,
}

/// Aggregation API feeding the dashboard.
pub struct DashboardApi {
    store: Arc<dyn SchedulingStore>,
}

impl DashboardApi {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> ApiResult<DashboardStats> {
        let substitutions = self.store.list_substitutions()?;
        let teachers = self.store.list_teachers()?;
        let absences = self.store.list_absences()?;

        let total_substitutions = substitutions.len() as u32;
        let assigned = substitutions
            .iter()
            .filter(|s| s.status == SubstitutionStatus::Assigned)
            .count() as u32;
        let unavailable = substitutions
            .iter()
            .filter(|s| s.status == SubstitutionStatus::Unavailable)
            .count() as u32;
        let pending = substitutions
            .iter()
            .filter(|s| s.status == SubstitutionStatus::Pending)
            .count() as u32;

        // Most-assigned substitutes: counts over assigned records whose
        // teacher still exists. Tie order among equal counts is unspecified.
        let teacher_names: HashMap<&str, &str> = teachers
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for substitution in &substitutions {
            if substitution.status != SubstitutionStatus::Assigned {
                continue;
            }
            let Some(teacher_id) = substitution.substitute_teacher_id.as_deref() else {
                continue;
            };
            if teacher_names.contains_key(teacher_id) {
                *counts.entry(teacher_id).or_insert(0) += 1;
            }
        }
        let mut most_assigned: Vec<AssignedTeacherCount> = counts
            .into_iter()
            .map(|(teacher_id, total)| AssignedTeacherCount {
                name: teacher_names[teacher_id].to_string(),
                total,
            })
            .collect();
        most_assigned.sort_by(|a, b| b.total.cmp(&a.total));
        most_assigned.truncate(TOP_ASSIGNED_LIMIT);

        // Absence counts per week label, week-ascending, last 8 points.
        let mut per_week: HashMap<i32, u32> = HashMap::new();
        for absence in &absences {
            *per_week.entry(absence.week).or_insert(0) += 1;
        }
        let mut weeks: Vec<(i32, u32)> = per_week.into_iter().collect();
        weeks.sort_by_key(|(week, _)| *week);
        let skip = weeks.len().saturating_sub(TIMELINE_WEEKS);
        let timeline = weeks
            .into_iter()
            .skip(skip)
            .map(|(week, total)| TimelinePoint {
                week_label: format!("Sem {}", week),
                total,
            })
            .collect();

        Ok(DashboardStats {
            total_substitutions,
            assigned,
            unavailable,
            pending,
            most_assigned,
            timeline,
        })
    }
}
