// ==========================================
// Substitute Scheduler - absence entity
// ==========================================
// An absence is immutable once created except for deletion. Creating one
// atomically creates its pending Substitution (repository responsibility).
// ==========================================

use serde::{Deserialize, Serialize};

/// A recorded instance of a teacher missing a scheduled class.
///
/// - `weekday`: 0 = Monday .. 4 = Friday
/// - `start_time`: "HH:MM"
/// - `duration_hours`: 1..=8
/// - `week`: ISO-style week number, 1..=53
/// - `year`: >= 2024
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub id: String,
    #[serde(rename = "professorId")]
    pub teacher_id: String,
    #[serde(rename = "disciplinaId")]
    pub subject_id: String,
    #[serde(rename = "turmaId")]
    pub class_group_id: String,
    #[serde(rename = "diaSemana")]
    pub weekday: i32,
    #[serde(rename = "horarioInicio")]
    pub start_time: String,
    #[serde(rename = "duracao")]
    pub duration_hours: i32,
    #[serde(rename = "semana")]
    pub week: i32,
    #[serde(rename = "ano")]
    pub year: i32,
}

/// Input record for absence creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAbsence {
    #[serde(rename = "professorId")]
    pub teacher_id: String,
    #[serde(rename = "disciplinaId")]
    pub subject_id: String,
    #[serde(rename = "turmaId")]
    pub class_group_id: String,
    #[serde(rename = "diaSemana")]
    pub weekday: i32,
    #[serde(rename = "horarioInicio")]
    pub start_time: String,
    #[serde(rename = "duracao")]
    pub duration_hours: i32,
    #[serde(rename = "semana")]
    pub week: i32,
    #[serde(rename = "ano")]
    pub year: i32,
}
