// ==========================================
// Substitute Scheduler - teacher entity
// ==========================================
// Wire names follow the legacy JSON contract (Portuguese, camelCase).
// ==========================================

use serde::{Deserialize, Serialize};

/// A teacher on the school roster.
///
/// `workload_hours` is the accumulated substitute-teaching load. It starts at
/// 0 and only grows through assignment; the policy cap of 60h is enforced by
/// the assignment engine as an eligibility filter, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: String,
    #[serde(rename = "cargaHoraria")]
    pub workload_hours: i32,
}

/// Input record for teacher creation. Workload always starts at 0 and is not
/// client-writable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: String,
}

/// Partial update for a teacher. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: Option<String>,
}
