// ==========================================
// Substitute Scheduler - subject entity
// ==========================================

use serde::{Deserialize, Serialize};

/// A school subject, tied to a free-text knowledge area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: String,
}

/// Input record for subject creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: String,
}

/// Partial update for a subject. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "areaConhecimento")]
    pub knowledge_area: Option<String>,
}
