// ==========================================
// Substitute Scheduler - class group entity
// ==========================================
// "Turma" on the wire.
// ==========================================

use serde::{Deserialize, Serialize};

/// A class group (turma).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Input record for class-group creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassGroup {
    #[serde(rename = "nome")]
    pub name: String,
}

/// Partial update for a class group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassGroupUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
}
