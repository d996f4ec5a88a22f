// ==========================================
// Substitute Scheduler - substitution entity
// ==========================================
// One-to-one with an Absence. Invariant: status == Assigned iff
// substitute_teacher_id is Some.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::SubstitutionStatus;

/// The resolution record tracking whether/who covers an absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub id: String,
    #[serde(rename = "ausenciaId")]
    pub absence_id: String,
    #[serde(rename = "professorSubstitutoId")]
    pub substitute_teacher_id: Option<String>,
    pub status: SubstitutionStatus,
    #[serde(rename = "mensagem")]
    pub message: Option<String>,
}

/// Input record for substitution creation (normally only issued by the
/// repository when an absence is created).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubstitution {
    #[serde(rename = "ausenciaId")]
    pub absence_id: String,
    #[serde(rename = "professorSubstitutoId")]
    pub substitute_teacher_id: Option<String>,
    pub status: SubstitutionStatus,
    #[serde(rename = "mensagem")]
    pub message: Option<String>,
}

impl NewSubstitution {
    /// The automatically created record that accompanies a new absence.
    pub fn pending_for(absence_id: &str) -> Self {
        Self {
            absence_id: absence_id.to_string(),
            substitute_teacher_id: None,
            status: SubstitutionStatus::Pending,
            message: None,
        }
    }
}

/// Partial update for a substitution. `None` fields are left untouched;
/// there is no way to null out an already-set substitute (the lifecycle
/// never needs it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstitutionUpdate {
    #[serde(rename = "professorSubstitutoId")]
    pub substitute_teacher_id: Option<String>,
    pub status: Option<SubstitutionStatus>,
    #[serde(rename = "mensagem")]
    pub message: Option<String>,
}
