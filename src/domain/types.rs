// ==========================================
// Substitute Scheduler - domain type definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Substitution status
// ==========================================
// Wire/database format matches the legacy Portuguese values.
// Lifecycle: Pending -> Assigned | Unavailable (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubstitutionStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "atribuida")]
    Assigned,
    #[serde(rename = "sem_disponibilidade")]
    Unavailable,
}

impl SubstitutionStatus {
    /// Database/wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionStatus::Pending => "pendente",
            SubstitutionStatus::Assigned => "atribuida",
            SubstitutionStatus::Unavailable => "sem_disponibilidade",
        }
    }

    /// Parse a database string; unknown values fall back to Pending
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "atribuida" => SubstitutionStatus::Assigned,
            "sem_disponibilidade" => SubstitutionStatus::Unavailable,
            _ => SubstitutionStatus::Pending,
        }
    }
}

impl fmt::Display for SubstitutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
