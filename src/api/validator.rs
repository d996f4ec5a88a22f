// ==========================================
// Substitute Scheduler - input validation
// ==========================================
// Role: field-level validation for API inputs, before any write
// ==========================================

use chrono::NaiveTime;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::NewAbsence;

/// Minimum accepted year for absences and schedule queries.
pub const MIN_YEAR: i32 = 2024;

/// Validate a (week, year) pair for schedule endpoints.
pub fn validate_week_ref(week: i32, year: i32) -> ApiResult<()> {
    if !(1..=53).contains(&week) {
        return Err(ApiError::InvalidInput(format!(
            "semana inválida: {} (esperado 1-53)",
            week
        )));
    }
    if year < MIN_YEAR {
        return Err(ApiError::InvalidInput(format!(
            "ano inválido: {} (esperado >= {})",
            year, MIN_YEAR
        )));
    }
    Ok(())
}

/// Validate the fields of a new absence.
pub fn validate_new_absence(new: &NewAbsence) -> ApiResult<()> {
    if !(0..=4).contains(&new.weekday) {
        return Err(ApiError::ValidationError(format!(
            "diaSemana inválido: {} (esperado 0-4, segunda a sexta)",
            new.weekday
        )));
    }
    if NaiveTime::parse_from_str(&new.start_time, "%H:%M").is_err() {
        return Err(ApiError::ValidationError(format!(
            "horarioInicio inválido: {} (esperado HH:MM)",
            new.start_time
        )));
    }
    if !(1..=8).contains(&new.duration_hours) {
        return Err(ApiError::ValidationError(format!(
            "duracao inválida: {} (esperado 1-8 horas)",
            new.duration_hours
        )));
    }
    validate_week_ref(new.week, new.year)
}

/// Reject blank required text fields (names, knowledge areas).
pub fn validate_required_text(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::ValidationError(format!(
            "{} não pode ser vazio",
            field
        )));
    }
    Ok(())
}
