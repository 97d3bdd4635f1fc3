// Entity models for the gym domain
//
// Each entity validates its own construction input; cross-entity rules
// (registered equipment, plan provenance) live in the Facility.

pub mod equipment;
pub mod exercise;
pub mod member;
pub mod plan;

pub use equipment::{Equipment, EquipmentCategory};
pub use exercise::{Exercise, Measure};
pub use member::Member;
pub use plan::TrainingPlan;

use crate::error::ValidationError;

/// Trim `value` and reject it when nothing remains.
pub(crate) fn non_blank(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
