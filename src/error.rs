// Error types for the facility domain model
//
// Two kinds are enough here:
// - ValidationError: malformed input or broken referential integrity,
//   raised at the point of the offending call
// - StateError: policy violations that depend on a member's state,
//   raised only from the assignment path

use thiserror::Error;

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// Rejected input or a referential-integrity violation.
///
/// Every variant carries enough context to render a message naming the
/// offending field or ids. Nothing here is fatal; callers can always
/// recover and retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric attribute fell below its minimum.
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: u32,
        value: u32,
    },

    /// Equipment with this id is already registered.
    #[error("equipment with id {id} is already registered")]
    DuplicateEquipmentId { id: String },

    /// A member with this number is already registered.
    #[error("a member with number {number} is already registered")]
    DuplicateMemberNumber { number: String },

    /// A training plan must contain at least one exercise.
    #[error("a training plan must contain at least one exercise")]
    NoExercises,

    /// Plan creation failed because some exercises reference equipment
    /// that is not registered in the facility. `missing` holds one
    /// "Name (ID: id)" entry per unresolved piece of equipment.
    #[error("the plan cannot be created, the following equipment is not registered: {}", .missing.join(", "))]
    UnknownEquipment { missing: Vec<String> },

    /// The member is not registered in this facility.
    #[error("member {number} is not registered in this facility")]
    UnknownMember { number: String },

    /// The plan was not created by this facility.
    #[error("the plan \"{name}\" does not belong to this facility")]
    ForeignPlan { name: String },
}

// ============================================================================
// STATE ERRORS
// ============================================================================

/// A policy violation that depends on a member's current state rather
/// than on the shape of the input. Only the assignment path raises these,
/// and only after all referential-integrity checks have passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Locked members never accept new plans, regardless of capacity.
    #[error("member {name} (no. {number}) is locked and cannot accept new plans")]
    MemberLocked { number: String, name: String },

    /// The member already holds the maximum number of active plans.
    #[error("member {name} (no. {number}) already has {max} active plans, no further plan can be assigned")]
    MemberAtCapacity {
        number: String,
        name: String,
        max: usize,
    },
}

// ============================================================================
// COMBINED FACILITY ERROR
// ============================================================================

/// Umbrella error for facility operations that can fail both ways,
/// i.e. plan assignment. Validation failures and state violations stay
/// distinguishable for callers that match on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacilityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}
