// Gym Facility System - Core Library
// In-memory domain model for equipment, members, and training plans,
// with referential-integrity rules enforced at creation/assignment time.

pub mod entities;
pub mod error;
pub mod facility;

// Re-export commonly used types
pub use entities::{Equipment, EquipmentCategory, Exercise, Measure, Member, TrainingPlan};
pub use error::{FacilityError, StateError, ValidationError};
pub use facility::Facility;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
