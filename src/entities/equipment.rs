// 🏋️ Equipment - uniquely identified gym apparatus
//
// Identity: the equipment id (set once, never changes)
// Values: display name and category (can change)
//
// The id is the registry key, so there is deliberately no setter for it.
// Rekeying would desync the equipment from every exercise referencing it.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::entities::non_blank;
use crate::error::ValidationError;

// ============================================================================
// EQUIPMENT CATEGORY
// ============================================================================

/// Coarse classification of gym apparatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipmentCategory {
    /// Cardio apparatus (treadmill, rowing machine, ...)
    Endurance,

    /// Resistance apparatus (leg press, cable pull, ...)
    Strength,
}

impl EquipmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Endurance => "Endurance",
            EquipmentCategory::Strength => "Strength",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EQUIPMENT
// ============================================================================

/// A piece of gym apparatus with a stable, unique id.
///
/// Equality and hashing are based solely on the id, matching how the
/// facility registry looks equipment up.
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    id: String,
    name: String,
    category: EquipmentCategory,
}

impl Equipment {
    /// Create a new piece of equipment.
    ///
    /// Trims `id` and `name`; both must be non-blank.
    pub fn new(
        id: &str,
        name: &str,
        category: EquipmentCategory,
    ) -> Result<Self, ValidationError> {
        Ok(Equipment {
            id: non_blank("equipment id", id)?,
            name: non_blank("equipment name", name)?,
            category,
        })
    }

    /// The unique equipment id. Set once at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> EquipmentCategory {
        self.category
    }

    /// Rename the equipment. The id stays fixed, so renaming never
    /// breaks exercises referencing this piece.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = non_blank("equipment name", name)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: EquipmentCategory) {
        self.category = category;
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Equipment {}

impl Hash for Equipment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Equipment [ID: {}, Name: {}, Category: {}]",
            self.id, self.name, self.category
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
