// 💪 Exercise - one prescribed activity on one piece of equipment
//
// The measure is a closed tagged union: an exercise is either
// repetition-based or duration-based, nothing else. Rendering the
// measure is a plain match, exhaustive by construction.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::entities::Equipment;
use crate::error::ValidationError;

// ============================================================================
// MEASURE
// ============================================================================

/// The variant-specific load of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Measure {
    /// Repetition-based exercise, at least 1 repetition per set.
    Repetitions(u32),

    /// Duration-based exercise, at least 1 minute.
    Duration { minutes: u32 },
}

impl Measure {
    /// Human-readable rendering, e.g. "12 repetitions" or "20 minutes".
    pub fn describe(&self) -> String {
        match self {
            Measure::Repetitions(reps) => format!("{reps} repetitions"),
            Measure::Duration { minutes } => format!("{minutes} minutes"),
        }
    }
}

// ============================================================================
// EXERCISE
// ============================================================================

/// A single prescribed activity referencing exactly one piece of
/// equipment. The equipment reference is shared, not owned; it is
/// resolved at construction and re-checked against the facility's
/// registry when a plan is created.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    name: String,
    description: String,
    set_count: u32,
    equipment: Arc<Equipment>,
    measure: Measure,
}

impl Exercise {
    /// Create a repetition-based exercise. `repetitions` must be >= 1.
    ///
    /// Name, description and set count are stored verbatim.
    pub fn repetitions(
        name: &str,
        description: &str,
        set_count: u32,
        equipment: Arc<Equipment>,
        repetitions: u32,
    ) -> Result<Self, ValidationError> {
        if repetitions < 1 {
            return Err(ValidationError::BelowMinimum {
                field: "repetitions",
                min: 1,
                value: repetitions,
            });
        }

        Ok(Exercise {
            name: name.to_string(),
            description: description.to_string(),
            set_count,
            equipment,
            measure: Measure::Repetitions(repetitions),
        })
    }

    /// Create a duration-based exercise. `minutes` must be >= 1.
    pub fn duration(
        name: &str,
        description: &str,
        set_count: u32,
        equipment: Arc<Equipment>,
        minutes: u32,
    ) -> Result<Self, ValidationError> {
        if minutes < 1 {
            return Err(ValidationError::BelowMinimum {
                field: "duration minutes",
                min: 1,
                value: minutes,
            });
        }

        Ok(Exercise {
            name: name.to_string(),
            description: description.to_string(),
            set_count,
            equipment,
            measure: Measure::Duration { minutes },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_count(&self) -> u32 {
        self.set_count
    }

    /// The equipment this exercise requires.
    pub fn equipment(&self) -> &Arc<Equipment> {
        &self.equipment
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Render the variant-specific measure, e.g. "20 minutes".
    pub fn describe_measure(&self) -> String {
        self.measure.describe()
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} sets, {})",
            self.name,
            self.description,
            self.set_count,
            self.describe_measure()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
