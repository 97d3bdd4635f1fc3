// 📋 TrainingPlan - named, ordered collection of exercises
//
// A plan carries no validity state of its own. `is_valid_against` is a
// pure check against whatever equipment catalog the caller supplies; the
// facility runs it exactly once at creation time.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::entities::{non_blank, Equipment, Exercise};
use crate::error::ValidationError;

/// A named, ordered collection of exercises. Insertion order is
/// significant and exercises are append-only.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingPlan {
    name: String,
    exercises: Vec<Exercise>,
}

impl TrainingPlan {
    /// Create an empty plan. The name is trimmed and must be non-blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(TrainingPlan {
            name: non_blank("plan name", name)?,
            exercises: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an exercise to the plan.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    /// Read-only view of the exercises, in insertion order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Check whether every exercise's equipment is present in the given
    /// catalog, matching by equipment id. An empty plan is never valid.
    ///
    /// Pure function: no side effects, same result for the same inputs
    /// no matter how often it is evaluated.
    pub fn is_valid_against(&self, catalog: &[Arc<Equipment>]) -> bool {
        if self.exercises.is_empty() {
            return false;
        }

        self.exercises.iter().all(|exercise| {
            catalog
                .iter()
                .any(|equipment| equipment.id() == exercise.equipment().id())
        })
    }
}

impl fmt::Display for TrainingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training plan: {}", self.name)?;
        writeln!(f, "Exercises:")?;
        for (i, exercise) in self.exercises.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, exercise)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EquipmentCategory;

    fn equipment(id: &str) -> Arc<Equipment> {
        Arc::new(Equipment::new(id, "Some Machine", EquipmentCategory::Strength).unwrap())
    }

    fn exercise_on(equipment: Arc<Equipment>) -> Exercise {
        Exercise::repetitions("Exercise", "Description", 3, equipment, 10).unwrap()
    }

    #[test]
    fn test_plan_name_is_trimmed_and_required() {
        let plan = TrainingPlan::new("  Full Body  ").unwrap();
        assert_eq!(plan.name(), "Full Body");

        assert!(matches!(
            TrainingPlan::new("   "),
            Err(ValidationError::EmptyField { field: "plan name" })
        ));
    }

    #[test]
    fn test_empty_plan_is_never_valid() {
        let plan = TrainingPlan::new("Empty").unwrap();
        let catalog = vec![equipment("G001")];

        assert!(!plan.is_valid_against(&catalog));
        assert!(!plan.is_valid_against(&[]));
    }

    #[test]
    fn test_plan_valid_when_all_equipment_present() {
        let g1 = equipment("G001");
        let g2 = equipment("G002");

        let mut plan = TrainingPlan::new("Full Body").unwrap();
        plan.add_exercise(exercise_on(Arc::clone(&g1)));
        plan.add_exercise(exercise_on(Arc::clone(&g2)));

        let catalog = vec![g1, g2];
        assert!(plan.is_valid_against(&catalog));
    }

    #[test]
    fn test_plan_invalid_when_one_equipment_missing() {
        let registered = equipment("G001");
        let unregistered = equipment("G999");

        let mut plan = TrainingPlan::new("Mixed").unwrap();
        plan.add_exercise(exercise_on(Arc::clone(&registered)));
        plan.add_exercise(exercise_on(unregistered));

        let catalog = vec![registered];
        assert!(!plan.is_valid_against(&catalog));
    }

    #[test]
    fn test_validity_matches_by_id_not_by_handle() {
        // A distinct Arc with the same id still counts as present.
        let in_plan = equipment("G001");
        let in_catalog = equipment("G001");
        assert!(!Arc::ptr_eq(&in_plan, &in_catalog));

        let mut plan = TrainingPlan::new("Plan").unwrap();
        plan.add_exercise(exercise_on(in_plan));

        assert!(plan.is_valid_against(&[in_catalog]));
    }

    #[test]
    fn test_is_valid_against_is_repeatable() {
        let g1 = equipment("G001");
        let mut plan = TrainingPlan::new("Plan").unwrap();
        plan.add_exercise(exercise_on(Arc::clone(&g1)));

        let catalog = vec![g1];
        assert!(plan.is_valid_against(&catalog));
        assert!(plan.is_valid_against(&catalog));
        assert_eq!(plan.exercises().len(), 1);
    }

    #[test]
    fn test_exercises_preserve_insertion_order() {
        let g1 = equipment("G001");
        let mut plan = TrainingPlan::new("Ordered").unwrap();

        for name in ["First", "Second", "Third"] {
            plan.add_exercise(
                Exercise::repetitions(name, "Description", 3, Arc::clone(&g1), 10).unwrap(),
            );
        }

        let names: Vec<&str> = plan.exercises().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
