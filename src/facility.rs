// 🏢 Facility - registry and orchestrator
//
// Owns the three registries (equipment, members, plans) and is the sole
// entry point for creating plans and assigning them. Cross-entity rules
// that no single entity can check alone live here: "is this equipment
// actually registered", "was this plan created by this facility".
//
// All registries are append-only; there are no removal operations. A
// plan accepted by create_plan was therefore valid against the equipment
// registry at creation time and stays valid permanently.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::entities::{Equipment, Exercise, Member, TrainingPlan};
use crate::error::{FacilityError, ValidationError};

/// The gym facility: registry of equipment, members, and training plans.
#[derive(Debug, Default, Serialize)]
pub struct Facility {
    equipment: Vec<Arc<Equipment>>,
    members: Vec<Member>,
    plans: Vec<Arc<TrainingPlan>>,
}

impl Facility {
    /// Create a facility with empty registries.
    pub fn new() -> Self {
        Facility::default()
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Register a piece of equipment.
    ///
    /// Fails if an entry with the same id (string equality, not handle
    /// identity) already exists. Returns the shared handle that
    /// exercises should reference.
    pub fn register_equipment(
        &mut self,
        equipment: Equipment,
    ) -> Result<Arc<Equipment>, ValidationError> {
        if self.equipment_by_id(equipment.id()).is_some() {
            warn!(id = equipment.id(), "duplicate equipment registration rejected");
            return Err(ValidationError::DuplicateEquipmentId {
                id: equipment.id().to_string(),
            });
        }

        let equipment = Arc::new(equipment);
        info!(id = equipment.id(), name = equipment.name(), "registered equipment");
        self.equipment.push(Arc::clone(&equipment));
        Ok(equipment)
    }

    /// Register a member.
    ///
    /// Fails if a member with the same number already exists.
    pub fn register_member(&mut self, member: Member) -> Result<(), ValidationError> {
        if self.member_by_number(member.member_number()).is_some() {
            warn!(
                number = member.member_number(),
                "duplicate member registration rejected"
            );
            return Err(ValidationError::DuplicateMemberNumber {
                number: member.member_number().to_string(),
            });
        }

        info!(number = member.member_number(), name = member.name(), "registered member");
        self.members.push(member);
        Ok(())
    }

    // ========================================================================
    // PLAN CREATION
    // ========================================================================

    /// Create a training plan from the given exercises and validate it
    /// against the facility's equipment registry.
    ///
    /// On failure the error message enumerates every piece of equipment
    /// that could not be found, as "Name (ID: id)", and the plan is not
    /// added to the registry. On success the plan is registered and the
    /// shared handle returned.
    pub fn create_plan(
        &mut self,
        name: &str,
        exercises: Vec<Exercise>,
    ) -> Result<Arc<TrainingPlan>, ValidationError> {
        if exercises.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        let mut plan = TrainingPlan::new(name)?;
        for exercise in exercises {
            plan.add_exercise(exercise);
        }

        if !plan.is_valid_against(&self.equipment) {
            let missing = self.missing_equipment(&plan);
            warn!(plan = plan.name(), ?missing, "plan creation rejected");
            return Err(ValidationError::UnknownEquipment { missing });
        }

        let plan = Arc::new(plan);
        info!(
            plan = plan.name(),
            exercises = plan.exercises().len(),
            "created training plan"
        );
        self.plans.push(Arc::clone(&plan));
        Ok(plan)
    }

    /// Collect "Name (ID: id)" entries for every exercise whose
    /// equipment is not in the registry. Duplicates are kept so the
    /// message mirrors the plan's exercise order.
    fn missing_equipment(&self, plan: &TrainingPlan) -> Vec<String> {
        plan.exercises()
            .iter()
            .map(Exercise::equipment)
            .filter(|needed| self.equipment_by_id(needed.id()).is_none())
            .map(|needed| format!("{} (ID: {})", needed.name(), needed.id()))
            .collect()
    }

    // ========================================================================
    // PLAN ASSIGNMENT
    // ========================================================================

    /// Assign a facility-created plan to a registered member.
    ///
    /// Referential checks come first: the member number must resolve in
    /// the member registry and the plan handle must be identity-present
    /// in the plan registry (a structurally equal "foreign" plan does
    /// not count). Only then is the member's own policy consulted; a
    /// lock or capacity violation surfaces unchanged as
    /// [`FacilityError::State`].
    pub fn assign_plan(
        &mut self,
        member_number: &str,
        plan: &Arc<TrainingPlan>,
    ) -> Result<(), FacilityError> {
        let member_index = self
            .members
            .iter()
            .position(|m| m.member_number() == member_number)
            .ok_or_else(|| ValidationError::UnknownMember {
                number: member_number.to_string(),
            })?;

        if !self.plans.iter().any(|known| Arc::ptr_eq(known, plan)) {
            warn!(plan = plan.name(), "assignment of foreign plan rejected");
            return Err(ValidationError::ForeignPlan {
                name: plan.name().to_string(),
            }
            .into());
        }

        let member = &mut self.members[member_index];
        member.assign_plan(Arc::clone(plan))?;
        info!(
            member = member_number,
            plan = plan.name(),
            active = member.active_plans().len(),
            "assigned plan"
        );
        Ok(())
    }

    // ========================================================================
    // LOOKUPS & VIEWS
    // ========================================================================

    /// Look up equipment by id. Missing keys are not an error.
    pub fn equipment_by_id(&self, id: &str) -> Option<&Arc<Equipment>> {
        self.equipment.iter().find(|e| e.id() == id)
    }

    /// Look up a member by number.
    pub fn member_by_number(&self, number: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.member_number() == number)
    }

    /// Mutable member lookup, e.g. for toggling the lock flag.
    pub fn member_by_number_mut(&mut self, number: &str) -> Option<&mut Member> {
        debug!(number, "mutable member lookup");
        self.members.iter_mut().find(|m| m.member_number() == number)
    }

    /// Read-only view of the equipment registry.
    pub fn equipment(&self) -> &[Arc<Equipment>] {
        &self.equipment
    }

    /// Read-only view of the member registry.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Read-only view of the plan registry.
    pub fn plans(&self) -> &[Arc<TrainingPlan>] {
        &self.plans
    }
}

// ============================================================================
// TESTS
// ============================================================================
