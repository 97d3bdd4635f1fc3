// 🧍 Member - a registered person holding up to 3 active plans
//
// The member enforces the assignment policy itself: a locked member
// never accepts a plan, and the lock check strictly precedes the
// capacity check. A member who is both locked and at capacity reports
// the lock, not the capacity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;

use crate::entities::{non_blank, TrainingPlan};
use crate::error::{StateError, ValidationError};

/// A registered gym member.
///
/// Identity is the member number, set once at construction. Equality and
/// hashing are based solely on it.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    member_number: String,
    name: String,
    address: String,
    locked: bool,
    active_plans: Vec<Arc<TrainingPlan>>,
}

impl Member {
    /// Maximum number of active plans a member can hold at once.
    pub const MAX_ACTIVE_PLANS: usize = 3;

    /// Create a new member, unlocked and with no active plans.
    ///
    /// Member number and name are trimmed and must be non-blank. The
    /// address may be any string, including an empty one.
    pub fn new(member_number: &str, name: &str, address: &str) -> Result<Self, ValidationError> {
        Ok(Member {
            member_number: non_blank("member number", member_number)?,
            name: non_blank("member name", name)?,
            address: address.to_string(),
            locked: false,
            active_plans: Vec::new(),
        })
    }

    /// The unique member number. Set once at construction.
    pub fn member_number(&self) -> &str {
        &self.member_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = non_blank("member name", name)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock the member. Unconditional; existing plans stay.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Read-only view of the active plans, in assignment order.
    pub fn active_plans(&self) -> &[Arc<TrainingPlan>] {
        &self.active_plans
    }

    /// Add a plan to the member's active plans.
    ///
    /// Fails with [`StateError::MemberLocked`] if the member is locked,
    /// then with [`StateError::MemberAtCapacity`] if the member already
    /// holds [`Self::MAX_ACTIVE_PLANS`] plans. On failure the active
    /// plans are untouched.
    pub fn assign_plan(&mut self, plan: Arc<TrainingPlan>) -> Result<(), StateError> {
        if self.locked {
            return Err(StateError::MemberLocked {
                number: self.member_number.clone(),
                name: self.name.clone(),
            });
        }

        if self.active_plans.len() >= Self::MAX_ACTIVE_PLANS {
            return Err(StateError::MemberAtCapacity {
                number: self.member_number.clone(),
                name: self.name.clone(),
                max: Self::MAX_ACTIVE_PLANS,
            });
        }

        self.active_plans.push(plan);
        Ok(())
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.member_number == other.member_number
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.member_number.hash(state);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member [No: {}, Name: {}, Address: {}, Locked: {}, Active plans: {}]",
            self.member_number,
            self.name,
            self.address,
            self.locked,
            self.active_plans.len()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
