//! Canonical, validated plan ready to be handed to the plan store.

use std::collections::BTreeMap;

use super::{DayKey, DayPlan, PlanId, WeekPlan};

/// A complete week plan that has passed builder validation but may not be
/// persisted yet.
///
/// `id` is `None` until the plan has been saved once; a draft carrying an id
/// is saved as an update of that plan.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlanDraft {
    pub id: Option<PlanId>,
    pub name: String,
    pub days: BTreeMap<DayKey, DayPlan>,
}

impl WeekPlanDraft {
    /// Whether saving this draft creates a new plan.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<WeekPlan> for WeekPlanDraft {
    fn from(plan: WeekPlan) -> Self {
        Self {
            id: Some(plan.id),
            name: plan.name,
            days: plan.days,
        }
    }
}
