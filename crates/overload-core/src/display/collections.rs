//! Collection wrapper types for displaying groups of plans.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{DayKey, PlanId, WeekPlan};

/// Newtype wrapper for displaying the plan list with the active plan
/// marked.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use overload_core::{
///     display::PlanList,
///     models::{PlanId, WeekPlan},
/// };
///
/// let plan = WeekPlan {
///     id: PlanId(1),
///     name: "Hypertrophy".to_string(),
///     days: BTreeMap::new(),
///     created_at: None,
/// };
/// let list = PlanList::new(vec![plan]).with_active(Some(PlanId(1)));
/// let output = format!("{list}");
/// assert!(output.contains("## Hypertrophy (ID: 1) *active*"));
/// ```
pub struct PlanList {
    plans: Vec<WeekPlan>,
    active: Option<PlanId>,
}

impl PlanList {
    pub fn new(plans: Vec<WeekPlan>) -> Self {
        Self {
            plans,
            active: None,
        }
    }

    /// Marks the plan with this id as active.
    pub fn with_active(mut self, active: Option<PlanId>) -> Self {
        self.active = active;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn get(&self, index: usize) -> Option<&WeekPlan> {
        self.plans.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekPlan> {
        self.plans.iter()
    }
}

impl Index<usize> for PlanList {
    type Output = WeekPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.plans[index]
    }
}

impl<'a> IntoIterator for &'a PlanList {
    type Item = &'a WeekPlan;
    type IntoIter = std::slice::Iter<'a, WeekPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}

impl fmt::Display for PlanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return writeln!(f, "No plans found.");
        }

        for plan in &self.plans {
            let marker = if self.active == Some(plan.id) {
                " *active*"
            } else {
                ""
            };
            writeln!(f, "## {} (ID: {}){marker}", plan.name, plan.id)?;
            writeln!(f)?;

            let workout_days: Vec<&str> = DayKey::ALL
                .iter()
                .filter(|key| plan.day(**key).is_some_and(|day| !day.is_rest))
                .map(|key| key.as_str())
                .collect();
            if workout_days.is_empty() {
                writeln!(f, "- **Workout days**: none")?;
            } else {
                writeln!(
                    f,
                    "- **Workout days**: {} ({})",
                    workout_days.len(),
                    workout_days.join(", ")
                )?;
            }
            if let Some(created_at) = &plan.created_at {
                writeln!(f, "- **Created**: {}", LocalDateTime(created_at))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
