//! Snapshot of the plan cache as seen by views.

use crate::models::{PlanId, WeekPlan};

/// Cache contents published to subscribers.
///
/// Views read the active plan, the plan list and the loading flag. The
/// in-flight counters and slot revisions are bookkeeping for the cache
/// itself: a read that resolves after a newer write to its slot is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheState {
    pub(crate) active_plan: Option<WeekPlan>,
    pub(crate) all_plans: Vec<WeekPlan>,
    pub(crate) plans_loaded: bool,
    pub(crate) active_fetches: usize,
    pub(crate) list_fetches: usize,
    pub(crate) active_revision: u64,
    pub(crate) plans_revision: u64,
    pub(crate) plans_loads: u64,
}

impl CacheState {
    /// The plan currently in effect, if any.
    pub fn active_plan(&self) -> Option<&WeekPlan> {
        self.active_plan.as_ref()
    }

    /// All of the user's plans, in the order they were fetched or added.
    pub fn all_plans(&self) -> &[WeekPlan] {
        &self.all_plans
    }

    /// Looks up a cached plan by id.
    pub fn plan(&self, id: PlanId) -> Option<&WeekPlan> {
        self.all_plans.iter().find(|plan| plan.id == id)
    }

    /// Whether any read against the store is in flight.
    pub fn is_loading(&self) -> bool {
        self.active_fetches > 0 || self.list_fetches > 0
    }

    /// Whether the cached plan list came from a successful fetch. False
    /// after construction, a reset, or a fetch that failed.
    pub fn plans_loaded(&self) -> bool {
        self.plans_loaded
    }

    /// Whether `id` is the active plan.
    pub fn is_active(&self, id: PlanId) -> bool {
        self.active_plan.as_ref().is_some_and(|plan| plan.id == id)
    }

    /// Replaces the entry with the same id, or appends a new one.
    pub(crate) fn upsert(&mut self, plan: WeekPlan) {
        match self.all_plans.iter_mut().find(|existing| existing.id == plan.id) {
            Some(existing) => *existing = plan,
            None => self.all_plans.push(plan),
        }
    }

    /// Removes the entry with `id`, returning its former position.
    pub(crate) fn remove(&mut self, id: PlanId) -> Option<(usize, WeekPlan)> {
        let index = self.all_plans.iter().position(|plan| plan.id == id)?;
        Some((index, self.all_plans.remove(index)))
    }
}
