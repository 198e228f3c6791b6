//! Shared, observable cache of the user's week plans.
//!
//! [`PlanCache`] holds the active plan and the full plan list, mediates every
//! read and write against a [`PlanStore`], and publishes each change on a
//! [`tokio::sync::watch`] channel so views can re-render.
//!
//! # Consistency
//!
//! Reads never fail from the caller's point of view: a failed fetch is
//! logged and leaves the cache in a safe state. Writes propagate store
//! errors after logging them.
//!
//! Every slot (the active plan and the plan list) carries a revision that is
//! bumped by each local write. A read remembers the revision it started at
//! and its result is dropped if the slot was written while it was in flight,
//! so a slow fetch cannot overwrite a newer save or delete. Concurrent reads
//! of the same slot that overlap no write both apply; the last to resolve
//! wins.
//!
//! A failed delete puts the list back as it was before the delete only when
//! nothing else changed the list in the meantime, neither a local write nor
//! a fetched list. Otherwise only the removed plan is re-inserted, so a list
//! fetched while the delete was pending is kept.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use overload_core::{cache::PlanCache, store::InMemoryPlanStore};
//!
//! # async fn example() {
//! let cache = PlanCache::new(Arc::new(InMemoryPlanStore::new()));
//! cache.ensure_all().await;
//! assert!(cache.snapshot().plans_loaded());
//! assert!(cache.snapshot().all_plans().is_empty());
//! # }
//! ```

mod state;


use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::watch;

pub use self::state::CacheState;
use crate::{
    error::{OverloadError, Result},
    models::{PlanId, WeekPlan, WeekPlanDraft},
    store::PlanStore,
};

#[derive(Debug, Clone, Copy)]
enum Slot {
    Active,
    Plans,
}

/// Process-wide plan cache.
///
/// Construct one per session and share it behind an [`Arc`]; every method
/// takes `&self`.
pub struct PlanCache {
    store: Arc<dyn PlanStore>,
    state: watch::Sender<CacheState>,
}

impl PlanCache {
    /// Creates an empty cache in front of `store`.
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        let (state, _) = watch::channel(CacheState::default());
        Self { store, state }
    }

    /// Subscribes to cache changes. The receiver sees the current state
    /// immediately and is notified after every change.
    pub fn subscribe(&self) -> watch::Receiver<CacheState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> CacheState {
        self.state.borrow().clone()
    }

    pub fn active_plan(&self) -> Option<WeekPlan> {
        self.state.borrow().active_plan.clone()
    }

    pub fn all_plans(&self) -> Vec<WeekPlan> {
        self.state.borrow().all_plans.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Fetches the latest plan and makes it the active plan.
    ///
    /// An absent latest plan clears the active plan. A failure is logged and
    /// leaves the active plan untouched.
    pub async fn refresh_active(&self) {
        if let Some(revision) = self.begin_fetch(Slot::Active, |_| true) {
            self.load_active(revision).await;
        }
    }

    /// Fetches the full plan list and replaces the cached one.
    ///
    /// A failure is logged and leaves the list empty.
    pub async fn refresh_all(&self) {
        if let Some(revision) = self.begin_fetch(Slot::Plans, |_| true) {
            self.load_all(revision).await;
        }
    }

    /// Refreshes the active plan unless one is cached or a fetch of it is
    /// already in flight. Returns whether a fetch was issued.
    pub async fn ensure_active(&self) -> bool {
        let guard = |state: &CacheState| state.active_plan.is_none() && state.active_fetches == 0;
        match self.begin_fetch(Slot::Active, guard) {
            Some(revision) => {
                self.load_active(revision).await;
                true
            }
            None => false,
        }
    }

    /// Refreshes the plan list unless it has been loaded or a fetch of it is
    /// already in flight. Returns whether a fetch was issued.
    pub async fn ensure_all(&self) -> bool {
        let guard = |state: &CacheState| !state.plans_loaded && state.list_fetches == 0;
        match self.begin_fetch(Slot::Plans, guard) {
            Some(revision) => {
                self.load_all(revision).await;
                true
            }
            None => false,
        }
    }

    /// Fetches one plan from the store without touching the cache.
    ///
    /// Returns `Ok(None)` when the plan does not exist.
    pub async fn fetch_plan(&self, id: PlanId) -> Result<Option<WeekPlan>> {
        match self.store.fetch_by_id(id).await {
            Ok(plan) => Ok(Some(plan)),
            Err(OverloadError::NotFound { .. }) => Ok(None),
            Err(e) => {
                error!("Error fetching plan {id}: {e}");
                Err(e)
            }
        }
    }

    /// Persists `draft`, creating a plan when it has no id and updating the
    /// existing one otherwise.
    ///
    /// The saved plan becomes the active plan and replaces (or is appended
    /// to) its entry in the plan list.
    pub async fn save_plan(&self, draft: &WeekPlanDraft) -> Result<WeekPlan> {
        let result = match draft.id {
            None => self.store.create(draft).await,
            Some(id) => self.store.update(id, draft).await,
        };

        match result {
            Ok(plan) => {
                info!("Saved plan {} ({})", plan.id, plan.name);
                self.install(plan.clone());
                Ok(plan)
            }
            Err(e) => {
                error!("Error saving week plan: {e}");
                Err(e)
            }
        }
    }

    /// Deletes a plan, removing it from the list before the store confirms.
    ///
    /// The active plan is cleared when it is the deleted plan. If the store
    /// rejects the delete the list is restored and the error returned; the
    /// active plan stays cleared until the next refresh. A plan the store no
    /// longer knows counts as deleted.
    pub async fn delete_plan(&self, id: PlanId) -> Result<()> {
        let mut pre_image = Vec::new();
        let mut removed = None;
        let mut revision = 0;
        let mut loads = 0;
        self.state.send_modify(|state| {
            pre_image = state.all_plans.clone();
            loads = state.plans_loads;
            removed = state.remove(id);
            if state.is_active(id) {
                state.active_plan = None;
                state.active_revision += 1;
            }
            state.plans_revision += 1;
            revision = state.plans_revision;
        });

        match self.store.delete(id).await {
            Ok(()) => {
                info!("Deleted plan {id}");
                Ok(())
            }
            Err(OverloadError::NotFound { .. }) => {
                warn!("Plan {id} was already gone from the server");
                Ok(())
            }
            Err(e) => {
                error!("Error deleting plan {id}, restoring it: {e}");
                self.state.send_modify(|state| {
                    if state.plans_revision == revision && state.plans_loads == loads {
                        state.all_plans = pre_image;
                    } else if let Some((index, plan)) = removed {
                        // The list moved on; put the plan back where it was.
                        if state.plan(id).is_none() {
                            let index = index.min(state.all_plans.len());
                            state.all_plans.insert(index, plan);
                        }
                    }
                    state.plans_revision += 1;
                });
                Err(e)
            }
        }
    }

    /// Makes `plan` the active plan locally, without a store round trip.
    pub fn select_active(&self, plan: WeekPlan) {
        debug!("Selecting plan {} as active", plan.id);
        self.state.send_modify(|state| {
            state.active_plan = Some(plan);
            state.active_revision += 1;
        });
    }

    /// Marks a plan active on the server and installs the returned plan.
    pub async fn activate_plan(&self, id: PlanId) -> Result<WeekPlan> {
        match self.store.activate(id).await {
            Ok(plan) => {
                info!("Activated plan {id}");
                self.install(plan.clone());
                Ok(plan)
            }
            Err(e) => {
                error!("Error activating plan {id}: {e}");
                Err(e)
            }
        }
    }

    /// Clears the cache. Reads still in flight are discarded when they
    /// resolve.
    pub fn reset(&self) {
        debug!("Resetting plan cache");
        self.state.send_modify(|state| {
            state.active_plan = None;
            state.all_plans.clear();
            state.plans_loaded = false;
            state.active_revision += 1;
            state.plans_revision += 1;
        });
    }

    fn install(&self, plan: WeekPlan) {
        self.state.send_modify(|state| {
            state.active_plan = Some(plan.clone());
            state.upsert(plan);
            state.active_revision += 1;
            state.plans_revision += 1;
        });
    }

    /// Starts a read of `slot` if `guard` allows it, returning the slot
    /// revision the read must still match when it resolves.
    fn begin_fetch(&self, slot: Slot, guard: impl FnOnce(&CacheState) -> bool) -> Option<u64> {
        let mut revision = None;
        self.state.send_if_modified(|state| {
            if !guard(state) {
                return false;
            }
            revision = Some(match slot {
                Slot::Active => {
                    state.active_fetches += 1;
                    state.active_revision
                }
                Slot::Plans => {
                    state.list_fetches += 1;
                    state.plans_revision
                }
            });
            true
        });
        if revision.is_none() {
            debug!("Skipping {slot:?} fetch, already cached or in flight");
        }
        revision
    }

    async fn load_active(&self, revision: u64) {
        let result = self.store.fetch_latest().await;
        self.state.send_modify(|state| {
            state.active_fetches = state.active_fetches.saturating_sub(1);
            if state.active_revision != revision {
                debug!("Discarding stale latest plan");
                return;
            }
            match result {
                Ok(plan) => state.active_plan = plan,
                Err(e) => warn!("Error fetching latest plan: {e}"),
            }
        });
    }

    async fn load_all(&self, revision: u64) {
        let result = self.store.fetch_all().await;
        self.state.send_modify(|state| {
            state.list_fetches = state.list_fetches.saturating_sub(1);
            if state.plans_revision != revision {
                debug!("Discarding stale plan list");
                return;
            }
            state.plans_loads += 1;
            match result {
                Ok(plans) => {
                    debug!("Cached {} plans", plans.len());
                    state.all_plans = plans;
                    state.plans_loaded = true;
                }
                Err(e) => {
                    warn!("Error fetching plans: {e}");
                    state.all_plans.clear();
                    state.plans_loaded = false;
                }
            }
        });
    }
}
