//! In-memory [`PlanStore`] with the same observable semantics as the server.
//!
//! Besides holding plans it records how often each operation was called,
//! can fail the next call of an operation with a chosen status, and can park
//! every call behind a [`StoreHold`] until the hold is dropped. The hold lets
//! callers observe the intermediate state of an operation that is waiting on
//! the store.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use log::debug;
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};

use super::PlanStore;
use crate::{
    error::{OverloadError, Result},
    models::{PlanId, WeekPlan, WeekPlanDraft},
};

/// Store operations, used to address counters and injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    FetchLatest,
    FetchAll,
    FetchById,
    Create,
    Update,
    Delete,
    Activate,
}

#[derive(Default)]
struct Inner {
    plans: Vec<WeekPlan>,
    active: Option<PlanId>,
    next_id: u64,
    calls: HashMap<StoreOperation, usize>,
    failures: HashMap<StoreOperation, VecDeque<(u16, String)>>,
    gates: HashMap<StoreOperation, Arc<RwLock<()>>>,
}

/// Parks every store call while alive.
pub struct StoreHold {
    _guard: OwnedRwLockWriteGuard<()>,
}

/// Plan store backed by process memory.
#[derive(Default)]
pub struct InMemoryPlanStore {
    inner: Mutex<Inner>,
    gate: Arc<RwLock<()>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding the given plans. Ids are kept; new
    /// plans get ids above the largest seeded one.
    pub fn with_plans(plans: Vec<WeekPlan>) -> Self {
        let next_id = plans.iter().map(|plan| plan.id.0).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                plans,
                next_id,
                ..Default::default()
            }),
            gate: Arc::default(),
        }
    }

    /// Snapshot of the stored plans in insertion order.
    pub async fn plans(&self) -> Vec<WeekPlan> {
        self.inner.lock().await.plans.clone()
    }

    /// Id of the server-side active plan.
    pub async fn active_id(&self) -> Option<PlanId> {
        self.inner.lock().await.active
    }

    /// How many times `operation` has been called.
    pub async fn calls(&self, operation: StoreOperation) -> usize {
        self.inner
            .lock()
            .await
            .calls
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Makes the next call of `operation` fail with the given HTTP status.
    pub async fn fail_next(&self, operation: StoreOperation, status: u16, message: &str) {
        self.inner
            .lock()
            .await
            .failures
            .entry(operation)
            .or_default()
            .push_back((status, message.to_string()));
    }

    /// Parks every subsequent call until the returned hold is dropped.
    pub async fn hold(&self) -> StoreHold {
        StoreHold {
            _guard: Arc::clone(&self.gate).write_owned().await,
        }
    }

    /// Parks calls of `operation` only, until the returned hold is dropped.
    /// Other operations keep running.
    pub async fn hold_operation(&self, operation: StoreOperation) -> StoreHold {
        let gate = Arc::clone(self.inner.lock().await.gates.entry(operation).or_default());
        StoreHold {
            _guard: gate.write_owned().await,
        }
    }

    /// Records the call, waits for any hold to be released, yields once so
    /// callers always suspend, then applies an injected failure if queued.
    async fn enter(&self, operation: StoreOperation) -> Result<()> {
        let operation_gate = {
            let mut inner = self.inner.lock().await;
            *inner.calls.entry(operation).or_insert(0) += 1;
            inner.gates.get(&operation).cloned()
        };

        drop(self.gate.read().await);
        if let Some(gate) = operation_gate {
            drop(gate.read().await);
        }
        tokio::task::yield_now().await;

        let failure = self
            .inner
            .lock()
            .await
            .failures
            .get_mut(&operation)
            .and_then(VecDeque::pop_front);
        match failure {
            Some((status, message)) => {
                debug!("Injected {status} failure for {operation:?}");
                Err(OverloadError::transport(Some(status)).with_message(message))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn fetch_latest(&self) -> Result<Option<WeekPlan>> {
        self.enter(StoreOperation::FetchLatest).await?;
        let inner = self.inner.lock().await;
        let active = inner
            .active
            .and_then(|id| inner.plans.iter().find(|plan| plan.id == id));
        Ok(active.or_else(|| inner.plans.last()).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<WeekPlan>> {
        self.enter(StoreOperation::FetchAll).await?;
        Ok(self.inner.lock().await.plans.clone())
    }

    async fn fetch_by_id(&self, id: PlanId) -> Result<WeekPlan> {
        self.enter(StoreOperation::FetchById).await?;
        let inner = self.inner.lock().await;
        inner
            .plans
            .iter()
            .find(|plan| plan.id == id)
            .cloned()
            .ok_or(OverloadError::NotFound { id })
    }

    async fn create(&self, draft: &WeekPlanDraft) -> Result<WeekPlan> {
        self.enter(StoreOperation::Create).await?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let plan = WeekPlan {
            id: PlanId(inner.next_id),
            name: draft.name.clone(),
            days: draft.days.clone(),
            created_at: Some(Timestamp::now()),
        };
        inner.plans.push(plan.clone());
        Ok(plan)
    }

    async fn update(&self, id: PlanId, draft: &WeekPlanDraft) -> Result<WeekPlan> {
        self.enter(StoreOperation::Update).await?;
        let mut inner = self.inner.lock().await;
        let plan = inner
            .plans
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or(OverloadError::NotFound { id })?;
        plan.name = draft.name.clone();
        plan.days = draft.days.clone();
        Ok(plan.clone())
    }

    async fn delete(&self, id: PlanId) -> Result<()> {
        self.enter(StoreOperation::Delete).await?;
        let mut inner = self.inner.lock().await;
        let index = inner
            .plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or(OverloadError::NotFound { id })?;
        inner.plans.remove(index);
        if inner.active == Some(id) {
            inner.active = None;
        }
        Ok(())
    }

    async fn activate(&self, id: PlanId) -> Result<WeekPlan> {
        self.enter(StoreOperation::Activate).await?;
        let mut inner = self.inner.lock().await;
        let plan = inner
            .plans
            .iter()
            .find(|plan| plan.id == id)
            .cloned()
            .ok_or(OverloadError::NotFound { id })?;
        inner.active = Some(id);
        Ok(plan)
    }
}
