//! Plan Store Client: the remote source of truth for week plans.
//!
//! [`PlanStore`] is the only seam between the cache and the network. Every
//! call is single-shot: no retries, no caching, no state. Failures surface as
//! [`OverloadError::Transport`](crate::OverloadError::Transport), except for
//! the two "absent" outcomes:
//!
//! - [`PlanStore::fetch_latest`] returns `Ok(None)` when the user has no plan
//!   yet. That is a valid answer, not an error.
//! - id-addressed calls fail with
//!   [`OverloadError::NotFound`](crate::OverloadError::NotFound).
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpPlanStore`]: REST client over `reqwest`, built with
//!   [`HttpStoreBuilder`].
//! - [`InMemoryPlanStore`]: server-equivalent store kept in memory, with
//!   call counters, failure injection and a hold gate for tests and demos.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{PlanId, WeekPlan, WeekPlanDraft},
};

pub mod builder;
pub mod http;
pub mod memory;

pub use builder::HttpStoreBuilder;
pub use http::HttpPlanStore;
pub use memory::{InMemoryPlanStore, StoreOperation};

/// Asynchronous access to the user's plans on the remote store.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Most recent (or server-side active) plan; `None` if none exists.
    async fn fetch_latest(&self) -> Result<Option<WeekPlan>>;

    /// Every plan owned by the user.
    async fn fetch_all(&self) -> Result<Vec<WeekPlan>>;

    /// A single plan by id.
    async fn fetch_by_id(&self, id: PlanId) -> Result<WeekPlan>;

    /// Persists a new plan; the store assigns its id.
    async fn create(&self, draft: &WeekPlanDraft) -> Result<WeekPlan>;

    /// Replaces the plan stored under `id`.
    async fn update(&self, id: PlanId, draft: &WeekPlanDraft) -> Result<WeekPlan>;

    /// Removes the plan stored under `id`.
    async fn delete(&self, id: PlanId) -> Result<()>;

    /// Marks the plan as the server-side active plan. Idempotent.
    async fn activate(&self, id: PlanId) -> Result<WeekPlan>;
}

/// Source of the anti-forgery token attached to every store request.
///
/// Obtaining the token (login, CSRF bootstrap) happens elsewhere; the store
/// only asks for the current value.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// A token fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
