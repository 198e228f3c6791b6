//! Core library for the Overload workout planner.
//!
//! This crate holds the client-side state layer for weekly workout plans:
//!
//! - **Plan Store Client** ([`store`]): the [`PlanStore`] trait with an HTTP
//!   implementation talking to the plan server and an in-memory one.
//! - **Plan Cache** ([`cache`]): the shared, observable view of the active
//!   plan and the plan list, with optimistic deletes and stale-read
//!   protection.
//! - **Plan Builder** ([`builder`]): screen-local working state that turns
//!   day-by-day edits into a validated [`WeekPlanDraft`].
//!
//! Data flows one way for reads (store → cache → views) and every write is
//! funneled through the cache (builder → cache → store → cache).
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use overload_core::{
//!     builder::WeekPlanBuilder,
//!     cache::PlanCache,
//!     models::DayKey,
//!     store::InMemoryPlanStore,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = PlanCache::new(Arc::new(InMemoryPlanStore::new()));
//!
//! let mut builder = WeekPlanBuilder::new();
//! builder.set_workout_name("Strength Block");
//! builder.select_day(DayKey::Mon);
//! builder.set_rest(false);
//! builder.set_day_name("Legs");
//! builder.commit_day()?;
//!
//! let plan = cache.save_plan(&builder.to_canonical_plan()?).await?;
//! assert_eq!(cache.active_plan(), Some(plan));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use builder::WeekPlanBuilder;
pub use cache::{CacheState, PlanCache};
pub use config::Config;
pub use display::{CreateResult, DeleteResult, OperationStatus, PlanList, UpdateResult};
pub use error::{OverloadError, Result};
pub use models::{
    DayKey, DayPlan, ExercisePlan, PlanId, SetPlan, WeekPlan, WeekPlanDraft, WeightUnit,
};
pub use params::{CreatePlan, DeletePlan, EditPlan, Id};
pub use store::{HttpPlanStore, HttpStoreBuilder, InMemoryPlanStore, PlanStore};
