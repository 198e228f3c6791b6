//! Data models for week plans.
//!
//! This module contains the core domain models of a weekly workout schedule:
//! a [`WeekPlan`] maps each [`DayKey`] to a [`DayPlan`], which is either a rest
//! day or a named workout made of [`ExercisePlan`]s and their [`SetPlan`]s.
//! Display implementations live in [`crate::display::models`].
//!
//! [`WeekPlanDraft`] is the validated output of the plan builder, and the
//! [`wire`] submodule adapts both to the store's JSON shape.
//!
//! # Examples
//!
//! ```rust
//! use overload_core::models::{DayKey, DayPlan, ExercisePlan, SetPlan};
//!
//! let push = DayPlan::workout(
//!     "Push Day",
//!     vec![ExercisePlan::new("Bench Press", vec![SetPlan::new(8, 135.0)])],
//! );
//! assert!(push.is_complete());
//! assert_eq!("wed".parse::<DayKey>().unwrap(), DayKey::Wed);
//! ```

pub mod day;
pub mod draft;
pub mod plan;
pub mod unit;
pub mod wire;


pub use day::DayKey;
pub use draft::WeekPlanDraft;
pub use plan::{DayPlan, ExercisePlan, PlanId, SetPlan, WeekPlan, REST_DAY_NAME};
pub use unit::WeightUnit;
pub use wire::{WireDraft, WirePlan};
