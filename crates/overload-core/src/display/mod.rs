//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as the active-plan marker, the display
//! unit, or a creation/update banner. Everything renders as markdown for the
//! CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanList`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`],
//!   [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: model `Display` impls, [`WithUnit`] and [`DayEntry`]
//!
//! ## Usage
//!
//! ```rust
//! use overload_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Plan 3 is now active");
//! assert_eq!(status.to_string(), "Success: Plan 3 is now active\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::PlanList;
pub use datetime::LocalDateTime;
pub use models::{DayEntry, WithUnit};
pub use results::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
