//! Serialization boundary between the plan model and the remote store.
//!
//! The store names the day map `data`; the model calls it `days`. The rename
//! happens here and nowhere else.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use super::{DayKey, DayPlan, PlanId, WeekPlan, WeekPlanDraft};
use crate::error::{OverloadError, Result};

/// Plan object as returned by the store.
///
/// Every field is optional on input so partial responses still parse and can
/// be rejected with a precise reason by [`WeekPlan::try_from`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WirePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlanId>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<DayKey, DayPlan>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_at: Option<Timestamp>,
}

/// Request body for create and update calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WireDraft<'a> {
    pub name: &'a str,
    pub data: &'a BTreeMap<DayKey, DayPlan>,
}

impl<'a> From<&'a WeekPlanDraft> for WireDraft<'a> {
    fn from(draft: &'a WeekPlanDraft) -> Self {
        Self {
            name: &draft.name,
            data: &draft.days,
        }
    }
}

impl From<&WeekPlan> for WirePlan {
    fn from(plan: &WeekPlan) -> Self {
        Self {
            id: Some(plan.id),
            name: plan.name.clone(),
            data: Some(plan.days.clone()),
            created_at: plan.created_at,
        }
    }
}

impl TryFrom<WirePlan> for WeekPlan {
    type Error = OverloadError;

    fn try_from(wire: WirePlan) -> Result<Self> {
        let id = wire
            .id
            .ok_or_else(|| OverloadError::invalid_response("plan is missing an id"))?;
        let data = wire.data.ok_or_else(|| {
            OverloadError::invalid_response(format!("plan {id} is missing its day data"))
        })?;

        Ok(WeekPlan {
            id,
            name: wire.name,
            days: data
                .into_iter()
                .map(|(key, day)| (key, day.normalized()))
                .collect(),
            created_at: wire.created_at,
        })
    }
}

impl WeekPlan {
    /// Decodes a plan from a raw JSON value returned by the store.
    pub fn from_wire_value(value: serde_json::Value) -> Result<Self> {
        let wire: WirePlan = serde_json::from_value(value)
            .map_err(|e| OverloadError::invalid_response(e.to_string()))?;
        WeekPlan::try_from(wire)
    }
}

/// Accepts any timestamp string jiff understands and drops the rest; an
/// unparseable `created_at` must not make the whole plan unusable.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<Timestamp>().ok()))
}
