//! Week plan model definition and related functionality.

use std::{collections::BTreeMap, fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::DayKey;

/// Server-assigned identifier of a persisted week plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PlanId(pub u64);

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PlanId)
            .map_err(|_| format!("Invalid plan ID: {s}"))
    }
}

/// A single prescribed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetPlan {
    /// Repetitions as entered (at least one)
    pub reps: u32,

    /// Load in the session's display unit; the unit itself is not stored
    pub weight: f64,

    /// Whether this is a warm-up set
    #[serde(default)]
    pub is_warmup: bool,
}

impl SetPlan {
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight,
            is_warmup: false,
        }
    }

    pub fn warmup(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight,
            is_warmup: true,
        }
    }

    /// Checks the invariants a set must hold before it enters a draft.
    pub fn validate(&self) -> Result<(), String> {
        if self.reps == 0 {
            return Err("reps must be at least 1".to_string());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(format!("weight must be a non-negative number, got {}", self.weight));
        }
        Ok(())
    }
}

impl FromStr for SetPlan {
    type Err = String;

    /// Parses `REPSxWEIGHT` with an optional trailing `w` marking a warm-up,
    /// e.g. `8x135` or `10x95w`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_lowercase();
        let (body, is_warmup) = match spec.strip_suffix('w') {
            Some(body) => (body, true),
            None => (spec.as_str(), false),
        };
        let (reps, weight) = body
            .split_once('x')
            .ok_or_else(|| format!("Invalid set '{s}': expected REPSxWEIGHT"))?;
        let reps = reps
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid reps in set '{s}'"))?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid weight in set '{s}'"))?;

        let set = SetPlan {
            reps,
            weight,
            is_warmup,
        };
        set.validate().map_err(|reason| format!("Invalid set '{s}': {reason}"))?;
        Ok(set)
    }
}

/// One exercise of a workout day with its ordered sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExercisePlan {
    /// Exercise name (catalog entry or custom free text)
    pub exercise: String,

    /// Ordered sets
    #[serde(default)]
    pub sets: Vec<SetPlan>,
}

impl ExercisePlan {
    pub fn new(exercise: impl Into<String>, sets: Vec<SetPlan>) -> Self {
        Self {
            exercise: exercise.into(),
            sets,
        }
    }
}

/// Display name given to every rest day.
pub const REST_DAY_NAME: &str = "Rest";

/// One day's entry: either rest, or a named workout with exercises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Display name ("Rest" for rest days)
    #[serde(default)]
    pub name: String,

    /// Whether the day is a rest day
    pub is_rest: bool,

    /// Ordered exercises; always empty on rest days
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<ExercisePlan>,
}

impl DayPlan {
    /// A rest day.
    pub fn rest() -> Self {
        Self {
            name: REST_DAY_NAME.to_string(),
            is_rest: true,
            exercises: Vec::new(),
        }
    }

    /// A named workout day.
    pub fn workout(name: impl Into<String>, exercises: Vec<ExercisePlan>) -> Self {
        Self {
            name: name.into(),
            is_rest: false,
            exercises,
        }
    }

    /// Rest days ignore whatever name or exercises they were given.
    pub fn normalized(self) -> Self {
        if self.is_rest {
            Self::rest()
        } else {
            self
        }
    }

    /// A day counts as complete when it is a rest day or a named workout.
    pub fn is_complete(&self) -> bool {
        self.is_rest || !self.name.trim().is_empty()
    }
}

impl Default for DayPlan {
    fn default() -> Self {
        Self::rest()
    }
}

/// A named, persisted seven-day workout schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    /// Server-assigned identifier
    pub id: PlanId,

    /// Display name of the plan
    pub name: String,

    /// Day entries keyed by day code
    pub days: BTreeMap<DayKey, DayPlan>,

    /// Creation timestamp reported by the server, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl WeekPlan {
    /// Entry for the given day, if present.
    pub fn day(&self, key: DayKey) -> Option<&DayPlan> {
        self.days.get(&key)
    }

    /// Whether all seven days are present and complete.
    pub fn is_complete(&self) -> bool {
        DayKey::ALL
            .iter()
            .all(|key| self.days.get(key).is_some_and(DayPlan::is_complete))
    }

    /// Number of workout (non-rest) days.
    pub fn workout_days(&self) -> usize {
        self.days.values().filter(|day| !day.is_rest).count()
    }
}
