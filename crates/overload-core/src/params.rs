//! Parameter structures for plan operations.
//!
//! These structures carry requests from an interface layer (the CLI today)
//! into the core without any framework-specific derives. Interface layers
//! define their own argument types and convert into these.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Plan Builder   │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  → draft        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Day and exercise assignments parse from compact text:
//!
//! ```rust
//! use overload_core::{
//!     models::{DayKey, SetPlan},
//!     params::ExerciseAssignment,
//! };
//!
//! let bench: ExerciseAssignment = "wed=bench press:10x95w,8x135".parse().unwrap();
//! assert_eq!(bench.day, DayKey::Wed);
//! assert_eq!(bench.exercise, "Bench Press");
//! assert_eq!(bench.sets, vec![SetPlan::warmup(10, 95.0), SetPlan::new(8, 135.0)]);
//! ```

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    builder::WeekPlanBuilder,
    catalog::ExerciseChoice,
    error::{OverloadError, Result},
    models::{DayKey, PlanId, SetPlan, WeekPlan, WeekPlanDraft},
};

/// Parameters for operations requiring just a plan id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id {
    pub id: PlanId,
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePlan {
    pub id: PlanId,

    /// Deletion is refused unless the caller confirmed it
    pub confirmed: bool,
}

impl DeletePlan {
    pub fn validate(&self) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(OverloadError::validation(format!(
                "deleting plan {} requires confirmation",
                self.id
            )))
        }
    }
}

/// Names a workout day, parsed from `DAY=NAME`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub day: DayKey,
    pub name: String,
}

fn split_day(s: &str) -> std::result::Result<(DayKey, &str), String> {
    let (day, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid assignment '{s}': expected DAY=..."))?;
    Ok((day.parse()?, rest.trim()))
}

impl FromStr for DayAssignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (day, name) = split_day(s)?;
        if name.is_empty() {
            return Err(format!("Invalid assignment '{s}': workout name is empty"));
        }
        Ok(Self {
            day,
            name: name.to_string(),
        })
    }
}

/// Adds an exercise to a day, parsed from `DAY=EXERCISE[:SETS]` where SETS
/// is a comma-separated list such as `8x135,10x95w`.
///
/// Exercise names matching the catalog take the catalog's spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAssignment {
    pub day: DayKey,
    pub exercise: String,
    pub sets: Vec<SetPlan>,
}

impl FromStr for ExerciseAssignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (day, rest) = split_day(s)?;
        let (name, sets) = match rest.split_once(':') {
            Some((name, sets)) => (name, Some(sets)),
            None => (rest, None),
        };
        if name.trim().is_empty() {
            return Err(format!("Invalid exercise '{s}': name is empty"));
        }
        let sets = match sets {
            Some(sets) => sets
                .split(',')
                .filter(|set| !set.trim().is_empty())
                .map(str::parse)
                .collect::<std::result::Result<Vec<SetPlan>, _>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            day,
            exercise: ExerciseChoice::resolve(name).into(),
            sets,
        })
    }
}

/// Parameters for creating a plan. Days without a workout are rest days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePlan {
    pub name: String,
    pub workouts: Vec<DayAssignment>,
    pub exercises: Vec<ExerciseAssignment>,
}

impl CreatePlan {
    /// Builds the draft for a new plan.
    pub fn to_draft(&self) -> Result<WeekPlanDraft> {
        let mut builder = WeekPlanBuilder::new();
        builder.set_workout_name(self.name.as_str());
        apply_days(&mut builder, &[], &self.workouts, &self.exercises)?;
        builder.to_canonical_plan()
    }
}

/// Parameters for editing a saved plan. Only the named days change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditPlan {
    pub id: PlanId,
    pub name: Option<String>,
    pub rest: Vec<DayKey>,
    pub workouts: Vec<DayAssignment>,
    pub exercises: Vec<ExerciseAssignment>,
}

impl EditPlan {
    pub fn new(id: PlanId) -> Self {
        Self {
            id,
            name: None,
            rest: Vec::new(),
            workouts: Vec::new(),
            exercises: Vec::new(),
        }
    }

    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || !self.rest.is_empty()
            || !self.workouts.is_empty()
            || !self.exercises.is_empty()
    }

    /// Applies the edits to `plan`, returning the draft to save and a
    /// description of each change.
    pub fn apply(&self, plan: &WeekPlan) -> Result<(WeekPlanDraft, Vec<String>)> {
        let mut builder = WeekPlanBuilder::from_plan(plan);
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            builder.set_workout_name(name.as_str());
            changes.push(format!("Renamed to {}", name.trim()));
        }
        changes.extend(apply_days(
            &mut builder,
            &self.rest,
            &self.workouts,
            &self.exercises,
        )?);
        Ok((builder.to_canonical_plan()?, changes))
    }
}

/// Commits rest days, then each day touched by a workout or exercise
/// assignment. A later workout assignment for the same day wins.
fn apply_days(
    builder: &mut WeekPlanBuilder,
    rest: &[DayKey],
    workouts: &[DayAssignment],
    exercises: &[ExerciseAssignment],
) -> Result<Vec<String>> {
    let mut changes = Vec::new();

    if let Some(conflict) = rest.iter().find(|day| {
        workouts.iter().any(|w| w.day == **day) || exercises.iter().any(|e| e.day == **day)
    }) {
        return Err(OverloadError::validation(format!(
            "{} cannot be both a rest day and a workout",
            conflict.full_name()
        )));
    }

    for day in rest.iter().collect::<BTreeSet<_>>() {
        builder.select_day(*day);
        builder.set_rest(true);
        builder.commit_day()?;
        changes.push(format!("{} is now a rest day", day.full_name()));
    }

    let touched: BTreeSet<DayKey> = workouts
        .iter()
        .map(|w| w.day)
        .chain(exercises.iter().map(|e| e.day))
        .collect();
    for day in touched {
        builder.select_day(day);
        let day_exercises: Vec<&ExerciseAssignment> =
            exercises.iter().filter(|e| e.day == day).collect();

        match workouts.iter().rev().find(|w| w.day == day) {
            Some(workout) => {
                builder.set_rest(false);
                builder.set_day_name(workout.name.as_str());
                builder.clear_exercises();
                changes.push(format!("{} is now {}", day.full_name(), workout.name));
            }
            None if builder.editing_day().is_rest => {
                return Err(OverloadError::validation(format!(
                    "{} is a rest day and needs a workout name before exercises",
                    day.full_name()
                )));
            }
            None => {
                builder.clear_exercises();
                changes.push(format!("Replaced exercises on {}", day.full_name()));
            }
        }

        for assignment in day_exercises {
            let index = builder.add_exercise(assignment.exercise.as_str());
            builder.set_exercise_sets(index, assignment.sets.clone())?;
        }
        builder.commit_day()?;
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{DayPlan, ExercisePlan};

    fn saved_plan() -> WeekPlan {
        let mut days: BTreeMap<DayKey, DayPlan> =
            DayKey::ALL.iter().map(|key| (*key, DayPlan::rest())).collect();
        days.insert(
            DayKey::Mon,
            DayPlan::workout("Legs", vec![ExercisePlan::new("Back Squat", vec![SetPlan::new(5, 225.0)])]),
        );
        WeekPlan {
            id: PlanId(8),
            name: "Base".to_string(),
            days,
            created_at: None,
        }
    }

    #[test]
    fn test_assignment_parsing() {
        let workout: DayAssignment = "Friday = Pull Day".parse().unwrap();
        assert_eq!(workout.day, DayKey::Fri);
        assert_eq!(workout.name, "Pull Day");

        assert!("fri".parse::<DayAssignment>().is_err());
        assert!("fri=".parse::<DayAssignment>().is_err());
        assert!("someday=Legs".parse::<DayAssignment>().is_err());

        let custom: ExerciseAssignment = "sat=Sled Push".parse().unwrap();
        assert_eq!(custom.exercise, "Sled Push");
        assert!(custom.sets.is_empty());

        assert!("sat=:8x100".parse::<ExerciseAssignment>().is_err());
        assert!("sat=Row:8x".parse::<ExerciseAssignment>().is_err());
        assert!("sat=Row:0x100".parse::<ExerciseAssignment>().is_err());
    }

    #[test]
    fn test_create_plan_draft() {
        let params = CreatePlan {
            name: "Push Pull".to_string(),
            workouts: vec!["wed=Push Day".parse().unwrap()],
            exercises: vec!["wed=Bench Press:8x135".parse().unwrap()],
        };

        let draft = params.to_draft().unwrap();

        assert!(draft.is_new());
        assert_eq!(
            draft.days[&DayKey::Wed],
            DayPlan::workout(
                "Push Day",
                vec![ExercisePlan::new("Bench Press", vec![SetPlan::new(8, 135.0)])]
            )
        );
        assert_eq!(draft.days.values().filter(|day| day.is_rest).count(), 6);
    }

    #[test]
    fn test_create_plan_requires_name_and_workout_for_exercises() {
        let unnamed = CreatePlan::default();
        assert!(matches!(
            unnamed.to_draft(),
            Err(OverloadError::Validation { reason }) if reason == "missing workout name"
        ));

        let orphan = CreatePlan {
            name: "Plan".to_string(),
            workouts: Vec::new(),
            exercises: vec!["tue=Plank".parse().unwrap()],
        };
        assert!(matches!(
            orphan.to_draft(),
            Err(OverloadError::Validation { reason }) if reason.contains("Tuesday is a rest day")
        ));
    }

    #[test]
    fn test_edit_plan_replaces_named_days_only() {
        let mut edit = EditPlan::new(PlanId(8));
        edit.name = Some("Base v2".to_string());
        edit.rest = vec![DayKey::Mon];
        edit.workouts = vec!["thu=Upper".parse().unwrap()];
        edit.exercises = vec!["thu=Pull-Up:8x0".parse().unwrap()];

        let (draft, changes) = edit.apply(&saved_plan()).unwrap();

        assert_eq!(draft.id, Some(PlanId(8)));
        assert_eq!(draft.name, "Base v2");
        assert_eq!(draft.days[&DayKey::Mon], DayPlan::rest());
        assert_eq!(draft.days[&DayKey::Thu].name, "Upper");
        assert_eq!(draft.days[&DayKey::Thu].exercises[0].exercise, "Pull-Up");
        assert_eq!(
            changes,
            vec![
                "Renamed to Base v2".to_string(),
                "Monday is now a rest day".to_string(),
                "Thursday is now Upper".to_string(),
            ]
        );
    }

    #[test]
    fn test_edit_exercises_keep_day_name() {
        let mut edit = EditPlan::new(PlanId(8));
        edit.exercises = vec!["mon=Leg Press:12x300".parse().unwrap()];

        let (draft, changes) = edit.apply(&saved_plan()).unwrap();

        let monday = &draft.days[&DayKey::Mon];
        assert_eq!(monday.name, "Legs");
        assert_eq!(monday.exercises, vec![ExercisePlan::new("Leg Press", vec![SetPlan::new(12, 300.0)])]);
        assert_eq!(changes, vec!["Replaced exercises on Monday".to_string()]);
    }

    #[test]
    fn test_edit_rejects_conflicts_and_unconfirmed_delete() {
        let mut edit = EditPlan::new(PlanId(8));
        assert!(!edit.has_changes());
        edit.rest = vec![DayKey::Thu];
        edit.workouts = vec!["thu=Upper".parse().unwrap()];
        assert!(edit.has_changes());
        assert!(edit.apply(&saved_plan()).is_err());

        let delete = DeletePlan {
            id: PlanId(8),
            confirmed: false,
        };
        assert!(delete.validate().is_err());
        assert!(DeletePlan { confirmed: true, ..delete }.validate().is_ok());
    }
}
