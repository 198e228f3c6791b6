//! Screen-local working state for composing a week plan.
//!
//! [`WeekPlanBuilder`] holds a map of committed day drafts plus a set of
//! editing fields for the currently selected day. Edits only reach the day
//! map when [`WeekPlanBuilder::commit_day`] is called; selecting another day
//! discards whatever was being edited.
//!
//! A fresh builder seeds all seven days as rest days, so it is complete by
//! construction and only needs a workout name to produce a draft.
//!
//! # Example
//!
//! ```rust
//! use overload_core::{
//!     builder::WeekPlanBuilder,
//!     models::{DayKey, SetPlan},
//! };
//!
//! let mut builder = WeekPlanBuilder::new();
//! builder.set_workout_name("Strength Block");
//! builder.select_day(DayKey::Wed);
//! builder.set_rest(false);
//! builder.set_day_name("Push Day");
//! let bench = builder.add_exercise("Bench Press");
//! builder.add_set(bench, SetPlan::new(8, 135.0)).unwrap();
//! builder.commit_day().unwrap();
//!
//! let draft = builder.to_canonical_plan().unwrap();
//! assert_eq!(draft.days[&DayKey::Wed].name, "Push Day");
//! assert!(draft.days[&DayKey::Mon].is_rest);
//! ```

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::{OverloadError, Result},
    models::{
        DayKey, DayPlan, ExercisePlan, PlanId, SetPlan, WeekPlan, WeekPlanDraft, WeightUnit,
        REST_DAY_NAME,
    },
};

/// In-progress week plan.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlanBuilder {
    id: Option<PlanId>,
    workout_name: String,
    day_drafts: BTreeMap<DayKey, DayPlan>,
    selected_day: Option<DayKey>,
    editing: DayPlan,
    unit: WeightUnit,
}

impl Default for WeekPlanBuilder {
    fn default() -> Self {
        Self {
            id: None,
            workout_name: String::new(),
            day_drafts: all_rest_days(),
            selected_day: None,
            editing: DayPlan::rest(),
            unit: WeightUnit::default(),
        }
    }
}

fn all_rest_days() -> BTreeMap<DayKey, DayPlan> {
    DayKey::ALL.iter().map(|key| (*key, DayPlan::rest())).collect()
}

impl WeekPlanBuilder {
    /// Creates a builder for a new plan with every day set to rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder editing an existing plan.
    pub fn from_plan(plan: &WeekPlan) -> Self {
        let mut builder = Self::new();
        builder.load_plan(plan);
        builder
    }

    /// Replaces the builder contents with a saved plan.
    ///
    /// The plan id is kept so the resulting draft saves as an update. Days
    /// missing from the plan stay missing until they are committed. The
    /// display unit is left as it was.
    pub fn load_plan(&mut self, plan: &WeekPlan) {
        debug!("Loading plan {} into builder", plan.id);
        self.id = Some(plan.id);
        self.workout_name = plan.name.clone();
        self.day_drafts = plan.days.clone();
        self.clear_editing();
    }

    /// Returns the builder to a new all-rest plan. The display unit is a
    /// session preference and survives the reset.
    pub fn reset(&mut self) {
        *self = Self {
            unit: self.unit,
            ..Self::default()
        };
    }

    pub fn id(&self) -> Option<PlanId> {
        self.id
    }

    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    pub fn set_workout_name(&mut self, name: impl Into<String>) {
        self.workout_name = name.into();
    }

    pub fn selected_day(&self) -> Option<DayKey> {
        self.selected_day
    }

    /// Whether a day is selected for editing.
    pub fn is_editing(&self) -> bool {
        self.selected_day.is_some()
    }

    /// Committed entry for `key`, if any.
    pub fn day_draft(&self, key: DayKey) -> Option<&DayPlan> {
        self.day_drafts.get(&key)
    }

    /// The editing fields of the selected day.
    pub fn editing_day(&self) -> &DayPlan {
        &self.editing
    }

    pub fn editing_exercises(&self) -> &[ExercisePlan] {
        &self.editing.exercises
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Flips the display unit between pounds and kilograms. Weights already
    /// entered are not converted.
    pub fn toggle_unit(&mut self) -> WeightUnit {
        self.unit = self.unit.toggled();
        self.unit
    }

    /// Selects a day and loads its committed entry into the editing fields.
    ///
    /// Uncommitted edits to the previously selected day are dropped. A day
    /// with no committed entry starts out as a rest day.
    pub fn select_day(&mut self, key: DayKey) {
        if self.selected_day.is_some_and(|current| current != key) {
            debug!("Switching day without commit, dropping edits");
        }
        self.selected_day = Some(key);
        self.editing = self.day_drafts.get(&key).cloned().unwrap_or_default();
    }

    /// Writes the editing fields into the selected day's entry and clears
    /// them.
    ///
    /// A workout day needs a name and every exercise needs a name; rest days
    /// drop their exercises.
    pub fn commit_day(&mut self) -> Result<DayKey> {
        let key = self
            .selected_day
            .ok_or_else(|| OverloadError::validation("no day selected"))?;

        let day = if self.editing.is_rest {
            DayPlan::rest()
        } else {
            let name = self.editing.name.trim();
            if name.is_empty() {
                return Err(OverloadError::validation(format!(
                    "{} needs a workout name",
                    key.full_name()
                )));
            }
            if let Some(position) = self
                .editing
                .exercises
                .iter()
                .position(|exercise| exercise.exercise.trim().is_empty())
            {
                return Err(OverloadError::validation(format!(
                    "exercise {} on {} has no name",
                    position + 1,
                    key.full_name()
                )));
            }
            DayPlan::workout(name, self.editing.exercises.clone())
        };

        debug!("Committed {key}");
        self.day_drafts.insert(key, day);
        self.clear_editing();
        Ok(key)
    }

    pub fn set_day_name(&mut self, name: impl Into<String>) {
        self.editing.name = name.into();
    }

    /// Marks the selected day as rest or workout.
    ///
    /// Switching to rest names the day "Rest"; switching back clears that
    /// placeholder name. Exercises stay in the editing fields either way.
    pub fn set_rest(&mut self, is_rest: bool) {
        if is_rest {
            self.editing.name = REST_DAY_NAME.to_string();
        } else if self.editing.is_rest && self.editing.name == REST_DAY_NAME {
            self.editing.name.clear();
        }
        self.editing.is_rest = is_rest;
    }

    pub fn toggle_rest(&mut self) {
        self.set_rest(!self.editing.is_rest);
    }

    /// Appends an exercise with no sets and returns its index.
    pub fn add_exercise(&mut self, exercise: impl Into<String>) -> usize {
        self.editing
            .exercises
            .push(ExercisePlan::new(exercise, Vec::new()));
        self.editing.exercises.len() - 1
    }

    pub fn clear_exercises(&mut self) {
        self.editing.exercises.clear();
    }

    pub fn remove_exercise(&mut self, index: usize) -> Result<ExercisePlan> {
        self.exercise_mut(index)?;
        Ok(self.editing.exercises.remove(index))
    }

    /// Renames an exercise, from a catalog choice or free text.
    pub fn set_exercise_name(&mut self, index: usize, exercise: impl Into<String>) -> Result<()> {
        let exercise = exercise.into();
        if exercise.trim().is_empty() {
            return Err(OverloadError::validation("exercise name cannot be empty"));
        }
        self.exercise_mut(index)?.exercise = exercise.trim().to_string();
        Ok(())
    }

    /// Replaces all sets of an exercise.
    pub fn set_exercise_sets(&mut self, index: usize, sets: Vec<SetPlan>) -> Result<()> {
        for set in &sets {
            validate_set(set)?;
        }
        self.exercise_mut(index)?.sets = sets;
        Ok(())
    }

    /// Appends a set to an exercise and returns the set's index.
    pub fn add_set(&mut self, exercise: usize, set: SetPlan) -> Result<usize> {
        validate_set(&set)?;
        let sets = &mut self.exercise_mut(exercise)?.sets;
        sets.push(set);
        Ok(sets.len() - 1)
    }

    pub fn update_set(&mut self, exercise: usize, index: usize, set: SetPlan) -> Result<()> {
        validate_set(&set)?;
        let slot = self
            .exercise_mut(exercise)?
            .sets
            .get_mut(index)
            .ok_or_else(|| OverloadError::validation(format!("no set at position {}", index + 1)))?;
        *slot = set;
        Ok(())
    }

    pub fn remove_set(&mut self, exercise: usize, index: usize) -> Result<SetPlan> {
        let sets = &mut self.exercise_mut(exercise)?.sets;
        if index >= sets.len() {
            return Err(OverloadError::validation(format!(
                "no set at position {}",
                index + 1
            )));
        }
        Ok(sets.remove(index))
    }

    /// Produces the canonical draft handed to the cache for saving.
    ///
    /// Uncommitted edits are not included. The workout name is checked
    /// before the days, so a nameless plan always reports the missing name.
    pub fn to_canonical_plan(&self) -> Result<WeekPlanDraft> {
        let name = self.workout_name.trim();
        if name.is_empty() {
            return Err(OverloadError::validation("missing workout name"));
        }

        let incomplete: Vec<&str> = DayKey::ALL
            .iter()
            .filter(|key| !self.day_drafts.get(key).is_some_and(DayPlan::is_complete))
            .map(|key| key.full_name())
            .collect();
        if !incomplete.is_empty() {
            return Err(OverloadError::validation(format!(
                "incomplete days: {}",
                incomplete.join(", ")
            )));
        }

        let days = self
            .day_drafts
            .iter()
            .map(|(key, day)| (*key, day.clone().normalized()))
            .collect();
        Ok(WeekPlanDraft {
            id: self.id,
            name: name.to_string(),
            days,
        })
    }

    fn clear_editing(&mut self) {
        self.selected_day = None;
        self.editing = DayPlan::rest();
    }

    fn exercise_mut(&mut self, index: usize) -> Result<&mut ExercisePlan> {
        self.editing
            .exercises
            .get_mut(index)
            .ok_or_else(|| OverloadError::validation(format!("no exercise at position {}", index + 1)))
    }
}

fn validate_set(set: &SetPlan) -> Result<()> {
    set.validate().map_err(OverloadError::validation)
}
