//! Display implementations for domain models.
//!
//! Every model renders as markdown. Plain `Display` prints weights as bare
//! numbers; [`WithUnit`] renders the same output with the session's unit
//! appended to every weight.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DayKey, DayPlan, ExercisePlan, SetPlan, WeekPlan, WeightUnit};

/// Renders a model with weights labelled in the given unit.
///
/// # Examples
///
/// ```rust
/// use overload_core::{
///     display::WithUnit,
///     models::{SetPlan, WeightUnit},
/// };
///
/// let set = SetPlan::warmup(10, 60.0);
/// assert_eq!(format!("{}", WithUnit(&set, WeightUnit::Kg)), "10 × 60 kg (warm-up)");
/// assert_eq!(format!("{set}"), "10 × 60 (warm-up)");
/// ```
pub struct WithUnit<'a, T>(pub &'a T, pub WeightUnit);

/// One day of a plan under its weekday heading.
pub struct DayEntry<'a> {
    pub key: DayKey,
    pub day: Option<&'a DayPlan>,
    pub unit: Option<WeightUnit>,
}

impl<'a> DayEntry<'a> {
    pub fn new(plan: &'a WeekPlan, key: DayKey) -> Self {
        Self {
            key,
            day: plan.day(key),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: WeightUnit) -> Self {
        self.unit = Some(unit);
        self
    }
}

fn fmt_set(set: &SetPlan, unit: Option<WeightUnit>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} × {}", set.reps, set.weight)?;
    if let Some(unit) = unit {
        write!(f, " {unit}")?;
    }
    if set.is_warmup {
        write!(f, " (warm-up)")?;
    }
    Ok(())
}

fn fmt_exercise(
    exercise: &ExercisePlan,
    unit: Option<WeightUnit>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "- **{}**", exercise.exercise)?;
    if exercise.sets.is_empty() {
        return writeln!(f, ": no sets");
    }
    write!(f, ": ")?;
    for (index, set) in exercise.sets.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        fmt_set(set, unit, f)?;
    }
    writeln!(f)
}

fn fmt_day_body(day: &DayPlan, unit: Option<WeightUnit>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if day.is_rest {
        return Ok(());
    }
    if day.exercises.is_empty() {
        writeln!(f, "No exercises planned.")?;
    } else {
        for exercise in &day.exercises {
            fmt_exercise(exercise, unit, f)?;
        }
    }
    writeln!(f)
}

fn fmt_day_entry(entry: &DayEntry<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = entry.key.full_name();
    match entry.day {
        Some(day) if day.is_rest => writeln!(f, "## {name}: Rest\n"),
        Some(day) => {
            writeln!(f, "## {name}: {}\n", day.name)?;
            fmt_day_body(day, entry.unit, f)
        }
        None => writeln!(f, "## {name}: not planned\n"),
    }
}

fn fmt_plan(plan: &WeekPlan, unit: Option<WeightUnit>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# {}. {}", plan.id, plan.name)?;
    writeln!(f)?;
    writeln!(f, "- Workout days: {}/7", plan.workout_days())?;
    if let Some(created_at) = &plan.created_at {
        writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
    }
    writeln!(f)?;

    for key in DayKey::ALL {
        let entry = DayEntry {
            key,
            day: plan.day(key),
            unit,
        };
        fmt_day_entry(&entry, f)?;
    }
    Ok(())
}

impl fmt::Display for SetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(self, None, f)
    }
}

impl fmt::Display for ExercisePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_exercise(self, None, f)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}\n", self.name)?;
        fmt_day_body(self, None, f)
    }
}

impl fmt::Display for WeekPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(self, None, f)
    }
}

impl fmt::Display for DayEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_day_entry(self, f)
    }
}

impl fmt::Display for WithUnit<'_, SetPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(self.0, Some(self.1), f)
    }
}

impl fmt::Display for WithUnit<'_, ExercisePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_exercise(self.0, Some(self.1), f)
    }
}

impl fmt::Display for WithUnit<'_, DayPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}\n", self.0.name)?;
        fmt_day_body(self.0, Some(self.1), f)
    }
}

impl fmt::Display for WithUnit<'_, WeekPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan(self.0, Some(self.1), f)
    }
}
