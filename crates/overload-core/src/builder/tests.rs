//! Tests for the week plan builder.

use jiff::Timestamp;

use super::*;
use crate::models::WirePlan;

fn push_day_builder() -> WeekPlanBuilder {
    let mut builder = WeekPlanBuilder::new();
    builder.set_workout_name("Strength Block");
    builder.select_day(DayKey::Wed);
    builder.toggle_rest();
    builder.set_day_name("Push Day");
    let bench = builder.add_exercise("Bench Press");
    builder.add_set(bench, SetPlan::new(8, 135.0)).unwrap();
    builder.commit_day().unwrap();
    builder
}

fn assert_validation(result: Result<impl std::fmt::Debug>, expected: &str) {
    match result {
        Err(OverloadError::Validation { reason }) => assert!(
            reason.contains(expected),
            "expected reason containing {expected:?}, got {reason:?}"
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_new_builder_is_all_rest() {
    let builder = WeekPlanBuilder::new();

    for key in DayKey::ALL {
        assert_eq!(builder.day_draft(key), Some(&DayPlan::rest()));
    }
    assert!(!builder.is_editing());
    assert_eq!(builder.unit(), WeightUnit::Lb);
}

#[test]
fn test_push_day_scenario() {
    let draft = push_day_builder().to_canonical_plan().unwrap();

    assert_eq!(draft.id, None);
    assert_eq!(draft.name, "Strength Block");
    assert_eq!(
        draft.days[&DayKey::Wed],
        DayPlan::workout(
            "Push Day",
            vec![ExercisePlan::new("Bench Press", vec![SetPlan::new(8, 135.0)])]
        )
    );
    for key in DayKey::ALL.iter().filter(|key| **key != DayKey::Wed) {
        assert_eq!(draft.days[key], DayPlan::rest());
    }
}

#[test]
fn test_canonical_plan_round_trips_through_wire() {
    let draft = push_day_builder().to_canonical_plan().unwrap();
    let plan = WeekPlan {
        id: PlanId(3),
        name: draft.name.clone(),
        days: draft.days.clone(),
        created_at: Some(Timestamp::from_second(1_700_000_000).unwrap()),
    };

    let wire = WirePlan::from(&plan);
    let back = WeekPlan::try_from(wire).unwrap();

    assert_eq!(back, plan);
}

#[test]
fn test_missing_name_reported_before_incomplete_days() {
    let mut builder = WeekPlanBuilder::new();
    builder.select_day(DayKey::Fri);
    builder.set_rest(false);
    builder.set_day_name("Pull");
    builder.commit_day().unwrap();
    let mut partial = WeekPlan {
        id: PlanId(1),
        name: String::new(),
        days: Default::default(),
        created_at: None,
    };
    partial.days.insert(DayKey::Mon, DayPlan::rest());
    builder.load_plan(&partial);

    assert_validation(builder.to_canonical_plan(), "missing workout name");

    builder.set_workout_name("  ");
    assert_validation(builder.to_canonical_plan(), "missing workout name");

    builder.set_workout_name("Named");
    assert_validation(builder.to_canonical_plan(), "incomplete days: Sunday, Tuesday");
}

#[test]
fn test_select_day_discards_uncommitted_edits() {
    let mut builder = WeekPlanBuilder::new();
    builder.set_workout_name("Plan");
    builder.select_day(DayKey::Mon);
    builder.set_rest(false);
    builder.set_day_name("Legs");
    builder.add_exercise("Squat");

    builder.select_day(DayKey::Tue);
    builder.select_day(DayKey::Mon);

    assert!(builder.editing_day().is_rest);
    assert!(builder.editing_exercises().is_empty());
    let draft = builder.to_canonical_plan().unwrap();
    assert_eq!(draft.days[&DayKey::Mon], DayPlan::rest());
}

#[test]
fn test_select_day_loads_committed_entry() {
    let mut builder = push_day_builder();

    builder.select_day(DayKey::Wed);

    assert_eq!(builder.selected_day(), Some(DayKey::Wed));
    assert_eq!(builder.editing_day().name, "Push Day");
    assert_eq!(builder.editing_exercises().len(), 1);
}

#[test]
fn test_commit_requires_selection_and_name() {
    let mut builder = WeekPlanBuilder::new();
    assert_validation(builder.commit_day(), "no day selected");

    builder.select_day(DayKey::Thu);
    builder.set_rest(false);
    assert_eq!(builder.editing_day().name, "");
    assert_validation(builder.commit_day(), "Thursday needs a workout name");

    builder.set_day_name("Arms");
    builder.add_exercise("");
    assert_validation(builder.commit_day(), "exercise 1 on Thursday has no name");

    builder.set_exercise_name(0, "Curl").unwrap();
    assert_eq!(builder.commit_day().unwrap(), DayKey::Thu);
    assert!(!builder.is_editing());
    assert_eq!(builder.day_draft(DayKey::Thu).unwrap().name, "Arms");
}

#[test]
fn test_commit_rest_day_drops_exercises() {
    let mut builder = push_day_builder();
    builder.select_day(DayKey::Wed);

    builder.toggle_rest();
    builder.commit_day().unwrap();

    assert_eq!(builder.day_draft(DayKey::Wed), Some(&DayPlan::rest()));
}

#[test]
fn test_exercise_and_set_editing() {
    let mut builder = WeekPlanBuilder::new();
    builder.select_day(DayKey::Sat);
    builder.set_rest(false);
    let row = builder.add_exercise("Row");
    let press = builder.add_exercise("Press");
    assert_eq!((row, press), (0, 1));

    builder
        .set_exercise_sets(row, vec![SetPlan::warmup(10, 65.0), SetPlan::new(8, 95.0)])
        .unwrap();
    assert_eq!(builder.add_set(row, SetPlan::new(6, 115.0)).unwrap(), 2);
    builder.update_set(row, 1, SetPlan::new(8, 100.0)).unwrap();
    assert_eq!(builder.remove_set(row, 0).unwrap(), SetPlan::warmup(10, 65.0));
    assert_eq!(
        builder.editing_exercises()[row].sets,
        vec![SetPlan::new(8, 100.0), SetPlan::new(6, 115.0)]
    );

    let removed = builder.remove_exercise(row).unwrap();
    assert_eq!(removed.exercise, "Row");
    assert_eq!(builder.editing_exercises()[0].exercise, "Press");
}

#[test]
fn test_editors_reject_bad_input() {
    let mut builder = WeekPlanBuilder::new();
    builder.select_day(DayKey::Sat);
    let index = builder.add_exercise("Dip");

    assert_validation(builder.add_set(index, SetPlan::new(0, 10.0)), "reps");
    assert_validation(builder.add_set(index, SetPlan::new(5, -1.0)), "weight");
    assert_validation(builder.add_set(index, SetPlan::new(5, f64::NAN)), "weight");
    assert_validation(builder.add_set(4, SetPlan::new(5, 10.0)), "no exercise at position 5");
    assert_validation(builder.update_set(index, 0, SetPlan::new(5, 10.0)), "no set at position 1");
    assert_validation(builder.remove_set(index, 2), "no set at position 3");
    assert_validation(builder.remove_exercise(1), "no exercise at position 2");
    assert_validation(builder.set_exercise_name(index, " "), "cannot be empty");
    assert_validation(
        builder.set_exercise_sets(index, vec![SetPlan::new(5, 10.0), SetPlan::new(0, 10.0)]),
        "reps",
    );
    assert!(builder.editing_exercises()[index].sets.is_empty());
}

#[test]
fn test_load_plan_keeps_id_and_saves_as_update() {
    let saved = WeekPlan {
        id: PlanId(11),
        name: "Saved".to_string(),
        days: push_day_builder().to_canonical_plan().unwrap().days,
        created_at: None,
    };
    let mut builder = WeekPlanBuilder::from_plan(&saved);
    builder.select_day(DayKey::Sun);
    builder.set_rest(false);
    builder.set_day_name("Cardio");
    builder.commit_day().unwrap();

    let draft = builder.to_canonical_plan().unwrap();

    assert_eq!(draft.id, Some(PlanId(11)));
    assert!(!draft.is_new());
    assert_eq!(draft.days[&DayKey::Sun].name, "Cardio");
    assert_eq!(draft.days[&DayKey::Wed].name, "Push Day");
}

#[test]
fn test_reset_restores_initial_state_but_keeps_unit() {
    let mut builder = push_day_builder();
    builder.load_plan(&WeekPlan {
        id: PlanId(2),
        name: "Other".to_string(),
        days: Default::default(),
        created_at: None,
    });
    assert_eq!(builder.toggle_unit(), WeightUnit::Kg);
    builder.select_day(DayKey::Mon);

    builder.reset();

    let mut expected = WeekPlanBuilder::new();
    expected.toggle_unit();
    assert_eq!(builder, expected);
    assert_eq!(builder.id(), None);
    assert_eq!(builder.workout_name(), "");
}

#[test]
fn test_set_rest_switches_placeholder_name() {
    let mut builder = WeekPlanBuilder::new();
    builder.select_day(DayKey::Tue);

    builder.set_rest(false);
    builder.set_day_name("Upper");
    builder.set_rest(true);
    assert_eq!(builder.editing_day().name, REST_DAY_NAME);

    builder.toggle_rest();
    assert_eq!(builder.editing_day().name, "");
    assert!(!builder.editing_day().is_rest);
}
