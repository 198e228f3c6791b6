use std::collections::BTreeMap;

use overload_core::{
    models::{DayKey, DayPlan, ExercisePlan, PlanId, SetPlan, WeekPlan},
    store::{HttpPlanStore, HttpStoreBuilder},
};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-csrf-token";

/// A complete plan with a single workout on Wednesday.
#[allow(dead_code)]
pub fn sample_plan(id: u64, name: &str) -> WeekPlan {
    let mut days: BTreeMap<DayKey, DayPlan> =
        DayKey::ALL.iter().map(|key| (*key, DayPlan::rest())).collect();
    days.insert(
        DayKey::Wed,
        DayPlan::workout(
            "Push Day",
            vec![ExercisePlan::new("Bench Press", vec![SetPlan::new(8, 135.0)])],
        ),
    );
    WeekPlan {
        id: PlanId(id),
        name: name.to_string(),
        days,
        created_at: None,
    }
}

/// The server's JSON for `sample_plan`.
#[allow(dead_code)]
pub fn sample_plan_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "data": {
            "sun": {"name": "Rest", "isRest": true},
            "mon": {"name": "Rest", "isRest": true},
            "tue": {"name": "Rest", "isRest": true},
            "wed": {
                "name": "Push Day",
                "isRest": false,
                "exercises": [
                    {"exercise": "Bench Press", "sets": [{"reps": 8, "weight": 135.0, "isWarmup": false}]}
                ]
            },
            "thu": {"name": "Rest", "isRest": true},
            "fri": {"name": "Rest", "isRest": true},
            "sat": {"name": "Rest", "isRest": true}
        }
    })
}

/// Store pointed at the mock server's `/api` prefix.
#[allow(dead_code)]
pub fn http_store(server: &MockServer) -> HttpPlanStore {
    HttpStoreBuilder::new()
        .with_base_url(format!("{}/api", server.uri()))
        .with_csrf_token(TOKEN)
        .with_session_cookie("sessionid=abc123")
        .build()
        .expect("Failed to build store")
}
