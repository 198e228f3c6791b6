//! Curated exercise taxonomy.
//!
//! Exercises are grouped body part → region → equipment → names. The
//! builder accepts any exercise name; the catalog only offers choices.

use std::fmt;

/// Equipment group with its exercises.
#[derive(Debug)]
pub struct Equipment {
    pub name: &'static str,
    pub exercises: &'static [&'static str],
}

/// Sub-region of a body part.
#[derive(Debug)]
pub struct Region {
    pub name: &'static str,
    pub equipment: &'static [Equipment],
}

/// Top-level body part.
#[derive(Debug)]
pub struct BodyPart {
    pub name: &'static str,
    pub regions: &'static [Region],
}

macro_rules! equipment {
    ($name:literal => [$($exercise:literal),* $(,)?]) => {
        Equipment {
            name: $name,
            exercises: &[$($exercise),*],
        }
    };
}

pub static CATALOG: &[BodyPart] = &[
    BodyPart {
        name: "Chest",
        regions: &[
            Region {
                name: "Upper Chest",
                equipment: &[
                    equipment!("Barbell" => ["Incline Bench Press"]),
                    equipment!("Dumbbell" => ["Incline Dumbbell Press", "Incline Dumbbell Fly"]),
                    equipment!("Cable" => ["Low-to-High Cable Fly"]),
                ],
            },
            Region {
                name: "Middle Chest",
                equipment: &[
                    equipment!("Barbell" => ["Bench Press"]),
                    equipment!("Dumbbell" => ["Dumbbell Bench Press", "Dumbbell Fly"]),
                    equipment!("Machine" => ["Chest Press Machine", "Pec Deck"]),
                    equipment!("Bodyweight" => ["Push-Up"]),
                ],
            },
            Region {
                name: "Lower Chest",
                equipment: &[
                    equipment!("Barbell" => ["Decline Bench Press"]),
                    equipment!("Cable" => ["High-to-Low Cable Fly"]),
                    equipment!("Bodyweight" => ["Chest Dip"]),
                ],
            },
        ],
    },
    BodyPart {
        name: "Back",
        regions: &[
            Region {
                name: "Lats",
                equipment: &[
                    equipment!("Cable" => ["Lat Pulldown", "Straight-Arm Pulldown"]),
                    equipment!("Bodyweight" => ["Pull-Up", "Chin-Up"]),
                ],
            },
            Region {
                name: "Upper Back",
                equipment: &[
                    equipment!("Barbell" => ["Barbell Row", "Pendlay Row"]),
                    equipment!("Dumbbell" => ["One-Arm Dumbbell Row"]),
                    equipment!("Cable" => ["Seated Cable Row", "Face Pull"]),
                ],
            },
            Region {
                name: "Lower Back",
                equipment: &[
                    equipment!("Barbell" => ["Deadlift", "Good Morning"]),
                    equipment!("Bodyweight" => ["Back Extension"]),
                ],
            },
        ],
    },
    BodyPart {
        name: "Legs",
        regions: &[
            Region {
                name: "Quads",
                equipment: &[
                    equipment!("Barbell" => ["Back Squat", "Front Squat"]),
                    equipment!("Machine" => ["Leg Press", "Leg Extension", "Hack Squat"]),
                    equipment!("Dumbbell" => ["Bulgarian Split Squat", "Goblet Squat"]),
                ],
            },
            Region {
                name: "Hamstrings",
                equipment: &[
                    equipment!("Barbell" => ["Romanian Deadlift"]),
                    equipment!("Machine" => ["Lying Leg Curl", "Seated Leg Curl"]),
                ],
            },
            Region {
                name: "Glutes",
                equipment: &[
                    equipment!("Barbell" => ["Hip Thrust"]),
                    equipment!("Cable" => ["Cable Kickback"]),
                ],
            },
            Region {
                name: "Calves",
                equipment: &[
                    equipment!("Machine" => ["Standing Calf Raise", "Seated Calf Raise"]),
                ],
            },
        ],
    },
    BodyPart {
        name: "Shoulders",
        regions: &[
            Region {
                name: "Front Delts",
                equipment: &[
                    equipment!("Barbell" => ["Overhead Press"]),
                    equipment!("Dumbbell" => ["Dumbbell Shoulder Press", "Front Raise"]),
                ],
            },
            Region {
                name: "Side Delts",
                equipment: &[
                    equipment!("Dumbbell" => ["Lateral Raise"]),
                    equipment!("Cable" => ["Cable Lateral Raise"]),
                ],
            },
            Region {
                name: "Rear Delts",
                equipment: &[
                    equipment!("Dumbbell" => ["Rear Delt Fly"]),
                    equipment!("Machine" => ["Reverse Pec Deck"]),
                ],
            },
        ],
    },
    BodyPart {
        name: "Arms",
        regions: &[
            Region {
                name: "Biceps",
                equipment: &[
                    equipment!("Barbell" => ["Barbell Curl", "EZ-Bar Curl"]),
                    equipment!("Dumbbell" => ["Dumbbell Curl", "Hammer Curl", "Incline Curl"]),
                    equipment!("Cable" => ["Cable Curl"]),
                ],
            },
            Region {
                name: "Triceps",
                equipment: &[
                    equipment!("Barbell" => ["Close-Grip Bench Press", "Skull Crusher"]),
                    equipment!("Cable" => ["Triceps Pushdown", "Overhead Cable Extension"]),
                    equipment!("Bodyweight" => ["Bench Dip"]),
                ],
            },
        ],
    },
    BodyPart {
        name: "Core",
        regions: &[Region {
            name: "Abs",
            equipment: &[
                equipment!("Bodyweight" => ["Plank", "Hanging Leg Raise", "Crunch"]),
                equipment!("Cable" => ["Cable Crunch"]),
            ],
        }],
    },
];

fn matches(name: &str, query: &str) -> bool {
    name.eq_ignore_ascii_case(query.trim())
}

/// Finds a body part by name, ignoring case.
pub fn body_part(name: &str) -> Option<&'static BodyPart> {
    CATALOG.iter().find(|part| matches(part.name, name))
}

impl BodyPart {
    pub fn region(&self, name: &str) -> Option<&'static Region> {
        self.regions.iter().find(|region| matches(region.name, name))
    }
}

impl Region {
    pub fn equipment(&self, name: &str) -> Option<&'static Equipment> {
        self.equipment.iter().find(|group| matches(group.name, name))
    }

    /// All exercises of the region across equipment groups.
    pub fn exercises(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.equipment
            .iter()
            .flat_map(|group| group.exercises.iter().copied())
    }
}

/// Every exercise in the catalog, in catalog order.
pub fn all_exercises() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .flat_map(|part| part.regions)
        .flat_map(|region| region.equipment)
        .flat_map(|group| group.exercises.iter().copied())
}

/// Whether `exercise` is a catalog entry, ignoring case.
pub fn contains(exercise: &str) -> bool {
    all_exercises().any(|name| matches(name, exercise))
}

/// An exercise picked from the catalog or typed in by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseChoice {
    Catalog(&'static str),
    Custom(String),
}

impl ExerciseChoice {
    /// Resolves free text to the catalog's spelling when it names a catalog
    /// exercise, or to a trimmed custom entry otherwise.
    pub fn resolve(input: &str) -> Self {
        match all_exercises().find(|name| matches(name, input)) {
            Some(name) => ExerciseChoice::Catalog(name),
            None => ExerciseChoice::Custom(input.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ExerciseChoice::Catalog(name) => name,
            ExerciseChoice::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ExerciseChoice::Custom(_))
    }
}

impl fmt::Display for ExerciseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ExerciseChoice> for String {
    fn from(choice: ExerciseChoice) -> Self {
        match choice {
            ExerciseChoice::Catalog(name) => name.to_string(),
            ExerciseChoice::Custom(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_level() {
        let chest = body_part("chest").unwrap();
        let middle = chest.region("Middle Chest").unwrap();
        let barbell = middle.equipment("BARBELL").unwrap();

        assert_eq!(barbell.exercises, &["Bench Press"]);
        assert!(middle.exercises().any(|name| name == "Push-Up"));
        assert!(body_part("Neck").is_none());
        assert!(chest.region("Calves").is_none());
    }

    #[test]
    fn test_contains_and_resolve() {
        assert!(contains("bench press"));
        assert!(!contains("Underwater Basket Weaving"));

        assert_eq!(ExerciseChoice::resolve(" bench PRESS "), ExerciseChoice::Catalog("Bench Press"));
        let custom = ExerciseChoice::resolve("  Sled Push ");
        assert!(custom.is_custom());
        assert_eq!(String::from(custom), "Sled Push");
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = all_exercises().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
