//! Exercise definitions - muscle-group taxonomy and the bundled catalog

use serde::{Deserialize, Serialize};

/// Muscle groups used by split templates and exercise tagging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Triceps,
    Back,
    Biceps,
    Core,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    FullBody, // Warmups, cooldowns, conditioning
}

impl MuscleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Core => "Core",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::FullBody => "Full Body",
        }
    }

    /// Big groups carry the compound lifts and are balanced first
    pub fn is_big(&self) -> bool {
        matches!(
            self,
            MuscleGroup::Chest
                | MuscleGroup::Back
                | MuscleGroup::Quads
                | MuscleGroup::Hamstrings
                | MuscleGroup::Glutes
        )
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Core,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
            MuscleGroup::FullBody,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Warmup,
    Compound,  // Multi-joint
    Isolation, // Single-joint
    Cooldown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Warmup => "warmup",
            Category::Compound => "compound",
            Category::Isolation => "isolation",
            Category::Cooldown => "cooldown",
        }
    }

    /// Whether the exercise belongs to the main (compound + isolation) block
    pub fn is_main(&self) -> bool {
        matches!(self, Category::Compound | Category::Isolation)
    }
}

/// Equipment class from the exercise catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    FreeWeight,
    Machine,
    Bodyweight,
}

impl std::str::FromStr for Equipment {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "free_weight" => Ok(Self::FreeWeight),
            "machine" => Ok(Self::Machine),
            "bodyweight" => Ok(Self::Bodyweight),
            _ => Err(format!("Unknown equipment: {}", s)),
        }
    }
}

/// Catalog entry consumed read-only by the routine generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub primary_muscle_group: MuscleGroup,
    pub category: Category,
    /// Overrides the muscle-group taxonomy when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_big_muscle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
}

impl Exercise {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        primary_muscle_group: MuscleGroup,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            primary_muscle_group,
            category,
            is_big_muscle: None,
            equipment: None,
        }
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = Some(equipment);
        self
    }

    pub fn with_big_muscle(mut self, is_big_muscle: bool) -> Self {
        self.is_big_muscle = Some(is_big_muscle);
        self
    }

    /// Big-muscle flag; catalogs that omit it fall back to the taxonomy
    pub fn is_big(&self) -> bool {
        self.is_big_muscle
            .unwrap_or_else(|| self.primary_muscle_group.is_big())
    }
}

/// Static catalog row, expanded into an owned `Exercise` on demand
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    group: MuscleGroup,
    category: Category,
    equipment: Equipment,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    group: MuscleGroup,
    category: Category,
    equipment: Equipment,
) -> CatalogEntry {
    CatalogEntry { id, name, group, category, equipment }
}

use Category::{Compound, Cooldown, Isolation, Warmup};
use Equipment::{Bodyweight, FreeWeight, Machine};
use MuscleGroup::*;

/// Bundled catalog used when the caller brings no exercise pool
const CATALOG: &[CatalogEntry] = &[
    // Warmups
    entry("arm_circles", "Arm Circles", Shoulders, Warmup, Bodyweight),
    entry("band_pull_aparts", "Band Pull-Aparts", Back, Warmup, Bodyweight),
    entry("bodyweight_squat", "Bodyweight Squat", Quads, Warmup, Bodyweight),
    entry("jumping_jacks", "Jumping Jacks", FullBody, Warmup, Bodyweight),
    // Chest
    entry("bench_press", "Barbell Bench Press", Chest, Compound, FreeWeight),
    entry("incline_db_press", "Incline Dumbbell Press", Chest, Compound, FreeWeight),
    entry("push_up", "Push-Up", Chest, Compound, Bodyweight),
    entry("cable_fly", "Cable Fly", Chest, Isolation, Machine),
    // Shoulders
    entry("overhead_press", "Overhead Press", Shoulders, Compound, FreeWeight),
    entry("lateral_raise", "Dumbbell Lateral Raise", Shoulders, Isolation, FreeWeight),
    // Triceps
    entry("close_grip_bench", "Close-Grip Bench Press", Triceps, Compound, FreeWeight),
    entry("triceps_pushdown", "Triceps Pushdown", Triceps, Isolation, Machine),
    // Back
    entry("deadlift", "Conventional Deadlift", Back, Compound, FreeWeight),
    entry("pull_up", "Pull-Up", Back, Compound, Bodyweight),
    entry("barbell_row", "Barbell Row", Back, Compound, FreeWeight),
    entry("lat_pulldown", "Lat Pulldown", Back, Compound, Machine),
    // Biceps
    entry("chin_up", "Chin-Up", Biceps, Compound, Bodyweight),
    entry("barbell_curl", "Barbell Curl", Biceps, Isolation, FreeWeight),
    entry("hammer_curl", "Hammer Curl", Biceps, Isolation, FreeWeight),
    // Legs
    entry("back_squat", "Barbell Back Squat", Quads, Compound, FreeWeight),
    entry("leg_press", "Leg Press", Quads, Compound, Machine),
    entry("leg_extension", "Leg Extension", Quads, Isolation, Machine),
    entry("romanian_deadlift", "Romanian Deadlift", Hamstrings, Compound, FreeWeight),
    entry("leg_curl", "Lying Leg Curl", Hamstrings, Isolation, Machine),
    entry("hip_thrust", "Barbell Hip Thrust", Glutes, Compound, FreeWeight),
    entry("walking_lunge", "Walking Lunge", Glutes, Compound, Bodyweight),
    entry("calf_raise", "Standing Calf Raise", Calves, Isolation, Bodyweight),
    // Core
    entry("hanging_leg_raise", "Hanging Leg Raise", Core, Isolation, Bodyweight),
    entry("plank", "Plank", Core, Isolation, Bodyweight),
    // Cooldowns
    entry("doorway_chest_stretch", "Doorway Chest Stretch", Chest, Cooldown, Bodyweight),
    entry("childs_pose", "Child's Pose", Back, Cooldown, Bodyweight),
    entry("hamstring_stretch", "Standing Hamstring Stretch", Hamstrings, Cooldown, Bodyweight),
    entry("foam_roll", "Full-Body Foam Roll", FullBody, Cooldown, Bodyweight),
];

/// Get the bundled catalog as an owned exercise pool
pub fn default_exercise_pool() -> Vec<Exercise> {
    CATALOG
        .iter()
        .map(|e| Exercise::new(e.id, e.name, e.group, e.category).with_equipment(e.equipment))
        .collect()
}

pub fn find_exercise<'a>(pool: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    pool.iter().find(|e| e.id == id)
}

/// Keep only exercises usable with the given equipment.
/// Exercises without an equipment tag are kept.
pub fn filter_by_equipment(pool: &[Exercise], equipment: Equipment) -> Vec<Exercise> {
    pool.iter()
        .filter(|e| e.equipment.is_none_or(|eq| eq == equipment))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_big_muscle_classification() {
        assert!(MuscleGroup::Chest.is_big());
        assert!(MuscleGroup::Back.is_big());
        assert!(MuscleGroup::Quads.is_big());
        assert!(!MuscleGroup::Biceps.is_big());
        assert!(!MuscleGroup::Calves.is_big());
        assert!(!MuscleGroup::FullBody.is_big());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let pool = default_exercise_pool();
        let ids: HashSet<_> = pool.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), pool.len());
    }

    #[test]
    fn test_catalog_has_every_category() {
        let pool = default_exercise_pool();
        for category in [Warmup, Compound, Isolation, Cooldown] {
            assert!(
                pool.iter().any(|e| e.category == category),
                "Catalog has no {:?} exercise",
                category
            );
        }
    }

    #[test]
    fn test_big_flag_falls_back_to_taxonomy() {
        let squat = Exercise::new("squat", "Squat", Quads, Compound);
        assert_eq!(squat.is_big_muscle, None);
        assert!(squat.is_big());
        let curl = Exercise::new("curl", "Curl", Biceps, Isolation);
        assert!(!curl.is_big());
    }

    #[test]
    fn test_big_flag_overrides_taxonomy() {
        let push_up = Exercise::new("push_up", "Push-Up", Chest, Compound).with_big_muscle(false);
        assert!(!push_up.is_big());
        let dips = Exercise::new("dips", "Dips", Triceps, Compound).with_big_muscle(true);
        assert!(dips.is_big());

        let json = r#"{"id":"fly","name":"Fly","primary_muscle_group":"chest",
            "category":"isolation","is_big_muscle":false}"#;
        let fly: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(fly.is_big_muscle, Some(false));
        assert!(!fly.is_big());
    }

    #[test]
    fn test_find_exercise() {
        let pool = default_exercise_pool();
        assert_eq!(find_exercise(&pool, "deadlift").unwrap().name, "Conventional Deadlift");
        assert!(find_exercise(&pool, "missing").is_none());
    }

    #[test]
    fn test_filter_by_equipment() {
        let mut pool = default_exercise_pool();
        pool.push(Exercise::new("untagged", "Untagged Row", Back, Compound));

        let bodyweight = filter_by_equipment(&pool, Bodyweight);
        assert!(!bodyweight.is_empty());
        assert!(bodyweight.iter().all(|e| e.equipment.is_none_or(|eq| eq == Bodyweight)));
        assert!(bodyweight.iter().any(|e| e.id == "untagged"));
        assert!(bodyweight.iter().all(|e| e.id != "bench_press"));
    }

    #[test]
    fn test_equipment_from_str() {
        assert_eq!("bodyweight".parse::<Equipment>(), Ok(Bodyweight));
        assert_eq!("Free Weight".parse::<Equipment>(), Ok(FreeWeight));
        assert_eq!("free-weight".parse::<Equipment>(), Ok(FreeWeight));
        assert!("kettlebell".parse::<Equipment>().is_err());
    }

    #[test]
    fn test_exercise_deserialize_without_optional_fields() {
        let json = r#"{"id":"row","name":"Row","primary_muscle_group":"back",
            "category":"compound"}"#;
        let ex: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(ex.primary_muscle_group, Back);
        assert_eq!(ex.is_big_muscle, None);
        assert!(ex.is_big());
        assert!(ex.equipment.is_none());
    }
}
