//! Routine assembly - ordering, prescription, intensity and naming

use serde::{Deserialize, Serialize};

use super::partitioner::{DaySelection, Pick, balanced_compound_order};
use super::splits::SplitDay;
use crate::exercises::{Category, Exercise, MuscleGroup};

/// Percentage points removed per earlier appearance of the same exercise
pub const REPEAT_INTENSITY_DECREMENT: u32 = 10;
/// Repeats never drop below this intensity
pub const MIN_REPEAT_INTENSITY: u32 = 50;

/// Sets, reps and intensity for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
    pub intensity_percent: u32,
}

const fn rx(sets: u32, reps: u32, intensity_percent: u32) -> Prescription {
    Prescription { sets, reps, intensity_percent }
}

pub fn prescription(category: Category) -> Prescription {
    match category {
        Category::Warmup => rx(2, 10, 50),
        Category::Compound => rx(3, 10, 80),
        Category::Isolation => rx(3, 10, 65),
        Category::Cooldown => rx(1, 10, 40),
    }
}

/// Intensity for the `repeat_index`-th reappearance of an exercise.
/// The floor never lifts an exercise above its base intensity.
pub fn repeat_intensity(base: u32, repeat_index: u32, decrement: u32, floor: u32) -> u32 {
    let reduced = base.saturating_sub(decrement.saturating_mul(repeat_index));
    reduced.max(floor.min(base))
}

/// One slot of a routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutineExercise {
    pub exercise: Exercise,
    pub target_sets: u32,
    pub target_reps: u32,
    pub intensity_percent: u32,
    /// Already scheduled on an earlier day of the program
    #[serde(default)]
    pub is_repeat: bool,
}

/// One generated workout day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    pub name: String,
    pub day_label: String,
    /// Muscle groups the split assigns to this day
    pub muscle_groups: Vec<MuscleGroup>,
    pub ordered_exercises: Vec<RoutineExercise>,
}

impl Routine {
    pub fn is_empty(&self) -> bool {
        self.ordered_exercises.is_empty()
    }

    /// Muscle groups actually hit by the main block
    pub fn covered_muscle_groups(&self) -> Vec<MuscleGroup> {
        self.muscle_groups
            .iter()
            .copied()
            .filter(|g| {
                self.ordered_exercises
                    .iter()
                    .any(|e| e.exercise.category.is_main() && e.exercise.primary_muscle_group == *g)
            })
            .collect()
    }

    /// Format routine for terminal output
    pub fn format(&self) -> String {
        let mut lines = vec![self.name.clone()];
        if self.ordered_exercises.is_empty() {
            lines.push("  (no exercises available)".to_string());
        }
        for (i, slot) in self.ordered_exercises.iter().enumerate() {
            let repeat = if slot.is_repeat { " (repeat)" } else { "" };
            lines.push(format!(
                "  {}. {:28} {}x{} @ {}% [{}]{}",
                i + 1,
                slot.exercise.name,
                slot.target_sets,
                slot.target_reps,
                slot.intensity_percent,
                slot.exercise.category.label(),
                repeat
            ));
        }
        lines.join("\n")
    }
}

/// "A", "A & B", "A, B & C"
fn join_groups(groups: &[MuscleGroup]) -> String {
    let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} & {}", rest.join(", "), last),
    }
}

/// "<label> — <groups>", naming the groups the main block covers
pub fn routine_name(label: &str, covered: &[MuscleGroup], assigned: &[MuscleGroup]) -> String {
    let groups = if covered.is_empty() { assigned } else { covered };
    if groups.is_empty() {
        return label.to_string();
    }
    format!("{} — {}", label, join_groups(groups))
}

/// Main block order: balanced compounds, then isolations by the day's group order
fn order_main<'a>(main: &[Pick<'a>], groups: &[MuscleGroup]) -> Vec<Pick<'a>> {
    let compounds: Vec<&Exercise> = main
        .iter()
        .filter(|p| p.exercise.category == Category::Compound)
        .map(|p| p.exercise)
        .collect();

    let mut isolations: Vec<Pick> = main
        .iter()
        .copied()
        .filter(|p| p.exercise.category == Category::Isolation)
        .collect();
    let group_rank = |g: MuscleGroup| groups.iter().position(|x| *x == g).unwrap_or(groups.len());
    isolations.sort_by_key(|p| group_rank(p.exercise.primary_muscle_group));

    balanced_compound_order(&compounds, groups)
        .into_iter()
        .filter_map(|e| main.iter().copied().find(|p| std::ptr::eq(p.exercise, e)))
        .chain(isolations)
        .collect()
}

/// Build a routine from a day's selection
pub fn assemble_routine(
    day: &SplitDay,
    selection: &DaySelection,
    decrement: u32,
    floor: u32,
) -> Routine {
    let to_slot = |pick: &Pick| {
        let rx = prescription(pick.exercise.category);
        let intensity_percent =
            repeat_intensity(rx.intensity_percent, pick.repeat_index, decrement, floor);
        RoutineExercise {
            exercise: pick.exercise.clone(),
            target_sets: rx.sets,
            target_reps: rx.reps,
            intensity_percent,
            is_repeat: pick.is_repeat(),
        }
    };

    let ordered_exercises: Vec<RoutineExercise> = selection
        .warmup
        .iter()
        .chain(order_main(&selection.main, day.muscle_groups).iter())
        .chain(selection.cooldown.iter())
        .map(to_slot)
        .collect();

    let mut routine = Routine {
        name: String::new(),
        day_label: day.label.to_string(),
        muscle_groups: day.muscle_groups.to_vec(),
        ordered_exercises,
    };
    routine.name = routine_name(day.label, &routine.covered_muscle_groups(), day.muscle_groups);
    routine
}
