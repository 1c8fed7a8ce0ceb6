//! Routines module - Weekly program generation
//!
//! Features:
//! - Split templates for 2-7 training days per week
//! - Per-day exercise selection with muscle-group coverage
//! - Warmup -> compound -> isolation -> cooldown ordering
//! - Reduced intensity for exercises repeated across days

pub mod assembler;
pub mod partitioner;
pub mod splits;

pub use assembler::{MIN_REPEAT_INTENSITY, REPEAT_INTENSITY_DECREMENT, Routine, RoutineExercise};
pub use splits::{MAX_FREQUENCY, MIN_FREQUENCY, SplitDay, SplitTemplate, split_template};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FitnessError, Result};
use crate::exercises::Exercise;
use assembler::assemble_routine;
use partitioner::{ExerciseUsage, gather_candidates, select_day};

/// Main-block size a day is filled up to once every group is covered
pub const DEFAULT_MAX_MAIN_EXERCISES: usize = 6;

/// Tunables for program generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub repeat_decrement: u32,
    pub intensity_floor: u32,
    pub max_main_exercises: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            repeat_decrement: REPEAT_INTENSITY_DECREMENT,
            intensity_floor: MIN_REPEAT_INTENSITY,
            max_main_exercises: DEFAULT_MAX_MAIN_EXERCISES,
        }
    }
}

/// A week of routines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedProgram {
    pub frequency: u32,
    pub routines: Vec<Routine>,
}

impl GeneratedProgram {
    pub fn repeated_exercises(&self) -> usize {
        self.routines
            .iter()
            .flat_map(|r| &r.ordered_exercises)
            .filter(|e| e.is_repeat)
            .count()
    }

    /// Format program for terminal output
    pub fn format(&self) -> String {
        if self.routines.is_empty() {
            return "No exercises available - nothing to generate".to_string();
        }
        let mut sections = vec![format!("{}-day program", self.frequency)];
        sections.extend(self.routines.iter().map(Routine::format));
        sections.join("\n\n")
    }
}

fn check_frequency(frequency: u32) -> Result<&'static SplitTemplate> {
    split_template(frequency).ok_or_else(|| {
        FitnessError::invalid(format!(
            "frequency must be between {} and {}, got {}",
            MIN_FREQUENCY, MAX_FREQUENCY, frequency
        ))
    })
}

/// Generate one routine per training day with default settings
pub fn generate_routines(exercise_pool: &[Exercise], frequency: u32) -> Result<Vec<Routine>> {
    generate_routines_with(exercise_pool, frequency, &GeneratorSettings::default())
}

/// Generate one routine per training day.
///
/// An empty pool yields no routines. A pool too small to fill every day
/// with distinct exercises reuses them at reduced intensity.
pub fn generate_routines_with(
    exercise_pool: &[Exercise],
    frequency: u32,
    settings: &GeneratorSettings,
) -> Result<Vec<Routine>> {
    let template = check_frequency(frequency)?;

    if exercise_pool.is_empty() {
        debug!(frequency, "Empty exercise pool, no routines generated");
        return Ok(Vec::new());
    }

    let mut usage = ExerciseUsage::default();
    let routines: Vec<Routine> = template
        .days
        .iter()
        .map(|day| {
            let candidates = gather_candidates(exercise_pool, day);
            let selection = select_day(&candidates, day, &mut usage, settings.max_main_exercises);
            assemble_routine(day, &selection, settings.repeat_decrement, settings.intensity_floor)
        })
        .collect();

    debug!(
        frequency,
        pool = exercise_pool.len(),
        exercises = routines.iter().map(|r| r.ordered_exercises.len()).sum::<usize>(),
        "Generated routines"
    );

    Ok(routines)
}

/// Generate a full program with default settings
pub fn generate_program(exercise_pool: &[Exercise], frequency: u32) -> Result<GeneratedProgram> {
    let routines = generate_routines(exercise_pool, frequency)?;
    Ok(GeneratedProgram { frequency, routines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::Category::{self, *};
    use crate::exercises::MuscleGroup::{self, *};
    use crate::exercises::default_exercise_pool;
    use std::collections::HashSet;

    fn ex(id: &str, group: MuscleGroup, category: Category) -> Exercise {
        Exercise::new(id, id, group, category)
    }

    fn category_positions(routine: &Routine, category: Category) -> Vec<usize> {
        routine
            .ordered_exercises
            .iter()
            .enumerate()
            .filter(|(_, e)| e.exercise.category == category)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_invalid_frequency() {
        let pool = default_exercise_pool();
        for frequency in [0, 1, 8, 100] {
            let err = generate_routines(&pool, frequency).unwrap_err();
            assert!(matches!(err, FitnessError::InvalidArgument(_)));
            assert!(err.to_string().contains(&frequency.to_string()), "Error: {}", err);
        }
    }

    #[test]
    fn test_invalid_frequency_with_empty_pool() {
        assert!(generate_routines(&[], 8).is_err());
    }

    #[test]
    fn test_empty_pool_yields_no_routines() {
        for frequency in MIN_FREQUENCY..=MAX_FREQUENCY {
            assert!(generate_routines(&[], frequency).unwrap().is_empty());
        }
    }

    #[test]
    fn test_routine_count_matches_frequency() {
        let pool = default_exercise_pool();
        for frequency in MIN_FREQUENCY..=MAX_FREQUENCY {
            let routines = generate_routines(&pool, frequency).unwrap();
            assert_eq!(routines.len(), frequency as usize);
        }
    }

    #[test]
    fn test_two_day_upper_lower_coverage() {
        let routines = generate_routines(&default_exercise_pool(), 2).unwrap();
        let template = split_template(2).unwrap();

        assert_eq!(routines[0].day_label, "Upper Body");
        assert_eq!(routines[1].day_label, "Lower Body");

        let covered: HashSet<MuscleGroup> =
            routines.iter().flat_map(|r| r.covered_muscle_groups()).collect();
        let expected: HashSet<MuscleGroup> =
            template.days.iter().flat_map(|d| d.muscle_groups.iter().copied()).collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_three_day_push_pull_legs_ordering() {
        let routines = generate_routines(&default_exercise_pool(), 3).unwrap();
        let labels: Vec<_> = routines.iter().map(|r| r.day_label.as_str()).collect();
        assert_eq!(labels, vec!["Push Day", "Pull Day", "Leg Day"]);

        for routine in &routines {
            let compounds = category_positions(routine, Compound);
            let isolations = category_positions(routine, Isolation);
            assert!(!compounds.is_empty(), "{} has no compound", routine.name);
            if let (Some(last_compound), Some(first_isolation)) =
                (compounds.last(), isolations.first())
            {
                assert!(last_compound < first_isolation, "Bad order in {}", routine.name);
            }
        }
    }

    #[test]
    fn test_warmup_first_cooldown_last() {
        let pool = default_exercise_pool();
        for frequency in MIN_FREQUENCY..=MAX_FREQUENCY {
            for routine in generate_routines(&pool, frequency).unwrap() {
                for i in category_positions(&routine, Warmup) {
                    let before = &routine.ordered_exercises[..i];
                    let warmups_only = before.iter().all(|e| e.exercise.category == Warmup);
                    assert!(warmups_only, "{}", routine.name);
                }
                for i in category_positions(&routine, Cooldown) {
                    let after = &routine.ordered_exercises[i..];
                    let cooldowns_only = after.iter().all(|e| e.exercise.category == Cooldown);
                    assert!(cooldowns_only, "{}", routine.name);
                }
            }
        }
    }

    #[test]
    fn test_names_follow_label_and_groups() {
        let routines = generate_routines(&default_exercise_pool(), 3).unwrap();
        assert_eq!(routines[0].name, "Push Day — Chest, Shoulders & Triceps");
        assert_eq!(routines[1].name, "Pull Day — Back & Biceps");
    }

    #[test]
    fn test_intensity_bands() {
        let routines = generate_routines(&default_exercise_pool(), 3).unwrap();
        for slot in routines.iter().flat_map(|r| &r.ordered_exercises) {
            match slot.exercise.category {
                Compound => assert!((75..=85).contains(&slot.intensity_percent)),
                Isolation => assert!((60..=70).contains(&slot.intensity_percent)),
                _ => assert!(slot.intensity_percent <= 50),
            }
        }
    }

    #[test]
    fn test_no_repeats_when_pool_is_large_enough() {
        let program = generate_program(&default_exercise_pool(), 3).unwrap();
        assert_eq!(program.repeated_exercises(), 0);
    }

    #[test]
    fn test_small_pool_repeats_at_reduced_intensity() {
        let pool = vec![
            ex("bench", Chest, Compound),
            ex("row", Back, Compound),
            ex("squat", Quads, Compound),
        ];
        let routines = generate_routines(&pool, 4).unwrap();

        // Upper A, Lower A, Upper B, Lower B
        let upper_b = &routines[2];
        assert!(upper_b.ordered_exercises.iter().all(|e| e.is_repeat));
        assert!(upper_b.ordered_exercises.iter().all(|e| e.intensity_percent == 70));

        let lower_b = &routines[3];
        assert_eq!(lower_b.ordered_exercises.len(), 1);
        assert_eq!(lower_b.ordered_exercises[0].intensity_percent, 70);
    }

    #[test]
    fn test_repeat_intensity_floor() {
        let pool = vec![ex("row", Back, Compound)];
        let routines = generate_routines(&pool, 6).unwrap();
        // Pull A and Pull B both need the row; push and leg days stay empty
        let intensities: Vec<_> = routines
            .iter()
            .flat_map(|r| r.ordered_exercises.iter().map(|e| e.intensity_percent))
            .collect();
        assert_eq!(intensities, vec![80, 70]);

        let settings = GeneratorSettings { repeat_decrement: 40, ..Default::default() };
        let routines = generate_routines_with(&pool, 6, &settings).unwrap();
        assert_eq!(routines[4].ordered_exercises[0].intensity_percent, MIN_REPEAT_INTENSITY);
    }

    #[test]
    fn test_pool_without_matching_groups() {
        let pool = vec![ex("curl", Biceps, Isolation)];
        let routines = generate_routines(&pool, 3).unwrap();
        assert_eq!(routines.len(), 3);
        assert!(routines[0].is_empty());
        assert!(!routines[1].is_empty());
        assert!(routines[2].is_empty());
    }

    #[test]
    fn test_big_muscle_balance_on_leg_day() {
        let pool = vec![
            ex("squat", Quads, Compound),
            ex("front_squat", Quads, Compound),
            ex("leg_press", Quads, Compound),
            ex("rdl", Hamstrings, Compound),
            ex("good_morning", Hamstrings, Compound),
            ex("hip_thrust", Glutes, Compound),
        ];
        let routines = generate_routines(&pool, 3).unwrap();
        let legs = &routines[2];
        let groups: Vec<_> = legs
            .ordered_exercises
            .iter()
            .map(|e| e.exercise.primary_muscle_group)
            .collect();

        assert_eq!(groups, vec![Quads, Hamstrings, Glutes, Quads, Hamstrings, Quads]);
    }

    #[test]
    fn test_deterministic() {
        let pool = default_exercise_pool();
        assert_eq!(generate_routines(&pool, 5).unwrap(), generate_routines(&pool, 5).unwrap());
    }

    #[test]
    fn test_program_format() {
        let program = generate_program(&default_exercise_pool(), 2).unwrap();
        let formatted = program.format();
        assert!(formatted.starts_with("2-day program"));
        assert!(formatted.contains("Upper Body — "));

        let empty = generate_program(&[], 2).unwrap();
        assert!(empty.format().contains("nothing to generate"));
    }
}
