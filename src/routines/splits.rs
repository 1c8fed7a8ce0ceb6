//! Split templates - which muscle groups get trained on which day

use crate::exercises::MuscleGroup::{self, *};

pub const MIN_FREQUENCY: u32 = 2;
pub const MAX_FREQUENCY: u32 = 7;

/// One training day of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDay {
    pub label: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
}

impl SplitDay {
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&group)
    }
}

/// Ordered days for a weekly training frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTemplate {
    pub frequency: u32,
    pub days: &'static [SplitDay],
}

const UPPER: &[MuscleGroup] = &[Chest, Back, Shoulders, Biceps, Triceps];
const LOWER: &[MuscleGroup] = &[Quads, Hamstrings, Glutes, Calves, Core];
const PUSH: &[MuscleGroup] = &[Chest, Shoulders, Triceps];
const PULL: &[MuscleGroup] = &[Back, Biceps];
const LEGS: &[MuscleGroup] = &[Quads, Hamstrings, Glutes, Calves, Core];
const ARMS_CORE: &[MuscleGroup] = &[Biceps, Triceps, Shoulders, Core];
const FULL: &[MuscleGroup] = &[Chest, Back, Quads, Hamstrings, Glutes, Shoulders];

const fn day(label: &'static str, muscle_groups: &'static [MuscleGroup]) -> SplitDay {
    SplitDay { label, muscle_groups }
}

const TEMPLATES: &[SplitTemplate] = &[
    SplitTemplate {
        frequency: 2,
        days: &[day("Upper Body", UPPER), day("Lower Body", LOWER)],
    },
    SplitTemplate {
        frequency: 3,
        days: &[day("Push Day", PUSH), day("Pull Day", PULL), day("Leg Day", LEGS)],
    },
    SplitTemplate {
        frequency: 4,
        days: &[
            day("Upper Body A", UPPER),
            day("Lower Body A", LOWER),
            day("Upper Body B", UPPER),
            day("Lower Body B", LOWER),
        ],
    },
    SplitTemplate {
        frequency: 5,
        days: &[
            day("Push Day", PUSH),
            day("Pull Day", PULL),
            day("Leg Day", LEGS),
            day("Upper Body", UPPER),
            day("Lower Body", LOWER),
        ],
    },
    SplitTemplate {
        frequency: 6,
        days: &[
            day("Push Day A", PUSH),
            day("Pull Day A", PULL),
            day("Leg Day A", LEGS),
            day("Push Day B", PUSH),
            day("Pull Day B", PULL),
            day("Leg Day B", LEGS),
        ],
    },
    SplitTemplate {
        frequency: 7,
        days: &[
            day("Push Day", PUSH),
            day("Pull Day", PULL),
            day("Leg Day", LEGS),
            day("Upper Body", UPPER),
            day("Lower Body", LOWER),
            day("Arms & Core", ARMS_CORE),
            day("Full Body", FULL),
        ],
    },
];

/// Template for a frequency in `MIN_FREQUENCY..=MAX_FREQUENCY`
pub fn split_template(frequency: u32) -> Option<&'static SplitTemplate> {
    TEMPLATES.iter().find(|t| t.frequency == frequency)
}
