//! Exercise partitioning - picks each day's exercises from the pool

use std::collections::{HashMap, HashSet};

use super::splits::SplitDay;
use crate::exercises::{Category, Exercise, MuscleGroup};

/// How often each exercise has been scheduled so far in the program
#[derive(Debug, Default)]
pub struct ExerciseUsage {
    counts: HashMap<String, u32>,
}

impl ExerciseUsage {
    pub fn times_used(&self, exercise: &Exercise) -> u32 {
        self.counts.get(&exercise.id).copied().unwrap_or(0)
    }

    /// Record one use, returning how many times it was used before
    pub fn record(&mut self, exercise: &Exercise) -> u32 {
        let count = self.counts.entry(exercise.id.clone()).or_insert(0);
        let previous = *count;
        *count += 1;
        previous
    }
}

/// An exercise picked for a day, with its number of earlier appearances
#[derive(Debug, Clone, Copy)]
pub struct Pick<'a> {
    pub exercise: &'a Exercise,
    pub repeat_index: u32,
}

impl Pick<'_> {
    pub fn is_repeat(&self) -> bool {
        self.repeat_index > 0
    }
}

/// Pool exercises eligible for one day, split by category (pool order kept)
#[derive(Debug, Default)]
pub struct DayCandidates<'a> {
    pub warmups: Vec<&'a Exercise>,
    pub compounds: Vec<&'a Exercise>,
    pub isolations: Vec<&'a Exercise>,
    pub cooldowns: Vec<&'a Exercise>,
}

impl DayCandidates<'_> {
    pub fn is_empty(&self) -> bool {
        self.warmups.is_empty()
            && self.compounds.is_empty()
            && self.isolations.is_empty()
            && self.cooldowns.is_empty()
    }
}

/// Exercises chosen for one day, before ordering and prescription
#[derive(Debug, Default)]
pub struct DaySelection<'a> {
    pub warmup: Option<Pick<'a>>,
    pub main: Vec<Pick<'a>>,
    pub cooldown: Option<Pick<'a>>,
}

impl DaySelection<'_> {
    pub fn len(&self) -> usize {
        self.main.len() + usize::from(self.warmup.is_some()) + usize::from(self.cooldown.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Gather the day's candidates by primary muscle group.
/// Full-body warmups and cooldowns fit any day.
pub fn gather_candidates<'a>(pool: &'a [Exercise], day: &SplitDay) -> DayCandidates<'a> {
    let mut candidates = DayCandidates::default();

    for exercise in pool {
        let on_target = day.targets(exercise.primary_muscle_group);
        let any_day = exercise.primary_muscle_group == MuscleGroup::FullBody;

        match exercise.category {
            Category::Warmup if on_target || any_day => candidates.warmups.push(exercise),
            Category::Cooldown if on_target || any_day => candidates.cooldowns.push(exercise),
            Category::Compound if on_target => candidates.compounds.push(exercise),
            Category::Isolation if on_target => candidates.isolations.push(exercise),
            _ => {}
        }
    }

    candidates
}

/// Round-robin across buckets: a1, b1, c1, a2, b2, ...
pub fn interleave<T: Copy>(buckets: &[Vec<T>]) -> Vec<T> {
    let longest = buckets.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .flat_map(move |i| buckets.iter().filter_map(move |b| b.get(i).copied()))
        .collect()
}

/// Bucket exercises by the day's muscle groups, in the day's group order
fn by_group<'a>(exercises: &[&'a Exercise], groups: &[MuscleGroup]) -> Vec<Vec<&'a Exercise>> {
    groups
        .iter()
        .map(|g| exercises.iter().copied().filter(|e| e.primary_muscle_group == *g).collect())
        .collect()
}

/// Big-muscle compounds spread evenly across their groups, then the rest.
/// An exercise's own big-muscle flag decides which compounds are balanced.
pub fn balanced_compound_order<'a>(
    compounds: &[&'a Exercise],
    groups: &[MuscleGroup],
) -> Vec<&'a Exercise> {
    let big: Vec<&Exercise> = compounds
        .iter()
        .copied()
        .filter(|e| e.is_big() && groups.contains(&e.primary_muscle_group))
        .collect();
    let big_groups: Vec<MuscleGroup> = groups
        .iter()
        .copied()
        .filter(|g| big.iter().any(|e| e.primary_muscle_group == *g))
        .collect();

    let mut ordered = interleave(&by_group(&big, &big_groups));
    // Small-group compounds, plus big-flagged ones outside the big groups, keep pool order
    let rest: Vec<&Exercise> = compounds
        .iter()
        .copied()
        .filter(|e| !big.iter().any(|b| b.id == e.id))
        .collect();
    ordered.extend(rest);
    ordered
}

struct Selector<'u, 'a> {
    usage: &'u mut ExerciseUsage,
    picked_today: HashSet<&'a str>,
}

impl<'a> Selector<'_, 'a> {
    fn available(&self, exercise: &Exercise) -> bool {
        !self.picked_today.contains(exercise.id.as_str())
    }

    fn unused(&self, exercise: &Exercise) -> bool {
        self.available(exercise) && self.usage.times_used(exercise) == 0
    }

    /// First unused exercise, else the least used one (stable by order)
    fn choose(&self, options: &[&'a Exercise]) -> Option<&'a Exercise> {
        options.iter().copied().find(|e| self.unused(e)).or_else(|| {
            options
                .iter()
                .copied()
                .filter(|e| self.available(e))
                .min_by_key(|e| self.usage.times_used(e))
        })
    }

    fn take(&mut self, exercise: &'a Exercise) -> Pick<'a> {
        self.picked_today.insert(exercise.id.as_str());
        let repeat_index = self.usage.record(exercise);
        Pick { exercise, repeat_index }
    }
}

/// Choose a day's exercises.
///
/// Every target muscle group gets one main exercise when the pool has one,
/// reusing an exercise from an earlier day only if nothing unused is left.
/// Remaining slots up to `max_main` are filled with unused exercises only.
pub fn select_day<'a>(
    candidates: &DayCandidates<'a>,
    day: &SplitDay,
    usage: &mut ExerciseUsage,
    max_main: usize,
) -> DaySelection<'a> {
    let mut selector = Selector { usage, picked_today: HashSet::new() };
    let mut selection = DaySelection::default();

    if let Some(warmup) = selector.choose(&candidates.warmups) {
        selection.warmup = Some(selector.take(warmup));
    }

    // Coverage: one exercise per target group, compounds first
    for group in day.muscle_groups {
        if selection.main.iter().any(|p| p.exercise.primary_muscle_group == *group) {
            continue;
        }
        let options: Vec<&Exercise> = candidates
            .compounds
            .iter()
            .chain(candidates.isolations.iter())
            .copied()
            .filter(|e| e.primary_muscle_group == *group)
            .collect();
        if let Some(exercise) = selector.choose(&options) {
            let pick = selector.take(exercise);
            selection.main.push(pick);
        }
    }

    // Fill with unused exercises: balanced compounds, then isolations by group
    let isolations = interleave(&by_group(&candidates.isolations, day.muscle_groups));
    let fill_order: Vec<&Exercise> =
        balanced_compound_order(&candidates.compounds, day.muscle_groups)
            .into_iter()
            .chain(isolations)
            .collect();
    for exercise in fill_order {
        if selection.main.len() >= max_main {
            break;
        }
        if selector.unused(exercise) {
            let pick = selector.take(exercise);
            selection.main.push(pick);
        }
    }

    if let Some(cooldown) = selector.choose(&candidates.cooldowns) {
        selection.cooldown = Some(selector.take(cooldown));
    }

    selection
}
