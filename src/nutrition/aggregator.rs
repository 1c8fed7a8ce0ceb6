//! Daily totals and window averages from a nutrition log

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::{FitnessError, Result};

/// Nutrient identifier -> amount
pub type NutrientAmounts = BTreeMap<String, f64>;

/// One logged food or meal. Amounts already include the servings multiplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientLogEntry {
    pub date: NaiveDate,
    pub nutrient_amounts: NutrientAmounts,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

/// Per-serving nutrient profile of a food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodProfile {
    pub name: String,
    pub per_serving: NutrientAmounts,
}

impl NutrientLogEntry {
    pub fn new(date: NaiveDate, nutrient_amounts: NutrientAmounts) -> Self {
        Self { date, nutrient_amounts, servings: 1.0 }
    }

    /// Log `servings` of a food, scaling its per-serving profile
    pub fn from_food(date: NaiveDate, food: &FoodProfile, servings: f64) -> Self {
        let servings = servings.max(0.0);
        let nutrient_amounts = food
            .per_serving
            .iter()
            .map(|(nutrient, amount)| (nutrient.clone(), amount * servings))
            .collect();
        Self { date, nutrient_amounts, servings }
    }
}

/// Summed intake for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub totals: NutrientAmounts,
}

impl DailyTotals {
    pub fn total(&self, nutrient: &str) -> f64 {
        self.totals.get(nutrient).copied().unwrap_or(0.0)
    }
}

/// Mean daily intake over an analysis window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyAverage {
    pub window_days: i64,
    pub averages: NutrientAmounts,
}

impl WeeklyAverage {
    /// Average for a nutrient; nutrients never logged average to zero
    pub fn average(&self, nutrient: &str) -> f64 {
        self.averages.get(nutrient).copied().unwrap_or(0.0)
    }
}

fn check_window(window_days: i64) -> Result<()> {
    if window_days <= 0 {
        return Err(FitnessError::invalid(format!(
            "window_days must be positive, got {}",
            window_days
        )));
    }
    Ok(())
}

/// Sum in ascending order so the result does not depend on input order
fn ordered_sum(mut amounts: Vec<f64>) -> f64 {
    amounts.sort_by(f64::total_cmp);
    amounts.into_iter().sum()
}

/// Group entries by date and sum their amounts.
///
/// Only dates present in the log are returned, in ascending order.
/// Negative amounts are treated as zero so totals never go below zero.
pub fn calculate_daily_totals(entries: &[NutrientLogEntry]) -> Vec<DailyTotals> {
    let mut by_day: BTreeMap<NaiveDate, BTreeMap<String, Vec<f64>>> = BTreeMap::new();

    for entry in entries {
        let day = by_day.entry(entry.date).or_default();
        for (nutrient, amount) in &entry.nutrient_amounts {
            day.entry(nutrient.clone()).or_default().push(amount.max(0.0));
        }
    }

    by_day
        .into_iter()
        .map(|(date, amounts)| DailyTotals {
            date,
            totals: amounts
                .into_iter()
                .map(|(nutrient, values)| (nutrient, ordered_sum(values)))
                .collect(),
        })
        .collect()
}

/// Average daily totals over `window_days`.
///
/// The denominator is the window length, not the number of logged days, so
/// days without entries count as zero intake.
pub fn calculate_weekly_averages(
    daily_totals: &[DailyTotals],
    window_days: i64,
) -> Result<WeeklyAverage> {
    check_window(window_days)?;

    let mut sums: NutrientAmounts = BTreeMap::new();
    for day in daily_totals {
        for (nutrient, amount) in &day.totals {
            *sums.entry(nutrient.clone()).or_insert(0.0) += amount;
        }
    }

    let averages = sums
        .into_iter()
        .map(|(nutrient, sum)| (nutrient, sum / window_days as f64))
        .collect();

    Ok(WeeklyAverage { window_days, averages })
}

/// First and last day (both inclusive) of the window ending at `end`
pub fn window_bounds(end: NaiveDate, window_days: i64) -> Result<(NaiveDate, NaiveDate)> {
    check_window(window_days)?;
    let start = TimeDelta::try_days(window_days - 1)
        .and_then(|span| end.checked_sub_signed(span))
        .ok_or_else(|| {
            FitnessError::invalid(format!(
                "window_days {} ending {} starts before the earliest supported date",
                window_days, end
            ))
        })?;
    Ok((start, end))
}

/// Keep the days falling in the `window_days` ending at `end`
pub fn filter_window(
    daily_totals: &[DailyTotals],
    end: NaiveDate,
    window_days: i64,
) -> Result<Vec<DailyTotals>> {
    let (start, end) = window_bounds(end, window_days)?;

    Ok(daily_totals
        .iter()
        .filter(|d| d.date >= start && d.date <= end)
        .cloned()
        .collect())
}
