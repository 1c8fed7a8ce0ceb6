//! Nutrition module - Weekly nutrient analysis
//!
//! Features:
//! - Daily totals and window averages from the food log
//! - Deficiency/excess classification against RDA ranges
//! - Meal recommendations for the most severe findings

pub mod aggregator;
pub mod classifier;
pub mod recommendations;
pub mod targets;

pub use aggregator::{
    DailyTotals, FoodProfile, NutrientAmounts, NutrientLogEntry, WeeklyAverage,
    calculate_daily_totals, calculate_weekly_averages, filter_window, window_bounds,
};
pub use classifier::{Deficiency, Severity, identify_deficiencies};
pub use recommendations::{MealRecommendation, RecommendationKind, generate_meal_recommendations};
pub use targets::{RdaTarget, RdaTargets, default_rda_targets, validate_rda_targets};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Full weekly analysis for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionReport {
    pub totals: Vec<DailyTotals>,
    pub averages: WeeklyAverage,
    pub deficiencies: Vec<Deficiency>,
    pub recommendations: Vec<MealRecommendation>,
}

impl NutritionReport {
    pub fn has_findings(&self) -> bool {
        !self.deficiencies.is_empty()
    }

    /// Format report for terminal output
    pub fn format(&self) -> String {
        let mut lines = vec![format!(
            "Nutrition over {} days ({} logged)",
            self.averages.window_days,
            self.totals.len()
        )];

        if self.deficiencies.is_empty() {
            lines.push("All tracked nutrients within range".to_string());
        } else {
            lines.push(String::new());
            for deficiency in &self.deficiencies {
                lines.push(format!(
                    "[{:8}] {} ({:.0}%)",
                    deficiency.severity.label(),
                    deficiency.summary(),
                    deficiency.percent_of_target()
                ));
            }
        }

        if !self.recommendations.is_empty() {
            lines.push(String::new());
            lines.push("Recommendations:".to_string());
            for rec in &self.recommendations {
                lines.push(format!("- {}", rec.message));
            }
        }

        lines.join("\n")
    }
}

/// Run the whole pipeline: totals, averages, deficiencies, recommendations.
///
/// `entries` should already be limited to the analysis window; the window
/// length is still the averaging denominator.
pub fn analyze_weekly_nutrition(
    entries: &[NutrientLogEntry],
    rda_targets: &RdaTargets,
    window_days: i64,
) -> Result<NutritionReport> {
    let totals = calculate_daily_totals(entries);
    let averages = calculate_weekly_averages(&totals, window_days)?;
    let deficiencies = identify_deficiencies(&averages, rda_targets);
    let recommendations = generate_meal_recommendations(&deficiencies);

    debug!(
        entries = entries.len(),
        days = totals.len(),
        window_days,
        deficiencies = deficiencies.len(),
        "Analyzed nutrition log"
    );

    Ok(NutritionReport { totals, averages, deficiencies, recommendations })
}
