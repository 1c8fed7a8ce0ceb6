//! Reference daily allowance table and per-nutrient food suggestions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FitnessError, Result};

/// Target range for one nutrient, in the nutrient's own unit per day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RdaTarget {
    pub min_optimal: f64,
    pub max_optimal: f64,
    /// Ceiling above which intake is flagged as excess
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_safe: Option<f64>,
}

impl RdaTarget {
    pub fn new(min_optimal: f64, max_optimal: f64, max_safe: Option<f64>) -> Self {
        Self { min_optimal, max_optimal, max_safe }
    }

    /// Whether `actual` sits inside the optimal range
    pub fn contains(&self, actual: f64) -> bool {
        actual >= self.min_optimal && actual <= self.max_optimal
    }

    /// Check `0 <= min_optimal <= max_optimal <= max_safe`
    pub fn validate(&self, nutrient: &str) -> Result<()> {
        let bounds = [Some(self.min_optimal), Some(self.max_optimal), self.max_safe];
        if bounds.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(FitnessError::invalid(format!(
                "{}: target bounds must be finite and non-negative",
                nutrient
            )));
        }
        if self.min_optimal > self.max_optimal {
            return Err(FitnessError::invalid(format!(
                "{}: min_optimal {} exceeds max_optimal {}",
                nutrient, self.min_optimal, self.max_optimal
            )));
        }
        if let Some(max_safe) = self.max_safe
            && self.max_optimal > max_safe
        {
            return Err(FitnessError::invalid(format!(
                "{}: max_optimal {} exceeds max_safe {}",
                nutrient, self.max_optimal, max_safe
            )));
        }
        Ok(())
    }
}

/// Nutrient identifier -> target range
pub type RdaTargets = BTreeMap<String, RdaTarget>;

/// Adult daily targets: (nutrient, min optimal, max optimal, max safe)
const DEFAULT_RDA: &[(&str, f64, f64, Option<f64>)] = &[
    ("calories", 1800.0, 2500.0, Some(3500.0)),
    ("protein_g", 50.0, 150.0, None),
    ("carbs_g", 130.0, 325.0, Some(450.0)),
    ("fat_g", 44.0, 78.0, Some(100.0)),
    ("fiber_g", 25.0, 38.0, Some(70.0)),
    ("sugar_g", 0.0, 36.0, Some(50.0)),
    ("sodium_mg", 1500.0, 2300.0, Some(3000.0)),
    ("potassium_mg", 3400.0, 4700.0, None),
    ("calcium_mg", 1000.0, 1300.0, Some(2500.0)),
    ("iron_mg", 18.0, 45.0, Some(45.0)),
    ("magnesium_mg", 400.0, 420.0, Some(700.0)),
    ("vitamin_c_mg", 90.0, 2000.0, Some(2000.0)),
    ("vitamin_d_mcg", 15.0, 100.0, Some(100.0)),
];

/// Build the bundled RDA table
pub fn default_rda_targets() -> RdaTargets {
    DEFAULT_RDA
        .iter()
        .map(|(name, min, max, safe)| (name.to_string(), RdaTarget::new(*min, *max, *safe)))
        .collect()
}

/// Validate every entry of a (possibly user-supplied) table
pub fn validate_rda_targets(targets: &RdaTargets) -> Result<()> {
    for (nutrient, target) in targets {
        target.validate(nutrient)?;
    }
    Ok(())
}

/// Foods to suggest when a nutrient runs low
const FOOD_SUGGESTIONS: &[(&str, &str)] = &[
    ("calories", "whole grains, nut butters, olive oil"),
    ("protein_g", "chicken breast, Greek yogurt, eggs, lentils"),
    ("carbs_g", "oats, rice, potatoes, fruit"),
    ("fat_g", "avocado, nuts, olive oil, salmon"),
    ("fiber_g", "beans, broccoli, berries, whole grains"),
    ("sodium_mg", "broth, pickles, salted nuts"),
    ("potassium_mg", "bananas, potatoes, spinach, beans"),
    ("calcium_mg", "dairy, fortified plant milk, sardines, kale"),
    ("iron_mg", "red meat, spinach, lentils"),
    ("magnesium_mg", "pumpkin seeds, almonds, dark chocolate"),
    ("vitamin_c_mg", "citrus fruits, bell peppers, strawberries"),
    ("vitamin_d_mcg", "fatty fish, egg yolks, fortified milk"),
];

pub fn food_suggestions(nutrient: &str) -> Option<&'static str> {
    FOOD_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == nutrient)
        .map(|(_, foods)| *foods)
}

const UNIT_SUFFIXES: &[(&str, &str)] = &[("_mcg", "mcg"), ("_mg", "mg"), ("_g", "g")];

/// Unit of a nutrient identifier, taken from its suffix
pub fn nutrient_unit(nutrient: &str) -> &'static str {
    if nutrient == "calories" {
        return "kcal";
    }
    UNIT_SUFFIXES
        .iter()
        .find(|(suffix, _)| nutrient.ends_with(suffix))
        .map(|(_, unit)| *unit)
        .unwrap_or("")
}

/// Human-readable nutrient name: "vitamin_c_mg" -> "vitamin c"
pub fn nutrient_display_name(nutrient: &str) -> String {
    let base = UNIT_SUFFIXES
        .iter()
        .find_map(|(suffix, _)| nutrient.strip_suffix(suffix))
        .unwrap_or(nutrient);
    base.replace('_', " ")
}
