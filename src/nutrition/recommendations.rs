//! Meal recommendations for the most severe findings

use serde::{Deserialize, Serialize};

use super::classifier::{Deficiency, Severity};
use super::targets::{food_suggestions, nutrient_display_name, nutrient_unit};

/// Only the most severe findings get a recommendation
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    DeficiencyFix,
    ExcessWarning,
}

/// A suggestion addressing one or more findings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecommendation {
    pub target_nutrients: Vec<String>,
    pub message: String,
    pub kind: RecommendationKind,
}

fn severity_prefix(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Very low",
        Severity::Moderate => "Low",
        Severity::Mild => "Slightly low",
        Severity::Excess => "High",
    }
}

fn build_message(deficiency: &Deficiency) -> String {
    let name = nutrient_display_name(&deficiency.nutrient);
    let unit = nutrient_unit(&deficiency.nutrient);
    let intake = format!(
        "{} {} intake ({:.1} {} per day",
        severity_prefix(deficiency.severity),
        name,
        deficiency.actual,
        unit
    );

    if deficiency.severity.is_excess() {
        return format!(
            "{}, safe limit {:.1} {}). Reduce foods high in {}.",
            intake, deficiency.target, unit, name
        );
    }

    let foods = food_suggestions(&deficiency.nutrient)
        .map(str::to_string)
        .unwrap_or_else(|| format!("foods rich in {}", name));
    format!(
        "{}, target {:.1} {}). Add {} to your meals.",
        intake, deficiency.target, unit, foods
    )
}

/// Turn the first `MAX_RECOMMENDATIONS` findings into recommendations.
///
/// `deficiencies` is expected in presentation order, as returned by
/// `identify_deficiencies`.
pub fn generate_meal_recommendations(deficiencies: &[Deficiency]) -> Vec<MealRecommendation> {
    deficiencies
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|deficiency| MealRecommendation {
            target_nutrients: vec![deficiency.nutrient.clone()],
            message: build_message(deficiency),
            kind: if deficiency.severity.is_excess() {
                RecommendationKind::ExcessWarning
            } else {
                RecommendationKind::DeficiencyFix
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_deficiency(
        nutrient: &str,
        severity: Severity,
        actual: f64,
        target: f64,
    ) -> Deficiency {
        Deficiency { nutrient: nutrient.to_string(), severity, actual, target }
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_meal_recommendations(&[]).is_empty());
    }

    #[test]
    fn test_at_most_three() {
        let deficiencies = vec![
            create_deficiency("iron_mg", Severity::Critical, 5.0, 18.0),
            create_deficiency("calcium_mg", Severity::Moderate, 600.0, 1000.0),
            create_deficiency("fiber_g", Severity::Mild, 20.0, 25.0),
            create_deficiency("sodium_mg", Severity::Excess, 4000.0, 3000.0),
        ];
        let recs = generate_meal_recommendations(&deficiencies);

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        let targeted: Vec<_> = recs.iter().flat_map(|r| r.target_nutrients.clone()).collect();
        assert_eq!(targeted, vec!["iron_mg", "calcium_mg", "fiber_g"]);
    }

    #[test]
    fn test_only_input_nutrients() {
        let deficiencies = vec![create_deficiency("protein_g", Severity::Moderate, 30.0, 50.0)];
        let recs = generate_meal_recommendations(&deficiencies);
        assert_eq!(recs.len(), 1);
        assert!(recs.iter().all(|r| r.target_nutrients == vec!["protein_g".to_string()]));
    }

    #[test]
    fn test_deficiency_message_names_foods() {
        let iron = create_deficiency("iron_mg", Severity::Critical, 8.0, 18.0);
        let recs = generate_meal_recommendations(&[iron]);
        assert_eq!(recs[0].kind, RecommendationKind::DeficiencyFix);
        assert!(recs[0].message.contains("iron"), "Message: {}", recs[0].message);
        assert!(recs[0].message.contains("red meat, spinach, lentils"));
        assert!(recs[0].message.starts_with("Very low"));
    }

    #[test]
    fn test_excess_warning() {
        let sodium = create_deficiency("sodium_mg", Severity::Excess, 4200.0, 3000.0);
        let recs = generate_meal_recommendations(&[sodium]);
        assert_eq!(recs[0].kind, RecommendationKind::ExcessWarning);
        assert!(recs[0].message.contains("Reduce"), "Message: {}", recs[0].message);
        assert!(recs[0].message.contains("sodium"));
    }

    #[test]
    fn test_unknown_nutrient_gets_generic_foods() {
        let zinc = create_deficiency("zinc_mg", Severity::Mild, 8.0, 11.0);
        let recs = generate_meal_recommendations(&[zinc]);
        assert!(recs[0].message.contains("foods rich in zinc"), "Message: {}", recs[0].message);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RecommendationKind::DeficiencyFix).unwrap();
        assert_eq!(json, "\"deficiency-fix\"");
        let json = serde_json::to_string(&RecommendationKind::ExcessWarning).unwrap();
        assert_eq!(json, "\"excess-warning\"");
    }
}
