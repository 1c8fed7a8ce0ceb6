//! Deficiency classification against RDA ranges

use serde::{Deserialize, Serialize};

use super::aggregator::WeeklyAverage;
use super::targets::{RdaTarget, RdaTargets, nutrient_unit};

/// Severity of an out-of-range nutrient, in presentation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Moderate,
    Mild,
    Excess,
}

impl Severity {
    /// 0 = most urgent
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Moderate => 1,
            Severity::Mild => 2,
            Severity::Excess => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Moderate => "moderate",
            Severity::Mild => "mild",
            Severity::Excess => "excess",
        }
    }

    pub fn is_excess(&self) -> bool {
        matches!(self, Severity::Excess)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Upper bounds (as a fraction of `min_optimal`) of each deficit band, checked top-down
const DEFICIT_BANDS: &[(f64, Severity)] = &[
    (0.50, Severity::Critical),
    (0.75, Severity::Moderate),
    (0.90, Severity::Mild),
];

/// A nutrient found out of range for an analysis window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deficiency {
    pub nutrient: String,
    pub severity: Severity,
    pub actual: f64,
    /// `min_optimal` for deficits, `max_safe` for excess
    pub target: f64,
}

impl Deficiency {
    /// Actual intake as a percentage of the target
    pub fn percent_of_target(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        self.actual / self.target * 100.0
    }

    /// One-line summary, e.g. "iron_mg: 8.0 / 18.0 mg (critical)"
    pub fn summary(&self) -> String {
        let unit = nutrient_unit(&self.nutrient);
        let unit = if unit.is_empty() { String::new() } else { format!(" {}", unit) };
        format!(
            "{}: {:.1} / {:.1}{} ({})",
            self.nutrient, self.actual, self.target, unit, self.severity
        )
    }
}

/// Classify one average against its target; `None` means no finding.
/// Excess and deficit are exclusive since both come from the same scalar.
pub fn classify(actual: f64, target: &RdaTarget) -> Option<(Severity, f64)> {
    if let Some(max_safe) = target.max_safe
        && actual > max_safe
    {
        return Some((Severity::Excess, max_safe));
    }
    if target.contains(actual) {
        return None;
    }

    DEFICIT_BANDS
        .iter()
        .find(|(fraction, _)| actual < fraction * target.min_optimal)
        .map(|(_, severity)| (*severity, target.min_optimal))
}

/// Compare window averages with the RDA table.
///
/// Nutrients missing from `rda_targets` are never reported. Output is sorted
/// by severity rank, then by nutrient name.
pub fn identify_deficiencies(
    weekly_average: &WeeklyAverage,
    rda_targets: &RdaTargets,
) -> Vec<Deficiency> {
    let mut deficiencies: Vec<Deficiency> = rda_targets
        .iter()
        .filter_map(|(nutrient, target)| {
            let actual = weekly_average.average(nutrient);
            classify(actual, target).map(|(severity, target)| Deficiency {
                nutrient: nutrient.clone(),
                severity,
                actual,
                target,
            })
        })
        .collect();

    deficiencies.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| a.nutrient.cmp(&b.nutrient))
    });
    deficiencies
}
