use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::EquipmentRow;

/// Row count for one equipment type within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    /// Type tag as it appeared on the rows.
    pub equipment_type: String,
    pub count: usize,
}

/// Aggregate statistics over one batch of rows.
///
/// Recomputed per batch and never mutated after construction. Averages are
/// defined as `0.0` for the empty batch rather than NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: usize,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// Distinct types in first-seen order. Kept as a list of pairs so the
    /// order survives serialization; `sum of counts == total_count` always.
    pub type_distribution: Vec<TypeCount>,
}

impl Summary {
    /// Map-style lookup into the distribution.
    pub fn count_for(&self, equipment_type: &str) -> usize {
        self.type_distribution
            .iter()
            .find(|tc| tc.equipment_type == equipment_type)
            .map(|tc| tc.count)
            .unwrap_or(0)
    }
}

/// A root-cause style finding attributed to one equipment-type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Type tag of the group that produced the finding.
    pub equipment_type: String,
    pub message: String,
}

/// Severity of a per-row safety suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionLevel {
    Info,
    Warning,
    Danger,
}

impl fmt::Display for SuggestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionLevel::Info => write!(f, "info"),
            SuggestionLevel::Warning => write!(f, "warning"),
            SuggestionLevel::Danger => write!(f, "danger"),
        }
    }
}

/// A leveled, per-row actionable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub level: SuggestionLevel,
    pub message: String,
}

/// Outcome of the suggestion pass over a whole batch.
///
/// `AllClear` is an explicit state, so "ran and found nothing" is never
/// ambiguous with "not yet evaluated".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SafetyAssessment {
    /// Every row is within safe operating limits.
    AllClear,
    Findings { suggestions: Vec<Suggestion> },
}

impl SafetyAssessment {
    /// Build from collected suggestions; empty means all clear.
    pub fn from_suggestions(suggestions: Vec<Suggestion>) -> SafetyAssessment {
        if suggestions.is_empty() {
            SafetyAssessment::AllClear
        } else {
            SafetyAssessment::Findings { suggestions }
        }
    }

    /// The suggestions, empty for `AllClear`.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SafetyAssessment::AllClear => &[],
            SafetyAssessment::Findings { suggestions } => suggestions,
        }
    }

    pub fn is_all_clear(&self) -> bool {
        matches!(self, SafetyAssessment::AllClear)
    }
}

/// The full analytical report for one batch: the sole output artifact.
///
/// Owned by the caller and immutable once produced. `rows` carries the
/// normalized readings so that downstream table/chart layers can render
/// per-item series without re-normalizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub summary: Summary,
    pub insights: Vec<Insight>,
    pub safety: SafetyAssessment,
    pub rows: Vec<EquipmentRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_findings_collapse_to_all_clear() {
        let a = SafetyAssessment::from_suggestions(vec![]);
        assert!(a.is_all_clear());
        assert!(a.suggestions().is_empty());
    }

    #[test]
    fn test_findings_keep_order() {
        let a = SafetyAssessment::from_suggestions(vec![
            Suggestion {
                level: SuggestionLevel::Warning,
                message: "first".into(),
            },
            Suggestion {
                level: SuggestionLevel::Danger,
                message: "second".into(),
            },
        ]);
        assert!(!a.is_all_clear());
        assert_eq!(a.suggestions()[0].message, "first");
        assert_eq!(a.suggestions()[1].message, "second");
    }

    #[test]
    fn test_all_clear_serializes_with_status_tag() {
        let json = serde_json::to_value(SafetyAssessment::AllClear).unwrap();
        assert_eq!(json["status"], "all_clear");
    }

    #[test]
    fn test_count_for_missing_type_is_zero() {
        let summary = Summary {
            total_count: 1,
            avg_flowrate: 0.0,
            avg_pressure: 0.0,
            avg_temperature: 0.0,
            type_distribution: vec![TypeCount {
                equipment_type: "Pump".into(),
                count: 1,
            }],
        };
        assert_eq!(summary.count_for("Pump"), 1);
        assert_eq!(summary.count_for("Valve"), 0);
    }
}
