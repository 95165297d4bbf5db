use serde::{Deserialize, Serialize};

use crate::analyze::outcome::SuggestionLevel;
use crate::analyze::trend::Trend;
use crate::model::Signal;

/// A rulebook: the declarative trend and threshold tables the two rule
/// engines iterate over. The builtin book encodes the standard monitoring
/// rules; custom books can be loaded from JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBook {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Per-type-group trend/mean rules, evaluated in order.
    pub insight_rules: Vec<InsightRuleDef>,
    /// Per-row threshold rules, evaluated in order.
    pub suggestion_rules: Vec<SuggestionRuleDef>,
}

/// One diagnostic rule: for groups of the given equipment type, check a
/// condition over the group's ordered signal series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRuleDef {
    pub equipment_type: String,
    pub signal: Signal,
    pub condition: InsightCondition,
    pub message: String,
}

/// Condition over a group's signal series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCondition {
    /// The series classifies as this trend.
    Trend(Trend),
    /// The arithmetic mean of the series exceeds this value.
    MeanAbove(f64),
}

/// Comparison direction for a threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Below,
    Above,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Below => value < threshold,
            Comparison::Above => value > threshold,
        }
    }
}

/// One suggestion rule: compare a row's signal against a threshold.
///
/// `equipment_type: None` makes the rule cross-cutting: it matches every row
/// regardless of type, in addition to whatever type-specific rules already
/// fired for that row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRuleDef {
    #[serde(default)]
    pub equipment_type: Option<String>,
    pub signal: Signal,
    pub when: Comparison,
    pub threshold: f64,
    pub level: SuggestionLevel,
    /// Message template; `{name}` and `{type}` are substituted per row.
    pub message: String,
}
