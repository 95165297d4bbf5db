pub mod builtin;
pub mod schema;

use crate::error::ProcsightError;
use schema::RuleBook;
use std::path::Path;

/// Load a rulebook from a JSON file.
pub fn load_rulebook(path: &Path) -> Result<RuleBook, ProcsightError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProcsightError::RulebookLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let book: RuleBook =
        serde_json::from_str(&content).map_err(|e| ProcsightError::RulebookLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_rulebook(&book)?;
    Ok(book)
}

/// Parse a rulebook from a JSON string (no file path context).
pub fn parse_rulebook_str(json: &str) -> Result<RuleBook, ProcsightError> {
    let book: RuleBook = serde_json::from_str(json).map_err(ProcsightError::Json)?;
    validate_rulebook(&book)?;
    Ok(book)
}

/// Validate that a rulebook is well-formed.
pub fn validate_rulebook(book: &RuleBook) -> Result<(), ProcsightError> {
    if book.insight_rules.is_empty() && book.suggestion_rules.is_empty() {
        return Err(ProcsightError::RulebookInvalid(
            "rulebook defines no rules".into(),
        ));
    }

    for rule in &book.insight_rules {
        if rule.equipment_type.is_empty() {
            return Err(ProcsightError::RulebookInvalid(
                "insight rule has an empty equipment type".into(),
            ));
        }
        if rule.message.is_empty() {
            return Err(ProcsightError::RulebookInvalid(format!(
                "insight rule for '{}' has an empty message",
                rule.equipment_type
            )));
        }
        if let schema::InsightCondition::MeanAbove(threshold) = &rule.condition {
            if !threshold.is_finite() {
                return Err(ProcsightError::RulebookInvalid(format!(
                    "insight rule for '{}' has a non-finite threshold",
                    rule.equipment_type
                )));
            }
        }
    }

    for rule in &book.suggestion_rules {
        if let Some(ref equipment_type) = rule.equipment_type {
            if equipment_type.is_empty() {
                return Err(ProcsightError::RulebookInvalid(
                    "suggestion rule has an empty equipment type (omit the field for a cross-cutting rule)".into(),
                ));
            }
        }
        if rule.message.is_empty() {
            return Err(ProcsightError::RulebookInvalid(
                "suggestion rule has an empty message".into(),
            ));
        }
        if !rule.threshold.is_finite() {
            return Err(ProcsightError::RulebookInvalid(format!(
                "suggestion rule '{}' has a non-finite threshold",
                rule.message
            )));
        }
    }

    Ok(())
}
