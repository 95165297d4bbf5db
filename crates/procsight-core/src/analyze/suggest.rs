use crate::analyze::outcome::{SafetyAssessment, Suggestion};
use crate::model::EquipmentRow;
use crate::rules::schema::SuggestionRuleDef;

/// Run the per-row threshold rules over a batch.
///
/// Rows are visited in input order; for each row every rule is evaluated in
/// table order and each match appends one suggestion. Matches never suppress
/// each other, so a row can trip a type-specific rule and the cross-cutting
/// critical rule at once. A batch with no matches at all (including the
/// empty batch) yields the explicit `AllClear` state.
pub fn suggest(rows: &[EquipmentRow], rules: &[SuggestionRuleDef]) -> SafetyAssessment {
    let mut suggestions = Vec::new();

    for row in rows {
        for rule in rules {
            if !rule_matches_type(rule, row) {
                continue;
            }
            if rule.when.holds(row.signal(rule.signal), rule.threshold) {
                suggestions.push(Suggestion {
                    level: rule.level,
                    message: render_message(&rule.message, row),
                });
            }
        }
    }

    SafetyAssessment::from_suggestions(suggestions)
}

fn rule_matches_type(rule: &SuggestionRuleDef, row: &EquipmentRow) -> bool {
    match &rule.equipment_type {
        None => true,
        Some(tag) => row.equipment_type.as_str() == tag,
    }
}

/// Substitute `{name}` and `{type}` placeholders in a message template.
fn render_message(template: &str, row: &EquipmentRow) -> String {
    template
        .replace("{name}", &row.name)
        .replace("{type}", row.equipment_type.as_str())
}
