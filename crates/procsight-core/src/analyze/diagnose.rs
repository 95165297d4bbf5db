use crate::analyze::outcome::Insight;
use crate::analyze::trend;
use crate::model::{EquipmentRow, EquipmentType, Signal};
use crate::rules::schema::{InsightCondition, InsightRuleDef};

/// Run the per-type-group diagnostic rules over a batch.
///
/// Rows are grouped by equipment type preserving first-seen group order, and
/// each group keeps its rows in input order. Every rule whose type matches
/// the group is evaluated in rule-table order against the group's ordered
/// signal series; each satisfied rule appends one insight. Rules are
/// independent, never mutually exclusive. Unrecognized types simply match no
/// rule.
pub fn diagnose(rows: &[EquipmentRow], rules: &[InsightRuleDef]) -> Vec<Insight> {
    let mut insights = Vec::new();

    for (equipment_type, group) in group_by_type(rows) {
        let tag = equipment_type.as_str();
        for rule in rules.iter().filter(|r| r.equipment_type == tag) {
            let series = signal_series(&group, rule.signal);
            if condition_holds(&rule.condition, &series) {
                insights.push(Insight {
                    equipment_type: tag.to_string(),
                    message: rule.message.clone(),
                });
            }
        }
    }

    insights
}

fn condition_holds(condition: &InsightCondition, series: &[f64]) -> bool {
    match condition {
        InsightCondition::Trend(expected) => trend::classify(series) == *expected,
        InsightCondition::MeanAbove(threshold) => {
            !series.is_empty() && series.iter().sum::<f64>() / series.len() as f64 > *threshold
        }
    }
}

fn signal_series(group: &[&EquipmentRow], signal: Signal) -> Vec<f64> {
    group.iter().map(|row| row.signal(signal)).collect()
}

/// Group rows by type, first-seen order, rows in input order within a group.
fn group_by_type(rows: &[EquipmentRow]) -> Vec<(EquipmentType, Vec<&EquipmentRow>)> {
    let mut groups: Vec<(EquipmentType, Vec<&EquipmentRow>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(t, _)| *t == row.equipment_type) {
            Some((_, members)) => members.push(row),
            None => groups.push((row.equipment_type.clone(), vec![row])),
        }
    }
    groups
}
