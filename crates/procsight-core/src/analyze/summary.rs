use crate::analyze::outcome::{Summary, TypeCount};
use crate::model::EquipmentRow;

/// Compute aggregate statistics over a batch in a single pass.
///
/// Total function: the empty batch yields zero counts and zero averages,
/// never a division error. The type distribution is keyed by the type's
/// string form and preserves first-seen order.
pub fn aggregate(rows: &[EquipmentRow]) -> Summary {
    let mut flow_sum = 0.0;
    let mut pressure_sum = 0.0;
    let mut temperature_sum = 0.0;
    let mut distribution: Vec<TypeCount> = Vec::new();

    for row in rows {
        flow_sum += row.flowrate;
        pressure_sum += row.pressure;
        temperature_sum += row.temperature;

        let tag = row.equipment_type.as_str();
        match distribution.iter_mut().find(|tc| tc.equipment_type == tag) {
            Some(tc) => tc.count += 1,
            None => distribution.push(TypeCount {
                equipment_type: tag.to_string(),
                count: 1,
            }),
        }
    }

    let total_count = rows.len();
    let divisor = if total_count == 0 {
        1.0
    } else {
        total_count as f64
    };

    Summary {
        total_count,
        avg_flowrate: flow_sum / divisor,
        avg_pressure: pressure_sum / divisor,
        avg_temperature: temperature_sum / divisor,
        type_distribution: distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EquipmentType;

    fn row(t: &str, flow: f64, pressure: f64, temp: f64) -> EquipmentRow {
        EquipmentRow {
            name: "eq".into(),
            equipment_type: EquipmentType::parse(t),
            flowrate: flow,
            pressure,
            temperature: temp,
            parse_warning: false,
        }
    }

    #[test]
    fn test_empty_batch_all_zero() {
        let s = aggregate(&[]);
        assert_eq!(s.total_count, 0);
        assert_eq!(s.avg_flowrate, 0.0);
        assert_eq!(s.avg_pressure, 0.0);
        assert_eq!(s.avg_temperature, 0.0);
        assert!(s.type_distribution.is_empty());
    }

    #[test]
    fn test_averages() {
        let s = aggregate(&[
            row("Pump", 100.0, 4.0, 60.0),
            row("Pump", 200.0, 6.0, 80.0),
        ]);
        assert_eq!(s.total_count, 2);
        assert_eq!(s.avg_flowrate, 150.0);
        assert_eq!(s.avg_pressure, 5.0);
        assert_eq!(s.avg_temperature, 70.0);
    }

    #[test]
    fn test_distribution_first_seen_order() {
        let s = aggregate(&[
            row("Valve", 0.0, 0.0, 0.0),
            row("Pump", 0.0, 0.0, 0.0),
            row("Valve", 0.0, 0.0, 0.0),
            row("Reactor", 0.0, 0.0, 0.0),
        ]);
        let keys: Vec<&str> = s
            .type_distribution
            .iter()
            .map(|tc| tc.equipment_type.as_str())
            .collect();
        assert_eq!(keys, vec!["Valve", "Pump", "Reactor"]);
        assert_eq!(s.count_for("Valve"), 2);
    }

    #[test]
    fn test_distribution_sums_to_total() {
        let rows = vec![
            row("Pump", 1.0, 1.0, 1.0),
            row("Pump", 2.0, 2.0, 2.0),
            row("Centrifuge", 3.0, 3.0, 3.0),
            row("Valve", 4.0, 4.0, 4.0),
        ];
        let s = aggregate(&rows);
        let sum: usize = s.type_distribution.iter().map(|tc| tc.count).sum();
        assert_eq!(sum, s.total_count);
    }

    #[test]
    fn test_unrecognized_types_counted() {
        let s = aggregate(&[row("Centrifuge", 0.0, 0.0, 0.0)]);
        assert_eq!(s.count_for("Centrifuge"), 1);
    }
}
