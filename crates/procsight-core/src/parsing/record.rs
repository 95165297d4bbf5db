use serde_json::Value;

use crate::model::{EquipmentRow, EquipmentType, UNKNOWN_EQUIPMENT};
use crate::parsing::values::coerce_numeric;

/// A loosely-typed input record as decoded by the upstream ingestion layer,
/// e.g. one CSV row turned into a JSON object.
pub type RawRecord = serde_json::Map<String, Value>;

// Alias keys per field, probed in order. Upstream sources disagree on
// capitalization, so the canonical capitalized key is tried first.
const NAME_KEYS: &[&str] = &["Equipment Name", "EquipmentName", "name"];
const TYPE_KEYS: &[&str] = &["Type", "type"];
const FLOWRATE_KEYS: &[&str] = &["Flowrate", "flowrate"];
const PRESSURE_KEYS: &[&str] = &["Pressure", "pressure"];
const TEMPERATURE_KEYS: &[&str] = &["Temperature", "temperature"];

/// Normalize one loosely-typed record into a canonical `EquipmentRow`.
///
/// Pure and total: missing fields fall back to defaults, unparseable numeric
/// fields are coerced to `0.0` with the row's `parse_warning` flag set. No
/// input shape makes this fail.
pub fn normalize_record(record: &RawRecord) -> EquipmentRow {
    let name = lookup(record, NAME_KEYS)
        .and_then(text_field)
        .unwrap_or_else(|| UNKNOWN_EQUIPMENT.to_string());

    let equipment_type = lookup(record, TYPE_KEYS)
        .and_then(text_field)
        .map(|s| EquipmentType::parse(&s))
        .unwrap_or_else(|| EquipmentType::Other(String::new()));

    let (flowrate, flow_warn) = coerce_numeric(lookup(record, FLOWRATE_KEYS));
    let (pressure, press_warn) = coerce_numeric(lookup(record, PRESSURE_KEYS));
    let (temperature, temp_warn) = coerce_numeric(lookup(record, TEMPERATURE_KEYS));

    EquipmentRow {
        name,
        equipment_type,
        flowrate,
        pressure,
        temperature,
        parse_warning: flow_warn || press_warn || temp_warn,
    }
}

fn lookup<'a>(record: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| record.get(*k))
}

/// Text content of a field, if it has any. Numbers are accepted as names
/// (some plants tag equipment with bare IDs).
fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_canonical_keys() {
        let row = normalize_record(&record(json!({
            "Equipment Name": "P-101",
            "Type": "Pump",
            "Flowrate": 120.0,
            "Pressure": 6.5,
            "Temperature": 80.0
        })));
        assert_eq!(row.name, "P-101");
        assert_eq!(row.equipment_type, EquipmentType::Pump);
        assert_eq!(row.flowrate, 120.0);
        assert!(!row.parse_warning);
    }

    #[test]
    fn test_lowercase_aliases() {
        let row = normalize_record(&record(json!({
            "name": "R-1",
            "type": "Reactor",
            "flowrate": "90",
            "pressure": "7.2",
            "temperature": "130"
        })));
        assert_eq!(row.name, "R-1");
        assert_eq!(row.equipment_type, EquipmentType::Reactor);
        assert_eq!(row.pressure, 7.2);
    }

    #[test]
    fn test_canonical_key_wins_over_alias() {
        let row = normalize_record(&record(json!({
            "Flowrate": 100.0,
            "flowrate": 999.0,
            "Type": "Pump"
        })));
        assert_eq!(row.flowrate, 100.0);
    }

    #[test]
    fn test_missing_name_defaults() {
        let row = normalize_record(&record(json!({ "Type": "Valve" })));
        assert_eq!(row.name, UNKNOWN_EQUIPMENT);
    }

    #[test]
    fn test_missing_type_is_unrecognized() {
        let row = normalize_record(&record(json!({ "Equipment Name": "X" })));
        assert!(!row.equipment_type.is_recognized());
    }

    #[test]
    fn test_unparseable_numeric_coerces_and_warns() {
        let row = normalize_record(&record(json!({
            "Type": "Pump",
            "Flowrate": "garbage",
            "Pressure": 5.0
        })));
        assert_eq!(row.flowrate, 0.0);
        assert_eq!(row.pressure, 5.0);
        assert!(row.parse_warning);
    }

    #[test]
    fn test_missing_numerics_default_without_warning() {
        let row = normalize_record(&record(json!({ "Type": "Pump" })));
        assert_eq!(row.flowrate, 0.0);
        assert_eq!(row.pressure, 0.0);
        assert_eq!(row.temperature, 0.0);
        assert!(!row.parse_warning);
    }

    #[test]
    fn test_numeric_name_accepted() {
        let row = normalize_record(&record(json!({ "Equipment Name": 42 })));
        assert_eq!(row.name, "42");
    }
}
