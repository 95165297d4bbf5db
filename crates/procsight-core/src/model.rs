use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback name for a record that carries no name field.
pub const UNKNOWN_EQUIPMENT: &str = "Unknown Equipment";

/// Equipment type tag from the telemetry source.
///
/// Unrecognized tags are preserved in `Other` so they still participate in
/// aggregation (totals, type distribution) even though no type-specific rule
/// will ever match them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentType {
    Pump,
    Reactor,
    Compressor,
    Valve,
    HeatExchanger,
    Condenser,
    Other(String),
}

impl EquipmentType {
    /// Parse a type tag. Matching is exact; anything else lands in `Other`.
    pub fn parse(s: &str) -> EquipmentType {
        match s {
            "Pump" => EquipmentType::Pump,
            "Reactor" => EquipmentType::Reactor,
            "Compressor" => EquipmentType::Compressor,
            "Valve" => EquipmentType::Valve,
            "HeatExchanger" => EquipmentType::HeatExchanger,
            "Condenser" => EquipmentType::Condenser,
            other => EquipmentType::Other(other.to_string()),
        }
    }

    /// The tag as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            EquipmentType::Pump => "Pump",
            EquipmentType::Reactor => "Reactor",
            EquipmentType::Compressor => "Compressor",
            EquipmentType::Valve => "Valve",
            EquipmentType::HeatExchanger => "HeatExchanger",
            EquipmentType::Condenser => "Condenser",
            EquipmentType::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, EquipmentType::Other(_))
    }
}

impl From<String> for EquipmentType {
    fn from(s: String) -> Self {
        EquipmentType::parse(&s)
    }
}

impl From<EquipmentType> for String {
    fn from(t: EquipmentType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The numeric channels of a telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Flowrate,
    Pressure,
    Temperature,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Flowrate => write!(f, "flowrate"),
            Signal::Pressure => write!(f, "pressure"),
            Signal::Temperature => write!(f, "temperature"),
        }
    }
}

/// One normalized telemetry reading for one piece of equipment.
///
/// Constructed once at the ingestion boundary and never mutated afterwards;
/// every engine pass only reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub name: String,
    pub equipment_type: EquipmentType,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
    /// True if any numeric field failed to parse and was coerced to 0.
    #[serde(default)]
    pub parse_warning: bool,
}

impl EquipmentRow {
    pub fn signal(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Flowrate => self.flowrate,
            Signal::Pressure => self.pressure,
            Signal::Temperature => self.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(EquipmentType::parse("Pump"), EquipmentType::Pump);
        assert_eq!(
            EquipmentType::parse("HeatExchanger"),
            EquipmentType::HeatExchanger
        );
    }

    #[test]
    fn test_parse_is_case_exact() {
        assert_eq!(
            EquipmentType::parse("pump"),
            EquipmentType::Other("pump".into())
        );
    }

    #[test]
    fn test_other_round_trips_through_string() {
        let t = EquipmentType::parse("Centrifuge");
        assert_eq!(t.as_str(), "Centrifuge");
        assert!(!t.is_recognized());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&EquipmentType::Valve).unwrap();
        assert_eq!(json, "\"Valve\"");
        let back: EquipmentType = serde_json::from_str("\"Turbine\"").unwrap();
        assert_eq!(back, EquipmentType::Other("Turbine".into()));
    }

    #[test]
    fn test_signal_accessor() {
        let row = EquipmentRow {
            name: "P-101".into(),
            equipment_type: EquipmentType::Pump,
            flowrate: 120.0,
            pressure: 6.5,
            temperature: 80.0,
            parse_warning: false,
        };
        assert_eq!(row.signal(Signal::Flowrate), 120.0);
        assert_eq!(row.signal(Signal::Pressure), 6.5);
        assert_eq!(row.signal(Signal::Temperature), 80.0);
    }
}
