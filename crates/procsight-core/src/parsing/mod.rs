pub mod record;
pub mod values;

pub use record::{normalize_record, RawRecord};

use crate::model::EquipmentRow;

/// Normalize a batch of loosely-typed records into canonical rows,
/// preserving input order.
pub fn normalize_records(records: &[RawRecord]) -> Vec<EquipmentRow> {
    records.iter().map(normalize_record).collect()
}
