pub mod analyze;
pub mod normalize;
pub mod rules;

use procsight_core::error::ProcsightError;
use procsight_core::parsing::RawRecord;
use std::path::Path;

/// Read a JSON input file into raw records.
///
/// The file must hold an array; non-object elements are rejected rather than
/// silently dropped so a malformed upload is visible at the boundary.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, ProcsightError> {
    let bytes = std::fs::read(path)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;

    let items = value
        .as_array()
        .ok_or_else(|| ProcsightError::InvalidInput(format!("{} is not a JSON array", path.display())))?;

    items
        .iter()
        .map(|item| {
            item.as_object().cloned().ok_or_else(|| {
                ProcsightError::InvalidInput(format!(
                    "{} contains a non-object element",
                    path.display()
                ))
            })
        })
        .collect()
}
