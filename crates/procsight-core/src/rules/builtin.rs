use crate::error::ProcsightError;
use crate::rules::schema::RuleBook;

const STANDARD_JSON: &str = include_str!("../../../../rules/standard.json");

/// Available predefined rulebooks.
pub const PRESETS: &[&str] = &["standard"];

/// Load a predefined rulebook by name.
pub fn load_preset(name: &str) -> Result<RuleBook, ProcsightError> {
    match name {
        "standard" => {
            let book: RuleBook = serde_json::from_str(STANDARD_JSON)?;
            Ok(book)
        }
        _ => Err(ProcsightError::RulebookInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
