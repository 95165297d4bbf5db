use procsight_core::error::ProcsightError;
use procsight_core::rules::{builtin, load_rulebook, schema::RuleBook};
use std::path::PathBuf;

use crate::commands::read_records;
use crate::output;

pub fn run(
    input_file: PathBuf,
    rules_file: Option<PathBuf>,
    preset: Option<String>,
    output_format: &str,
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), ProcsightError> {
    let rulebook: RuleBook = match rules_file {
        Some(path) => load_rulebook(&path)?,
        None => builtin::load_preset(preset.as_deref().unwrap_or("standard"))?,
    };

    let records = read_records(&input_file)?;
    let report = procsight_core::analyze_records(&records, &rulebook);

    if let Some(out_path) = out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&out_path, json)?;
        eprintln!("Report written to {}", out_path.display());
    }

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report, verbose),
    }

    Ok(())
}
