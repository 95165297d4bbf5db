use procsight_core::error::ProcsightError;
use procsight_core::parsing::normalize_records;
use std::path::PathBuf;

use crate::commands::read_records;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), ProcsightError> {
    let records = read_records(&input_file)?;
    let rows = normalize_records(&records);

    if let Some(out_path) = out {
        let json = serde_json::to_string_pretty(&rows)?;
        std::fs::write(&out_path, json)?;
        eprintln!("Normalized rows written to {}", out_path.display());
    }

    match output_format {
        "json" => {
            let json = serde_json::to_string_pretty(&rows)?;
            println!("{json}");
        }
        _ => output::table::print_rows(&rows),
    }

    Ok(())
}
