use procsight_core::analyze::outcome::DiagnosticReport;
use procsight_core::error::ProcsightError;

pub fn print(report: &DiagnosticReport) -> Result<(), ProcsightError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
