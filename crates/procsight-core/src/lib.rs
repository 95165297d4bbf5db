pub mod analyze;
pub mod error;
pub mod model;
pub mod parsing;
pub mod rules;

use analyze::outcome::DiagnosticReport;
use model::EquipmentRow;
use parsing::RawRecord;
use rules::schema::RuleBook;

/// Main API entry point: analyze a batch of loosely-typed records against a
/// rulebook.
///
/// Normalizes each record at the boundary, then runs the summary aggregator
/// and the two rule engines over the canonical rows. Total function: there
/// is no fatal failure mode for any record shape, so no `Result` here —
/// errors exist only at the rulebook/file boundary.
pub fn analyze_records(records: &[RawRecord], rulebook: &RuleBook) -> DiagnosticReport {
    analyze_rows(parsing::normalize_records(records), rulebook)
}

/// Analyze already-normalized rows.
///
/// The three passes each only read the rows and build their own output, so
/// they have no ordering dependency on one another.
pub fn analyze_rows(rows: Vec<EquipmentRow>, rulebook: &RuleBook) -> DiagnosticReport {
    let summary = analyze::aggregate(&rows);
    let insights = analyze::diagnose(&rows, &rulebook.insight_rules);
    let safety = analyze::suggest(&rows, &rulebook.suggestion_rules);

    DiagnosticReport {
        summary,
        insights,
        safety,
        rows,
    }
}
