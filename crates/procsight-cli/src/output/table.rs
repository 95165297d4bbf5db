use procsight_core::analyze::outcome::{DiagnosticReport, SuggestionLevel};
use procsight_core::model::EquipmentRow;

pub fn print_report(report: &DiagnosticReport, verbose: bool) {
    println!("=== Summary ===\n");
    println!("  Total equipment:  {}", report.summary.total_count);
    println!("  Avg flowrate:     {:.2}", report.summary.avg_flowrate);
    println!("  Avg pressure:     {:.2}", report.summary.avg_pressure);
    println!("  Avg temperature:  {:.2}", report.summary.avg_temperature);

    if !report.summary.type_distribution.is_empty() {
        println!("\n  Type distribution:");
        let max_name = report
            .summary
            .type_distribution
            .iter()
            .map(|tc| tc.equipment_type.len())
            .max()
            .unwrap_or(10);
        for tc in &report.summary.type_distribution {
            let label = if tc.equipment_type.is_empty() {
                "(untyped)"
            } else {
                tc.equipment_type.as_str()
            };
            println!("    {:<width$}  {}", label, tc.count, width = max_name.max(9));
        }
    }

    println!("\n=== Trend Insights ===\n");
    if report.insights.is_empty() {
        println!("  No trend findings.");
    } else {
        for insight in &report.insights {
            println!("  [{}] {}", insight.equipment_type, insight.message);
        }
    }

    println!("\n=== Safety Suggestions ===\n");
    if report.safety.is_all_clear() {
        println!("  All systems operating within safe operating limits.");
    } else {
        for suggestion in report.safety.suggestions() {
            println!("  {} {}", level_marker(suggestion.level), suggestion.message);
        }
    }
    println!();

    if verbose {
        println!("=== Rows ===\n");
        print_rows(&report.rows);
    }
}

pub fn print_rows(rows: &[EquipmentRow]) {
    if rows.is_empty() {
        println!("  (no rows)");
        return;
    }

    let max_name = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    let max_type = rows
        .iter()
        .map(|r| r.equipment_type.as_str().len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "  {:<name_w$}  {:<type_w$}  {:>10}  {:>10}  {:>12}",
        "Name",
        "Type",
        "Flowrate",
        "Pressure",
        "Temperature",
        name_w = max_name,
        type_w = max_type
    );
    for row in rows {
        let warn_marker = if row.parse_warning { " (?)" } else { "" };
        println!(
            "  {:<name_w$}  {:<type_w$}  {:>10.2}  {:>10.2}  {:>12.2}{}",
            row.name,
            row.equipment_type.as_str(),
            row.flowrate,
            row.pressure,
            row.temperature,
            warn_marker,
            name_w = max_name,
            type_w = max_type
        );
    }
    println!();
}

fn level_marker(level: SuggestionLevel) -> &'static str {
    match level {
        SuggestionLevel::Info => "[info]   ",
        SuggestionLevel::Warning => "[warning]",
        SuggestionLevel::Danger => "[DANGER] ",
    }
}
