use procsight_core::error::ProcsightError;
use procsight_core::rules::builtin;
use procsight_core::rules::schema::{Comparison, InsightCondition};
use std::path::Path;

pub fn list() -> Result<(), ProcsightError> {
    println!("Available predefined rulebooks:\n");
    for name in builtin::PRESETS {
        let book = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, book.name, book.version);
        if let Some(ref desc) = book.description {
            println!("             {}", desc);
        }
        println!(
            "             {} insight rules, {} suggestion rules",
            book.insight_rules.len(),
            book.suggestion_rules.len()
        );
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), ProcsightError> {
    let book = builtin::load_preset(preset)?;

    println!("{} (version {})\n", book.name, book.version);

    if let Some(ref desc) = book.description {
        println!("{}\n", desc);
    }

    println!("Insight rules (evaluated per equipment-type group):\n");
    for rule in &book.insight_rules {
        let condition = match &rule.condition {
            InsightCondition::Trend(t) => format!("{} trend is {}", rule.signal, t),
            InsightCondition::MeanAbove(v) => format!("mean {} > {}", rule.signal, v),
        };
        println!("  {:<14} when {}", rule.equipment_type, condition);
        println!("                 -> {}", rule.message);
        println!();
    }

    println!("Suggestion rules (evaluated per row, in order):\n");
    for rule in &book.suggestion_rules {
        let scope = rule.equipment_type.as_deref().unwrap_or("(any type)");
        let op = match rule.when {
            Comparison::Below => "<",
            Comparison::Above => ">",
        };
        println!(
            "  {:<14} {} {} {}  [{}]",
            scope, rule.signal, op, rule.threshold, rule.level
        );
        println!("                 -> {}", rule.message);
        println!();
    }

    println!("A row can match several rules; later rules never suppress earlier");
    println!("ones. Rules without an equipment type apply to every row.");

    Ok(())
}

pub fn schema() -> Result<(), ProcsightError> {
    print!(
        r#"JSON Rulebook Schema
====================

A rulebook defines the trend and threshold rules the analysis engine
applies to a batch of telemetry records. Pass one to `procsight analyze`
with --rules to replace the builtin rules.

Top-level fields:
  name              (string, required)  Human-readable name
  version           (string, required)  Version identifier (e.g., "1.0")
  description       (string, optional)  What this rulebook is for
  insight_rules     (array, required)   Per-type-group rules (see below)
  suggestion_rules  (array, required)   Per-row threshold rules (see below)

Each rule in "insight_rules" applies to the group of rows sharing an
equipment type, over the group's ordered signal series:
  equipment_type  (string, required)  Type tag to match, e.g. "Pump"
  signal          (string, required)  "flowrate", "pressure" or "temperature"
  condition       (object, required)  Either {{ "trend": "rising" | "falling"
                                      | "oscillating" }} or
                                      {{ "mean_above": <number> }}
  message         (string, required)  Insight text emitted when satisfied

Each rule in "suggestion_rules" compares one row's signal to a threshold:
  equipment_type  (string, optional)  Type tag to match. Omit to apply the
                                      rule to every row regardless of type.
  signal          (string, required)  "flowrate", "pressure" or "temperature"
  when            (string, required)  "below" or "above" (strict comparison)
  threshold       (number, required)
  level           (string, required)  "info", "warning" or "danger"
  message         (string, required)  May contain {{name}} and {{type}}
                                      placeholders, substituted per row.

Example:
{{
  "name": "Site X overrides",
  "version": "1.0",
  "insight_rules": [
    {{
      "equipment_type": "Pump",
      "signal": "flowrate",
      "condition": {{ "trend": "falling" }},
      "message": "Pump shows declining flowrate"
    }}
  ],
  "suggestion_rules": [
    {{
      "equipment_type": "Pump",
      "signal": "pressure",
      "when": "below",
      "threshold": 5,
      "level": "warning",
      "message": "Pump \"{{name}}\": low pressure"
    }},
    {{
      "signal": "temperature",
      "when": "above",
      "threshold": 140,
      "level": "danger",
      "message": "{{type}} \"{{name}}\": critical temperature"
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ProcsightError> {
    let book = procsight_core::rules::load_rulebook(file)?;

    println!("Rulebook '{}' (v{}) is valid.", book.name, book.version);
    println!("  Insight rules: {}", book.insight_rules.len());
    println!("  Suggestion rules: {}", book.suggestion_rules.len());

    // Surface likely mistakes that are not hard errors
    let mut warnings = Vec::new();
    for rule in &book.suggestion_rules {
        if !rule.message.contains("{name}") {
            warnings.push(format!(
                "suggestion '{}' does not reference {{name}}; findings will not identify the equipment",
                rule.message
            ));
        }
    }
    if !book
        .suggestion_rules
        .iter()
        .any(|r| r.equipment_type.is_none())
    {
        warnings.push("no cross-cutting rule: rows with unrecognized types can never produce a suggestion".into());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
