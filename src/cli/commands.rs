//! CLI command implementations
//!
//! Each command follows the same sequence:
//! 1. Configuration load (defaults when no file is given)
//! 2. Logger setup
//! 3. Rule table load
//! 4. Evaluation
//! 5. One JSON response on stdout
//!
//! The CLI stands in for the service layer that owns the records: it applies
//! promotions and hands the updated records back, but stores nothing.

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::{Config, RuleSource};
use crate::observability::{log_event_with_fields, Event, Logger, PromotionMetrics};
use crate::promotion::{PromotionDecision, PromotionEvaluator};
use crate::rules::PromotionRuleTable;
use crate::student::StudentRecord;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_record, read_records, write_error, write_records, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
///
/// On failure an error response is written to stdout before the error is
/// returned. The original error is returned even if that write fails.
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Evaluate { config, date, dry_run } => {
            evaluate(config.as_deref(), date, dry_run)
        }
        Command::Batch {
            config,
            date,
            input,
            output,
        } => batch(config.as_deref(), date, &input, output.as_deref()),
        Command::Rules { config } => rules(config.as_deref()),
    };

    if let Err(e) = &result {
        report_failure(&mut io::stdout(), e);
    }

    result
}

/// Evaluate one record read from stdin
pub fn evaluate(config_path: Option<&Path>, date: Option<NaiveDate>, dry_run: bool) -> CliResult<()> {
    let (config, rules, _) = setup(config_path)?;
    let today = date.unwrap_or_else(|| config.today());

    let mut record = read_record(io::stdin().lock())?;
    let data = evaluate_record(&rules, &mut record, today, dry_run)?;

    write_response(&mut io::stdout(), data)
}

/// Promote every record in `input`
pub fn batch(
    config_path: Option<&Path>,
    date: Option<NaiveDate>,
    input: &Path,
    output: Option<&Path>,
) -> CliResult<()> {
    let (config, rules, _) = setup(config_path)?;
    let today = date.unwrap_or_else(|| config.today());

    let data = run_batch(&rules, input, output, today)?;

    write_response(&mut io::stdout(), data)
}

/// Print the active rule table
pub fn rules(config_path: Option<&Path>) -> CliResult<()> {
    let (_, table, source) = setup(config_path)?;
    write_response(&mut io::stdout(), rules_payload(&table, &source))
}

fn rules_payload(table: &PromotionRuleTable, source: &RuleSource) -> Value {
    json!({
        "source": source.label(),
        "rules": table,
    })
}

/// Evaluate one record and build the response payload.
///
/// Unless `dry_run` is set, a promotion is applied to `record` before it is
/// echoed back.
pub fn evaluate_record(
    rules: &PromotionRuleTable,
    record: &mut StudentRecord,
    today: NaiveDate,
    dry_run: bool,
) -> CliResult<Value> {
    let decision = PromotionEvaluator::new(rules).evaluate(record, today);
    log_decision(record, &decision);

    if !dry_run {
        if let Some(patch) = decision.patch() {
            patch.apply(record);
        }
    }

    Ok(json!({
        "date": today.to_string(),
        "promoted": decision.is_promoted(),
        "reason": decision.skip_reason(),
        "explanation": decision.explain(),
        "record": serde_json::to_value(&*record)?,
    }))
}

/// Promote the records in `input` and build the response payload.
///
/// Updated records go to `output` when given, otherwise they are embedded
/// in the payload under `records`.
pub fn run_batch(
    rules: &PromotionRuleTable,
    input: &Path,
    output: Option<&Path>,
    today: NaiveDate,
) -> CliResult<Value> {
    let mut records = read_records(input)?;
    let count = records.len().to_string();
    let date = today.to_string();
    log_event_with_fields(Event::BatchBegin, &[("date", date.as_str()), ("records", count.as_str())]);

    let metrics = PromotionMetrics::new();
    metrics.increment_batches();

    let report = PromotionEvaluator::new(rules).evaluate_batch(&mut records, today);
    for (record, decision) in records.iter().zip(&report.decisions) {
        log_decision(record, decision);
        if decision.is_promoted() {
            metrics.record_promoted();
        } else {
            metrics.record_skipped();
        }
    }

    let promoted = report.promoted.to_string();
    log_event_with_fields(
        Event::BatchComplete,
        &[("promoted", promoted.as_str()), ("records", count.as_str())],
    );

    let mut data = json!({
        "date": date,
        "report": report,
        "metrics": metrics.to_json(),
    });

    match output {
        Some(path) => {
            write_records(path, &records)?;
            data["output"] = Value::String(path.display().to_string());
        }
        None => {
            data["records"] = serde_json::to_value(&records)?;
        }
    }

    Ok(data)
}

/// Logs the failure and writes the error response. Returns false if the
/// response could not be written.
fn report_failure<W: Write>(writer: &mut W, err: &CliError) -> bool {
    log_event_with_fields(Event::CommandFailed, &[("code", err.code_str())]);

    match write_error(writer, err.code_str(), err.message()) {
        Ok(()) => true,
        Err(write_err) => {
            log_event_with_fields(
                Event::CommandFailed,
                &[
                    ("code", err.code_str()),
                    ("response", "write_failed"),
                    ("write_error", write_err.message()),
                ],
            );
            false
        }
    }
}

/// Loads config, applies its log level and loads the rule table.
fn setup(config_path: Option<&Path>) -> CliResult<(Config, PromotionRuleTable, RuleSource)> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let config_label = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("config", config_label.as_str())]);

    let (rules, source) = config.load_rules()?;
    let boards = rules.len().to_string();
    let source_label = source.label();
    log_event_with_fields(
        Event::RulesLoaded,
        &[("boards", boards.as_str()), ("source", source_label.as_str())],
    );

    Ok((config, rules, source))
}

/// Identifier used in log lines: `_id` or `id` when it is a string or number.
fn record_id(record: &StudentRecord) -> String {
    ["_id", "id"]
        .iter()
        .filter_map(|key| record.extra.get(*key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| "-".to_string())
}

fn log_decision(record: &StudentRecord, decision: &PromotionDecision) {
    let id = record_id(record);
    match decision {
        PromotionDecision::Promoted(patch) => {
            let year = patch.year.to_string();
            log_event_with_fields(
                Event::StudentPromoted,
                &[
                    ("board", patch.board.as_str()),
                    ("from", patch.from_class.as_str()),
                    ("record", id.as_str()),
                    ("to", patch.to_class.as_str()),
                    ("year", year.as_str()),
                ],
            );
        }
        PromotionDecision::Skipped(reason) => {
            log_event_with_fields(
                Event::PromotionSkipped,
                &[("reason", reason.as_str()), ("record", id.as_str())],
            );
        }
    }
}
