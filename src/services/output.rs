use crate::domain::models::{
    CheckStatus, FactMap, IdSet, JsonOut, ParityReport,
};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_id_set(json: bool, ids: &IdSet) -> anyhow::Result<()> {
    if json {
        return print_one(json, ids, |_| String::new());
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}

pub fn print_fact_map(json: bool, map: &FactMap) -> anyhow::Result<()> {
    if json {
        return print_one(json, map, |_| String::new());
    }
    for (k, v) in map {
        println!("{k}\t{v}");
    }
    Ok(())
}

/// Render the full parity report: section headers, one line per sub-check,
/// then the summary and (on failure) the enumerated failure list.
pub fn print_report(json: bool, report: &ParityReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.passed(),
                data: report,
            })?
        );
        return Ok(());
    }

    for section in &report.sections {
        println!("\n--- {} ---", section.title);
        for check in &section.checks {
            match check.status {
                CheckStatus::Pass => println!("  OK: {}", check.summary),
                CheckStatus::Warn => {
                    for w in &check.warnings {
                        println!("  WARN: {}: {w}", check.name);
                    }
                }
                CheckStatus::Fail => {
                    for d in &check.discrepancies {
                        println!("  FAIL: {}", d.describe());
                    }
                }
            }
            // Warnings ride along even when the comparison itself failed.
            if check.status == CheckStatus::Fail {
                for w in &check.warnings {
                    println!("  WARN: {}: {w}", check.name);
                }
            }
        }
    }

    println!();
    let failures = report.failure_descriptions();
    if failures.is_empty() {
        println!("All parity checks passed!");
    } else {
        println!("FAILED: {} issue(s) found", failures.len());
        for f in &failures {
            println!("  - {f}");
        }
    }
    Ok(())
}
