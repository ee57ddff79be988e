use crate::domain::models::{
    CheckOutcome, CheckStatus, Discrepancy, FactMap, IdSet,
};

/// How map categories treat one-sided keys. The original checker mixed both
/// behaviors implicitly; here the policy is picked per category at the call
/// site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPolicy {
    /// Same key set and same value per key.
    Exact,
    /// Only keys defined on both sides are compared; one-sided keys are not
    /// discrepancies (timezone coverage is partial per artifact).
    SharedKeys,
}

fn outcome(
    name: &str,
    summary_ok: String,
    discrepancies: Vec<Discrepancy>,
    warnings: Vec<String>,
) -> CheckOutcome {
    let status = if !discrepancies.is_empty() {
        CheckStatus::Fail
    } else if !warnings.is_empty() {
        CheckStatus::Warn
    } else {
        CheckStatus::Pass
    };
    let summary = match status {
        CheckStatus::Pass => summary_ok,
        CheckStatus::Warn => warnings.join("; "),
        CheckStatus::Fail => format!("{} discrepancies", discrepancies.len()),
    };
    CheckOutcome {
        name: name.to_string(),
        status,
        summary,
        discrepancies,
        warnings,
    }
}

fn empty_warnings(
    left_label: &str,
    left_empty: bool,
    right_label: &str,
    right_empty: bool,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if left_empty {
        warnings.push(format!(
            "zero entries extracted from {left_label} (pattern found no matches?)"
        ));
    }
    if right_empty {
        warnings.push(format!(
            "zero entries extracted from {right_label} (pattern found no matches?)"
        ));
    }
    warnings
}

/// Strict set equality; asymmetric differences are reported separately so the
/// failure names which side is missing which identifier.
pub fn compare_id_sets(
    name: &str,
    left_label: &str,
    left: &IdSet,
    right_label: &str,
    right: &IdSet,
) -> CheckOutcome {
    let mut discrepancies = Vec::new();
    for id in left.difference(right) {
        discrepancies.push(Discrepancy::MissingKey {
            key: id.clone(),
            present_in: left_label.to_string(),
            absent_from: right_label.to_string(),
        });
    }
    for id in right.difference(left) {
        discrepancies.push(Discrepancy::MissingKey {
            key: id.clone(),
            present_in: right_label.to_string(),
            absent_from: left_label.to_string(),
        });
    }
    let warnings =
        empty_warnings(left_label, left.is_empty(), right_label, right.is_empty());
    outcome(
        name,
        format!(
            "{left_label} and {right_label} match ({} resorts)",
            left.len()
        ),
        discrepancies,
        warnings,
    )
}

/// Map comparison under an explicit policy. Missing keys are reported per
/// side first, then value mismatches for keys defined on both sides.
pub fn compare_maps(
    name: &str,
    left_label: &str,
    left: &FactMap,
    right_label: &str,
    right: &FactMap,
    policy: MapPolicy,
) -> CheckOutcome {
    let mut discrepancies = Vec::new();
    if policy == MapPolicy::Exact {
        for key in left.keys().filter(|k| !right.contains_key(*k)) {
            discrepancies.push(Discrepancy::MissingKey {
                key: key.clone(),
                present_in: left_label.to_string(),
                absent_from: right_label.to_string(),
            });
        }
        for key in right.keys().filter(|k| !left.contains_key(*k)) {
            discrepancies.push(Discrepancy::MissingKey {
                key: key.clone(),
                present_in: right_label.to_string(),
                absent_from: left_label.to_string(),
            });
        }
    }
    for (key, left_value) in left {
        if let Some(right_value) = right.get(key) {
            if left_value != right_value {
                discrepancies.push(Discrepancy::ValueMismatch {
                    key: key.clone(),
                    left_source: left_label.to_string(),
                    left: left_value.clone(),
                    right_source: right_label.to_string(),
                    right: right_value.clone(),
                });
            }
        }
    }
    let warnings =
        empty_warnings(left_label, left.is_empty(), right_label, right.is_empty());
    let shared = left.keys().filter(|k| right.contains_key(*k)).count();
    let summary_ok = match policy {
        MapPolicy::Exact => format!(
            "{left_label} and {right_label} match ({} entries)",
            left.len()
        ),
        MapPolicy::SharedKeys => format!(
            "all shared values match ({shared} of {} {left_label} / {} {right_label} entries)",
            left.len(),
            right.len()
        ),
    };
    outcome(name, summary_ok, discrepancies, warnings)
}
