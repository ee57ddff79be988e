use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Sorted containers so normalization (dedupe + deterministic order) is
/// structural rather than a separate pass.
pub type IdSet = BTreeSet<String>;
pub type FactMap = BTreeMap<String, String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Canonical lift/resort operating states every artifact's status vocabulary
/// must map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiftStatus {
    Operating,
    Closed,
    OnHold,
}

impl LiftStatus {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "OPERATING" => Some(Self::Operating),
            "CLOSED" => Some(Self::Closed),
            "ON_HOLD" => Some(Self::OnHold),
            _ => None,
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            Self::Operating => "OPERATING",
            Self::Closed => "CLOSED",
            Self::OnHold => "ON_HOLD",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParityError {
    #[error("artifact '{artifact}' has no '{dataset}' dataset")]
    UnsupportedDump { artifact: String, dataset: String },
}

/// One detected difference between two artifacts' copies of the same fact.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    MissingKey {
        key: String,
        present_in: String,
        absent_from: String,
    },
    ValueMismatch {
        key: String,
        left_source: String,
        left: String,
        right_source: String,
        right: String,
    },
}

impl Discrepancy {
    pub fn describe(&self) -> String {
        match self {
            Discrepancy::MissingKey {
                key,
                present_in,
                absent_from,
            } => format!("'{key}' in {present_in} but not {absent_from}"),
            Discrepancy::ValueMismatch {
                key,
                left_source,
                left,
                right_source,
                right,
            } => format!(
                "value mismatch for '{key}': {left_source}='{left}', {right_source}='{right}'"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of one parity check. Pure value: checks return these instead of
/// pushing into a shared error list.
#[derive(Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
    pub summary: String,
    pub discrepancies: Vec<Discrepancy>,
    pub warnings: Vec<String>,
}

impl CheckOutcome {
    pub fn failed(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

/// One `--- title ---` block of the report.
#[derive(Serialize)]
pub struct ReportSection {
    pub title: String,
    pub checks: Vec<CheckOutcome>,
}

#[derive(Serialize)]
pub struct ParityReport {
    pub overall: CheckStatus,
    pub sections: Vec<ReportSection>,
}

impl ParityReport {
    pub fn from_sections(sections: Vec<ReportSection>) -> Self {
        let all = || sections.iter().flat_map(|s| s.checks.iter());
        let overall = if all().any(|c| c.status == CheckStatus::Fail) {
            CheckStatus::Fail
        } else if all().any(|c| c.status == CheckStatus::Warn) {
            CheckStatus::Warn
        } else {
            CheckStatus::Pass
        };
        ParityReport { overall, sections }
    }

    pub fn passed(&self) -> bool {
        self.overall != CheckStatus::Fail
    }

    pub fn failure_descriptions(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| s.checks.iter())
            .filter(|c| c.failed())
            .flat_map(|c| {
                c.discrepancies
                    .iter()
                    .map(move |d| format!("{}: {}", c.name, d.describe()))
            })
            .collect()
    }
}
