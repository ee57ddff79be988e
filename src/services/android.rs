use crate::domain::models::{FactMap, IdSet, LiftStatus};
use regex::Regex;
use std::sync::OnceLock;

fn resort_config_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"ResortConfig\("([a-z]+)""#).unwrap())
}

fn dispatch_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(\w+)"\s*->\s*(\w+)"#).unwrap())
}

/// Token→status map derived from `"Token" -> SYMBOL` when-branches, plus the
/// symbols that do not name a canonical status. The caller decides what to do
/// with the unmapped ones; they are not silently dropped here.
pub struct DispatchTable {
    pub mapping: FactMap,
    pub unmapped: Vec<String>,
}

/// Resort identifiers: first string literal of `ResortConfig("id", …)` calls.
pub fn resort_ids(kt: &str) -> IdSet {
    resort_config_re()
        .captures_iter(kt)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// The Vail status dispatch. Right-hand symbols are resolved through the
/// canonical enumeration; unrecognized symbols are collected for diagnostics.
pub fn vail_dispatch(kt: &str) -> DispatchTable {
    let mut mapping = FactMap::new();
    let mut unmapped = Vec::new();
    for caps in dispatch_re().captures_iter(kt) {
        let token = &caps[1];
        let symbol = &caps[2];
        match LiftStatus::from_symbol(symbol) {
            Some(status) => {
                mapping.insert(token.to_string(), status.api_value().to_string());
            }
            None => unmapped.push(symbol.to_string()),
        }
    }
    unmapped.sort();
    unmapped.dedup();
    DispatchTable { mapping, unmapped }
}
