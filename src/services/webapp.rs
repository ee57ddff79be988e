use crate::domain::constants::SPECIAL_ADAPTERS;
use crate::domain::models::{FactMap, IdSet};
use regex::Regex;
use std::sync::OnceLock;

fn re(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

fn main_entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"\{ id: '([a-z]+)',")
}

fn adapter_assign_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"RESORT_ADAPTERS\.([a-z]+)\s*=")
}

fn main_timezone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Main-list entries are single-line object literals; `.` stops at `\n`.
    re(&RE, r"\{ id: '([a-z]+)'.*?timezone: '([^']+)'")
}

fn pair_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    re(&RE, r"'([^']+)':\s*'([^']*)'")
}

/// Resort identifiers: union of the `VAIL_RESORTS` array entries and the
/// `RESORT_ADAPTERS.<id> = …` assignments that live outside the main list.
pub fn resort_ids(js: &str) -> IdSet {
    let mut ids = IdSet::new();
    for caps in main_entry_re().captures_iter(js) {
        ids.insert(caps[1].to_string());
    }
    for caps in adapter_assign_re().captures_iter(js) {
        ids.insert(caps[1].to_string());
    }
    ids
}

/// Timezones per resort. Main-list entries carry `timezone:` inline; each
/// special-cased adapter gets its own anchored rule. No generic fallback: an
/// entry that deviates from the expected shape contributes nothing.
pub fn timezones(js: &str) -> FactMap {
    let mut map = FactMap::new();
    for caps in main_timezone_re().captures_iter(js) {
        map.insert(caps[1].to_string(), caps[2].to_string());
    }
    for name in SPECIAL_ADAPTERS {
        let pattern = format!(
            r"RESORT_ADAPTERS\.{name}\s*=\s*\{{[^}}]*timezone:\s*'([^']+)'"
        );
        let rule = Regex::new(&pattern).expect("adapter timezone rule");
        if let Some(caps) = rule.captures(js) {
            map.insert(name.to_string(), caps[1].to_string());
        }
    }
    map
}

/// Key/value pairs of a `const NAME = {…}` object literal. An absent or
/// unrecognizably reformatted block yields an empty map, never an error.
pub fn const_object_map(js: &str, name: &str) -> FactMap {
    let pattern = format!(r"const {name}\s*=\s*\{{([^}}]+)\}}");
    let block_re = Regex::new(&pattern).expect("const object rule");
    let mut map = FactMap::new();
    if let Some(caps) = block_re.captures(js) {
        let body = caps.get(1).map_or("", |m| m.as_str());
        for pair in pair_re().captures_iter(body) {
            map.insert(pair[1].to_string(), pair[2].to_string());
        }
    }
    map
}

/// The JP→EN weather-term table. Values may still contain `\uXXXX` escapes;
/// decoding happens in the normalize stage.
pub fn translations(js: &str) -> FactMap {
    const_object_map(js, "JP_EN")
}

#[cfg(test)]
mod tests {
    use super::{const_object_map, resort_ids, timezones};

    const JS: &str = r#"
const NISEKO_STATUS_MAP = {
  'OPERATION_TEMPORARILY_SUSPENDED': 'ON_HOLD',
  'SUSPENDED_CLOSED': 'CLOSED',
};

RESORT_ADAPTERS.niseko = {
  id: 'niseko',
  timezone: 'Asia/Tokyo',
};

const VAIL_RESORTS = [
  { id: 'vail', name: 'Vail', region: 'Colorado', timezone: 'America/Denver' },
  { id: 'heavenly', name: 'Heavenly', region: 'Tahoe', timezone: 'America/Los_Angeles' },
];

RESORT_ADAPTERS.snowbird = {
  id: 'snowbird',
  name: 'Snowbird',
  timezone: 'America/Denver',
};
"#;

    #[test]
    fn ids_union_main_list_and_adapters() {
        let ids = resort_ids(JS);
        let want: Vec<&str> = vec!["heavenly", "niseko", "snowbird", "vail"];
        assert_eq!(ids.iter().map(String::as_str).collect::<Vec<_>>(), want);
    }

    #[test]
    fn timezones_cover_main_and_special_entries() {
        let tz = timezones(JS);
        assert_eq!(tz["vail"], "America/Denver");
        assert_eq!(tz["heavenly"], "America/Los_Angeles");
        assert_eq!(tz["niseko"], "Asia/Tokyo");
        assert_eq!(tz["snowbird"], "America/Denver");
        assert!(!tz.contains_key("alta"));
    }

    #[test]
    fn const_object_map_reads_status_pairs() {
        let map = const_object_map(JS, "NISEKO_STATUS_MAP");
        assert_eq!(map.len(), 2);
        assert_eq!(map["SUSPENDED_CLOSED"], "CLOSED");
    }

    #[test]
    fn absent_block_yields_empty_map() {
        assert!(const_object_map(JS, "VAIL_STATUS_MAP").is_empty());
    }
}
