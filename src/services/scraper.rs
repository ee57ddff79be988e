use crate::domain::constants::SCRAPER_IMPLICIT_RESORT;
use crate::domain::models::{FactMap, IdSet};
use serde_json::Value;

/// The scraper artifact is real JSON, so extraction is direct key lookup
/// rather than pattern matching. An absent key yields an empty dataset,
/// never an error.

pub fn resort_ids(shared: &Value) -> IdSet {
    let mut ids: IdSet = string_map(shared, "RESORT_TIMEZONES")
        .into_keys()
        .collect();
    ids.insert(SCRAPER_IMPLICIT_RESORT.to_string());
    ids
}

pub fn timezones(shared: &Value) -> FactMap {
    string_map(shared, "RESORT_TIMEZONES")
}

pub fn translations(shared: &Value) -> FactMap {
    string_map(shared, "JP_EN_WEATHER")
}

pub fn status_map(shared: &Value, name: &str) -> FactMap {
    string_map(shared, name)
}

fn string_map(shared: &Value, key: &str) -> FactMap {
    let mut map = FactMap::new();
    if let Some(obj) = shared.get(key).and_then(Value::as_object) {
        for (k, v) in obj {
            if let Some(s) = v.as_str() {
                map.insert(k.clone(), s.to_string());
            }
        }
    }
    map
}
