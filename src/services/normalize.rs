use crate::domain::models::FactMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn escape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\u([0-9a-fA-F]{4})").unwrap())
}

/// Decode JS `\uXXXX` escapes to actual characters.
///
/// Only well-formed 4-hex-digit sequences that name a scalar value are
/// decoded; anything else is left verbatim. Comparison is exact-string and
/// case-sensitive after decoding.
pub fn decode_js_escapes(s: &str) -> String {
    escape_re()
        .replace_all(s, |caps: &Captures| {
            let code = u32::from_str_radix(&caps[1], 16).unwrap_or(u32::MAX);
            match char::from_u32(code) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Decode every value of a map; keys pass through untouched.
pub fn decode_map_values(map: FactMap) -> FactMap {
    map.into_iter()
        .map(|(k, v)| (k, decode_js_escapes(&v)))
        .collect()
}
