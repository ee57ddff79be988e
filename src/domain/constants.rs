//! Fixed artifact locations, relative to the repository root (`--repo`).

pub const WEBAPP_PATH: &str = "app.js";
pub const SCRAPER_PATH: &str = "scraper/shared-constants.json";
pub const ANDROID_PATH: &str =
    "android/app/src/main/java/com/jpski/niseko/data/Models.kt";

/// The scraper keeps Niseko out of `RESORT_TIMEZONES` (its adapter has the
/// timezone baked in), so its identifier set gets this entry unconditionally.
pub const SCRAPER_IMPLICIT_RESORT: &str = "niseko";

/// Adapters defined outside the main `VAIL_RESORTS` array in the web app.
/// Each needs its own anchored timezone rule; there is no generic fallback.
pub const SPECIAL_ADAPTERS: &[&str] = &["niseko", "alta", "snowbird"];

/// Status-map names shared between the web app and the scraper constants.
pub const STATUS_MAP_NAMES: &[&str] =
    &["VAIL_STATUS_MAP", "SNOWBIRD_STATUS_MAP", "NISEKO_STATUS_MAP"];
