use crate::domain::constants::STATUS_MAP_NAMES;
use crate::domain::models::{CheckStatus, ParityReport, ReportSection};
use crate::services::compare::{compare_id_sets, compare_maps, MapPolicy};
use crate::services::sources::Artifacts;
use crate::services::{android, normalize, scraper, webapp};

/// Run every parity check in order and fold the outcomes into one report.
/// No check depends on another's result; all run unconditionally.
pub fn run_checks(artifacts: &Artifacts) -> ParityReport {
    let web_ids = webapp::resort_ids(&artifacts.webapp);
    let scraper_ids = scraper::resort_ids(&artifacts.scraper);
    let android_ids = android::resort_ids(&artifacts.android);

    let ids = ReportSection {
        title: "Resort ID parity".to_string(),
        checks: vec![
            compare_id_sets(
                "resort-ids web/scraper",
                "web",
                &web_ids,
                "scraper",
                &scraper_ids,
            ),
            compare_id_sets(
                "resort-ids web/android",
                "web",
                &web_ids,
                "android",
                &android_ids,
            ),
        ],
    };

    // Timezone coverage is partial per artifact, so only keys defined on both
    // sides are conflicts.
    let timezones = ReportSection {
        title: "Timezone parity".to_string(),
        checks: vec![compare_maps(
            "timezones web/scraper",
            "web",
            &webapp::timezones(&artifacts.webapp),
            "scraper",
            &scraper::timezones(&artifacts.scraper),
            MapPolicy::SharedKeys,
        )],
    };

    let web_jp_en = normalize::decode_map_values(webapp::translations(&artifacts.webapp));
    let translations = ReportSection {
        title: "JP_EN translation parity".to_string(),
        checks: vec![compare_maps(
            "jp-en web/scraper",
            "web",
            &web_jp_en,
            "scraper",
            &scraper::translations(&artifacts.scraper),
            MapPolicy::Exact,
        )],
    };

    let status_maps = ReportSection {
        title: "Status map parity".to_string(),
        checks: STATUS_MAP_NAMES
            .iter()
            .map(|name| {
                compare_maps(
                    name,
                    "web",
                    &webapp::const_object_map(&artifacts.webapp, name),
                    "scraper",
                    &scraper::status_map(&artifacts.scraper, name),
                    MapPolicy::Exact,
                )
            })
            .collect(),
    };

    let table = android::vail_dispatch(&artifacts.android);
    let mut dispatch_check = compare_maps(
        "vail-dispatch android/scraper",
        "android",
        &table.mapping,
        "scraper",
        &scraper::status_map(&artifacts.scraper, "VAIL_STATUS_MAP"),
        MapPolicy::Exact,
    );
    for symbol in &table.unmapped {
        dispatch_check
            .warnings
            .push(format!("unmapped status symbol: {symbol}"));
    }
    if dispatch_check.status == CheckStatus::Pass && !dispatch_check.warnings.is_empty() {
        dispatch_check.status = CheckStatus::Warn;
    }
    let dispatch = ReportSection {
        title: "Android dispatch parity".to_string(),
        checks: vec![dispatch_check],
    };

    ParityReport::from_sections(vec![ids, timezones, translations, status_maps, dispatch])
}
