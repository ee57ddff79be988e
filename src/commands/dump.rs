use crate::cli::{ArtifactArg, DatasetArg};
use crate::domain::models::ParityError;
use crate::services::sources::Artifacts;
use crate::services::{android, normalize, output, scraper, webapp};

/// Print one extracted, normalized dataset. Meant for debugging the
/// extraction rules when a check reports something surprising.
pub fn handle_dump(
    json: bool,
    artifacts: &Artifacts,
    artifact: ArtifactArg,
    dataset: DatasetArg,
) -> anyhow::Result<()> {
    match (artifact, dataset) {
        (ArtifactArg::Web, DatasetArg::Ids) => {
            output::print_id_set(json, &webapp::resort_ids(&artifacts.webapp))
        }
        (ArtifactArg::Web, DatasetArg::Timezones) => {
            output::print_fact_map(json, &webapp::timezones(&artifacts.webapp))
        }
        (ArtifactArg::Web, DatasetArg::Translations) => {
            let map = normalize::decode_map_values(webapp::translations(&artifacts.webapp));
            output::print_fact_map(json, &map)
        }
        (ArtifactArg::Web, DatasetArg::VailStatus) => output::print_fact_map(
            json,
            &webapp::const_object_map(&artifacts.webapp, "VAIL_STATUS_MAP"),
        ),
        (ArtifactArg::Web, DatasetArg::SnowbirdStatus) => output::print_fact_map(
            json,
            &webapp::const_object_map(&artifacts.webapp, "SNOWBIRD_STATUS_MAP"),
        ),
        (ArtifactArg::Web, DatasetArg::NisekoStatus) => output::print_fact_map(
            json,
            &webapp::const_object_map(&artifacts.webapp, "NISEKO_STATUS_MAP"),
        ),
        (ArtifactArg::Scraper, DatasetArg::Ids) => {
            output::print_id_set(json, &scraper::resort_ids(&artifacts.scraper))
        }
        (ArtifactArg::Scraper, DatasetArg::Timezones) => {
            output::print_fact_map(json, &scraper::timezones(&artifacts.scraper))
        }
        (ArtifactArg::Scraper, DatasetArg::Translations) => {
            output::print_fact_map(json, &scraper::translations(&artifacts.scraper))
        }
        (ArtifactArg::Scraper, DatasetArg::VailStatus) => output::print_fact_map(
            json,
            &scraper::status_map(&artifacts.scraper, "VAIL_STATUS_MAP"),
        ),
        (ArtifactArg::Scraper, DatasetArg::SnowbirdStatus) => output::print_fact_map(
            json,
            &scraper::status_map(&artifacts.scraper, "SNOWBIRD_STATUS_MAP"),
        ),
        (ArtifactArg::Scraper, DatasetArg::NisekoStatus) => output::print_fact_map(
            json,
            &scraper::status_map(&artifacts.scraper, "NISEKO_STATUS_MAP"),
        ),
        (ArtifactArg::Android, DatasetArg::Ids) => {
            output::print_id_set(json, &android::resort_ids(&artifacts.android))
        }
        (ArtifactArg::Android, DatasetArg::VailStatus) => {
            output::print_fact_map(json, &android::vail_dispatch(&artifacts.android).mapping)
        }
        (artifact, dataset) => Err(ParityError::UnsupportedDump {
            artifact: format!("{artifact:?}").to_lowercase(),
            dataset: format!("{dataset:?}").to_lowercase(),
        }
        .into()),
    }
}
