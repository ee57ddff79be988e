use crate::domain::constants::{ANDROID_PATH, SCRAPER_PATH, WEBAPP_PATH};
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Raw contents of the three artifacts, read once up front.
///
/// An unreadable file (or malformed JSON for the scraper constants) is fatal:
/// the run aborts before any check executes and no partial report is printed.
pub struct Artifacts {
    pub webapp: String,
    pub scraper: Value,
    pub android: String,
}

pub fn load_artifacts(repo: &Path) -> anyhow::Result<Artifacts> {
    let webapp_path = repo.join(WEBAPP_PATH);
    let webapp = std::fs::read_to_string(&webapp_path)
        .with_context(|| format!("read {}", webapp_path.display()))?;

    let scraper_path = repo.join(SCRAPER_PATH);
    let raw = std::fs::read_to_string(&scraper_path)
        .with_context(|| format!("read {}", scraper_path.display()))?;
    let scraper: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse {}", scraper_path.display()))?;

    let android_path = repo.join(ANDROID_PATH);
    let android = std::fs::read_to_string(&android_path)
        .with_context(|| format!("read {}", android_path.display()))?;

    Ok(Artifacts {
        webapp,
        scraper,
        android,
    })
}
